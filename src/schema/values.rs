//! Closed enumerations of the Flex Message format.

use serde::{Deserialize, Serialize};

/// Main axis of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Horizontal,
    #[default]
    Vertical,
    Baseline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleSize {
    Nano,
    Micro,
    Deca,
    Hecto,
    Kilo,
    #[default]
    Mega,
    Giga,
}

impl BubbleSize {
    pub const ALL: [BubbleSize; 7] = [
        BubbleSize::Nano,
        BubbleSize::Micro,
        BubbleSize::Deca,
        BubbleSize::Hecto,
        BubbleSize::Kilo,
        BubbleSize::Mega,
        BubbleSize::Giga,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BubbleSize::Nano => "nano",
            BubbleSize::Micro => "micro",
            BubbleSize::Deca => "deca",
            BubbleSize::Hecto => "hecto",
            BubbleSize::Kilo => "kilo",
            BubbleSize::Mega => "mega",
            BubbleSize::Giga => "giga",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    End,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Top,
    Bottom,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Cover,
    #[default]
    Fit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Link,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonHeight {
    Sm,
    #[default]
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustMode {
    #[serde(rename = "shrink-to-fit")]
    ShrinkToFit,
}

/// The twelve aspect ratios the format defines for images and videos.
pub const ASPECT_RATIOS: [&str; 12] = [
    "1:1", "1.51:1", "1.91:1", "4:3", "16:9", "20:13", "2:1", "3:1", "3:4", "9:16", "1:2", "1:3",
];

/// Size tokens shared by text, icons, images and spacers.
pub const SIZE_TOKENS: [&str; 10] = [
    "xxs", "xs", "sm", "md", "lg", "xl", "xxl", "3xl", "4xl", "5xl",
];

/// Spacing and margin tokens.
pub const SPACING_TOKENS: [&str; 7] = ["none", "xs", "sm", "md", "lg", "xl", "xxl"];

pub const BORDER_WIDTH_TOKENS: [&str; 6] =
    ["none", "light", "normal", "medium", "semi-bold", "bold"];
