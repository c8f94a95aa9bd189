use super::action::Action;
use super::values::*;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional enumerated attribute, treating unrecognized values as absent.
///
/// Only the node discriminant is validated; every other attribute falls back
/// to its default instead of failing the document.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`], for attributes that fall back to an empty value.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// A node of the Flex component tree, discriminated by its `type` field.
///
/// Unrecognized discriminants are kept as [`FlexComponent::Unknown`] so the
/// resolver can decide what to do with them.
#[derive(Debug, Clone)]
pub enum FlexComponent {
    Box(FlexBox),
    Button(FlexButton),
    Filler(FlexFiller),
    Icon(FlexIcon),
    Image(FlexImage),
    Separator(FlexSeparator),
    Spacer(FlexSpacer),
    Text(FlexText),
    Span(FlexSpan),
    Video(FlexVideo),
    Unknown(String),
}

impl FlexComponent {
    /// The wire discriminant of this node.
    pub fn kind(&self) -> &str {
        match self {
            FlexComponent::Box(_) => "box",
            FlexComponent::Button(_) => "button",
            FlexComponent::Filler(_) => "filler",
            FlexComponent::Icon(_) => "icon",
            FlexComponent::Image(_) => "image",
            FlexComponent::Separator(_) => "separator",
            FlexComponent::Spacer(_) => "spacer",
            FlexComponent::Text(_) => "text",
            FlexComponent::Span(_) => "span",
            FlexComponent::Video(_) => "video",
            FlexComponent::Unknown(kind) => kind,
        }
    }

    /// Decodes a component from a JSON value, reading the discriminant first.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let component = match kind.as_str() {
            "box" => FlexComponent::Box(serde_json::from_value(value)?),
            "button" => FlexComponent::Button(serde_json::from_value(value)?),
            "filler" => FlexComponent::Filler(serde_json::from_value(value)?),
            "icon" => FlexComponent::Icon(serde_json::from_value(value)?),
            "image" => FlexComponent::Image(serde_json::from_value(value)?),
            "separator" => FlexComponent::Separator(serde_json::from_value(value)?),
            "spacer" => FlexComponent::Spacer(serde_json::from_value(value)?),
            "text" => FlexComponent::Text(serde_json::from_value(value)?),
            "span" => FlexComponent::Span(serde_json::from_value(value)?),
            "video" => FlexComponent::Video(serde_json::from_value(value)?),
            _ => FlexComponent::Unknown(kind),
        };
        Ok(component)
    }
}

impl<'de> Deserialize<'de> for FlexComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FlexComponent::from_value(value).map_err(D::Error::custom)
    }
}

/// Background gradient of a box.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub angle: String,
    pub start_color: String,
    pub end_color: String,
    #[serde(default, deserialize_with = "lenient")]
    pub center_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub center_position: Option<String>,
}

/// Positioning attributes shared by most components.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<Position>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset_top: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset_bottom: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset_start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset_end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexBox {
    #[serde(default, deserialize_with = "lenient")]
    pub layout: Option<Layout>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub contents: Vec<FlexComponent>,
    #[serde(default, deserialize_with = "lenient")]
    pub flex: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub spacing: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub padding_all: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub padding_top: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub padding_bottom: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub padding_start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub padding_end: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default, deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub border_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub border_width: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub corner_radius: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_width: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_height: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub justify_content: Option<JustifyContent>,
    #[serde(default, deserialize_with = "lenient")]
    pub align_items: Option<AlignItems>,
    #[serde(default, deserialize_with = "lenient")]
    pub background: Option<Background>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexButton {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
    #[serde(default, deserialize_with = "lenient")]
    pub flex: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<ButtonHeight>,
    #[serde(default, deserialize_with = "lenient")]
    pub style: Option<ButtonStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gravity: Option<Gravity>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjust_mode: Option<AdjustMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlexFiller {
    #[serde(default, deserialize_with = "lenient")]
    pub flex: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexIcon {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aspect_ratio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexImage {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub flex: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default, deserialize_with = "lenient")]
    pub align: Option<Align>,
    #[serde(default, deserialize_with = "lenient")]
    pub gravity: Option<Gravity>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aspect_ratio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aspect_mode: Option<AspectMode>,
    #[serde(default, deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
}

/// Separators have no growth, position or action; such attributes are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlexSeparator {
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlexSpacer {
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexText {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub contents: Vec<FlexComponent>,
    #[serde(default, deserialize_with = "lenient")]
    pub flex: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub align: Option<Align>,
    #[serde(default, deserialize_with = "lenient")]
    pub gravity: Option<Gravity>,
    #[serde(default, deserialize_with = "lenient")]
    pub wrap: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_lines: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<Weight>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub style: Option<FontStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub decoration: Option<Decoration>,
    #[serde(default, deserialize_with = "lenient")]
    pub line_spacing: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexSpan {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<Weight>,
    #[serde(default, deserialize_with = "lenient")]
    pub style: Option<FontStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub decoration: Option<Decoration>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexVideo {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub preview_url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub alt_content: Option<Box<FlexComponent>>,
    #[serde(default, deserialize_with = "lenient")]
    pub aspect_ratio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
}
