//! The output side: a fully resolved visual tree ready for a host surface to paint.
//!
//! Every node carries concrete geometry and style. Nothing here refers back to
//! the input document or to the resolver that produced it.

use crate::action::{ActionDispatch, HostEffect, dispatch_action};
use crate::error::OutputError;
use crate::geometry::{FlexGrowth, Offsets, Padding};
use crate::schema::{
    Action, AdjustMode, Align, AlignItems, AspectMode, BubbleSize, ButtonStyle, Decoration,
    Direction, FontStyle, Gravity, JustifyContent, Layout, Position, Weight,
};
use crate::tokens::Unit;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

pub mod display;

pub use display::DisplayTree;

/// The side a margin is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Left,
}

/// A margin on a single side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub side: Side,
    pub amount: Unit,
}

/// Geometry shared by components that take part in flex distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub flex: FlexGrowth,
    pub margin: Option<Margin>,
    pub position: Option<Position>,
    pub offsets: Offsets,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineHeight {
    Px(f64),
    /// Multiple of the resolved font size.
    Multiplier(f64),
}

/// Which way a separator's rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A child of a box, tagged with the spacing margin its parent adds to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedChild {
    pub spacing: Option<Margin>,
    pub node: ResolvedNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBox {
    pub layout: Layout,
    pub geometry: Geometry,
    pub padding: Padding,
    pub children: Vec<ResolvedChild>,
    pub background_color: Option<String>,
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<Unit>,
    pub corner_radius: Option<Unit>,
    pub width: Option<Unit>,
    pub max_width: Option<Unit>,
    pub height: Option<Unit>,
    pub max_height: Option<Unit>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedButton {
    pub geometry: Geometry,
    pub label: String,
    pub style: ButtonStyle,
    pub height: Unit,
    pub text_color: String,
    pub background_color: String,
    pub gravity: Option<Gravity>,
    pub adjust_mode: Option<AdjustMode>,
    /// The button opens an external link rather than posting an event.
    pub external_link: bool,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFiller {
    pub flex: FlexGrowth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIcon {
    pub geometry: Geometry,
    pub url: String,
    pub font_size: Option<Unit>,
    /// Width in em of the font size; the height is always `1em`.
    pub width_em: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedImage {
    pub geometry: Geometry,
    pub url: String,
    pub width: Unit,
    /// Height as a percentage of the width.
    pub aspect_percent: f64,
    pub aspect_mode: AspectMode,
    pub align: Align,
    pub gravity: Option<Gravity>,
    pub background_color: Option<String>,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSeparator {
    pub margin: Option<Margin>,
    pub orientation: Orientation,
    pub thickness: Unit,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpacer {
    pub height: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpan {
    pub text: String,
    pub font_size: Option<Unit>,
    pub color: Option<String>,
    pub weight: Option<Weight>,
    pub style: Option<FontStyle>,
    pub decoration: Option<Decoration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedText {
    pub geometry: Geometry,
    /// The raw text split on newlines. Always painted before any span.
    pub lines: Vec<String>,
    pub spans: Vec<ResolvedSpan>,
    pub font_size: Option<Unit>,
    pub line_height: LineHeight,
    pub wrap: bool,
    pub max_lines: Option<u32>,
    pub weight: Option<Weight>,
    pub style: Option<FontStyle>,
    pub decoration: Option<Decoration>,
    pub color: Option<String>,
    pub align: Option<Align>,
    pub gravity: Option<Gravity>,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    pub url: String,
    pub preview_url: String,
    pub aspect_percent: f64,
    pub alt_content: Option<Box<ResolvedNode>>,
    pub action: Option<Action>,
}

/// A resolved component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedNode {
    Box(ResolvedBox),
    Button(ResolvedButton),
    Filler(ResolvedFiller),
    Icon(ResolvedIcon),
    Image(ResolvedImage),
    Separator(ResolvedSeparator),
    Spacer(ResolvedSpacer),
    Text(ResolvedText),
    Span(ResolvedSpan),
    Video(ResolvedVideo),
}

impl ResolvedNode {
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedNode::Box(_) => "box",
            ResolvedNode::Button(_) => "button",
            ResolvedNode::Filler(_) => "filler",
            ResolvedNode::Icon(_) => "icon",
            ResolvedNode::Image(_) => "image",
            ResolvedNode::Separator(_) => "separator",
            ResolvedNode::Spacer(_) => "spacer",
            ResolvedNode::Text(_) => "text",
            ResolvedNode::Span(_) => "span",
            ResolvedNode::Video(_) => "video",
        }
    }

    /// The action attached to this node, if it is interactive.
    pub fn action(&self) -> Option<&Action> {
        match self {
            ResolvedNode::Box(n) => n.action.as_ref(),
            ResolvedNode::Button(n) => n.action.as_ref(),
            ResolvedNode::Image(n) => n.action.as_ref(),
            ResolvedNode::Text(n) => n.action.as_ref(),
            ResolvedNode::Video(n) => n.action.as_ref(),
            ResolvedNode::Filler(_)
            | ResolvedNode::Icon(_)
            | ResolvedNode::Separator(_)
            | ResolvedNode::Spacer(_)
            | ResolvedNode::Span(_) => None,
        }
    }

    /// Growth of this node along its parent's main axis.
    pub fn flex(&self) -> FlexGrowth {
        match self {
            ResolvedNode::Box(n) => n.geometry.flex,
            ResolvedNode::Button(n) => n.geometry.flex,
            ResolvedNode::Filler(n) => n.flex,
            ResolvedNode::Image(n) => n.geometry.flex,
            ResolvedNode::Text(n) => n.geometry.flex,
            ResolvedNode::Icon(_)
            | ResolvedNode::Separator(_)
            | ResolvedNode::Spacer(_)
            | ResolvedNode::Span(_)
            | ResolvedNode::Video(_) => FlexGrowth::None,
        }
    }

    pub fn children(&self) -> &[ResolvedChild] {
        match self {
            ResolvedNode::Box(n) => &n.children,
            _ => &[],
        }
    }

    /// Follows child indices down from this node.
    pub fn at(&self, path: &[usize]) -> Option<&ResolvedNode> {
        match path.split_first() {
            None => Some(self),
            Some((index, rest)) => self.children().get(*index)?.node.at(rest),
        }
    }

    /// Handles a user gesture on this node.
    ///
    /// Returns `None` when the node is not interactive or a dispatcher consumed
    /// the action; otherwise the fallback effect the host should perform.
    pub fn activate(&self, dispatch: Option<&dyn ActionDispatch>) -> Option<HostEffect> {
        dispatch_action(self.action()?, dispatch)
    }

    fn count_kinds(&self, counts: &mut AHashMap<&'static str, usize>) {
        *counts.entry(self.kind()).or_default() += 1;
        match self {
            ResolvedNode::Box(n) => {
                for child in &n.children {
                    child.node.count_kinds(counts);
                }
            }
            ResolvedNode::Text(n) if !n.spans.is_empty() => {
                *counts.entry("span").or_default() += n.spans.len();
            }
            ResolvedNode::Video(n) => {
                if let Some(alt) = &n.alt_content {
                    alt.count_kinds(counts);
                }
            }
            _ => {}
        }
    }
}

/// A bubble section (header, hero, body or footer) with its wrapper style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSection {
    pub background_color: Option<String>,
    pub flex: FlexGrowth,
    pub content: ResolvedNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBubble {
    pub size: BubbleSize,
    pub direction: Direction,
    pub max_width: Unit,
    pub corner_radius: Unit,
    pub header: Option<ResolvedSection>,
    pub hero: Option<ResolvedSection>,
    pub body: Option<ResolvedSection>,
    pub footer: Option<ResolvedSection>,
    pub action: Option<Action>,
}

impl ResolvedBubble {
    /// Sections in paint order, skipping absent ones.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &ResolvedSection)> {
        [
            ("header", self.header.as_ref()),
            ("hero", self.hero.as_ref()),
            ("body", self.body.as_ref()),
            ("footer", self.footer.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, section)| section.map(|s| (name, s)))
    }

    pub fn activate(&self, dispatch: Option<&dyn ActionDispatch>) -> Option<HostEffect> {
        dispatch_action(self.action.as_ref()?, dispatch)
    }
}

/// Bubbles laid out as a horizontally scrolling strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCarousel {
    pub bubbles: Vec<ResolvedBubble>,
    pub gap: Unit,
    pub inset_start: Unit,
    pub inset_end: Unit,
    pub bubble_width: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedContainer {
    Bubble(ResolvedBubble),
    Carousel(ResolvedCarousel),
}

/// The result of resolving one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMessage {
    pub alt_text: String,
    pub contents: ResolvedContainer,
}

impl ResolvedMessage {
    /// All bubbles of the message in order.
    pub fn bubbles(&self) -> Vec<&ResolvedBubble> {
        match &self.contents {
            ResolvedContainer::Bubble(b) => vec![b],
            ResolvedContainer::Carousel(c) => c.bubbles.iter().collect(),
        }
    }

    /// Number of resolved nodes per component kind, across all bubbles.
    pub fn kind_counts(&self) -> AHashMap<&'static str, usize> {
        let mut counts = AHashMap::new();
        for bubble in self.bubbles() {
            for (_, section) in bubble.sections() {
                section.content.count_kinds(&mut counts);
            }
        }
        counts
    }

    pub fn to_json_string(&self) -> Result<String, OutputError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OutputError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Writes the resolved tree as JSON for a host process to pick up.
    pub fn save_json(&self, path: &str) -> Result<(), OutputError> {
        let json = self.to_json_string()?;
        fs::write(path, json)
            .map_err(|e| OutputError::Generic(format!("Could not write to file '{}': {}", path, e)))
    }

    pub fn from_json_str(json: &str) -> Result<Self, OutputError> {
        serde_json::from_str(json)
            .map_err(|e| OutputError::Generic(format!("Deserialization failed: {}", e)))
    }
}
