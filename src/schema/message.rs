use super::action::Action;
use super::component::{FlexComponent, lenient, lenient_or_default};
use super::values::{BubbleSize, Direction};
use crate::error::{ResolveError, SchemaViolation};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder reported when a discriminant is missing entirely.
pub const MISSING_TYPE: &str = "<missing>";

/// The top-level document, after the envelope has been validated.
#[derive(Debug, Clone)]
pub struct FlexMessage {
    pub alt_text: String,
    pub contents: FlexContainer,
}

/// What a message carries: a single card or an ordered sequence of cards.
#[derive(Debug, Clone)]
pub enum FlexContainer {
    Bubble(FlexBubble),
    Carousel(FlexCarousel),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionStyle {
    #[serde(rename = "backgroundColor", default, deserialize_with = "lenient")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BubbleStyles {
    #[serde(default, deserialize_with = "lenient")]
    pub header: Option<SectionStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero: Option<SectionStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<SectionStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub footer: Option<SectionStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlexBubble {
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<BubbleSize>,
    #[serde(default, deserialize_with = "lenient")]
    pub direction: Option<Direction>,
    pub header: Option<FlexComponent>,
    pub hero: Option<FlexComponent>,
    pub body: Option<FlexComponent>,
    pub footer: Option<FlexComponent>,
    #[serde(default, deserialize_with = "lenient")]
    pub styles: Option<BubbleStyles>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlexCarousel {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub contents: Vec<CarouselEntry>,
}

/// One slot of a carousel. Anything other than a bubble is kept by kind only.
#[derive(Debug, Clone)]
pub enum CarouselEntry {
    Bubble(FlexBubble),
    Unknown(String),
}

impl CarouselEntry {
    pub fn kind(&self) -> &str {
        match self {
            CarouselEntry::Bubble(_) => "bubble",
            CarouselEntry::Unknown(kind) => kind,
        }
    }
}

impl<'de> Deserialize<'de> for CarouselEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match discriminant(value.get("type")).as_str() {
            "bubble" => serde_json::from_value(value)
                .map(CarouselEntry::Bubble)
                .map_err(D::Error::custom),
            other => Ok(CarouselEntry::Unknown(other.to_string())),
        }
    }
}

/// A document as it arrives on the wire, before the envelope is checked.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "type", default)]
    pub kind: Value,
    #[serde(rename = "altText", default)]
    pub alt_text: String,
    #[serde(default)]
    pub contents: Value,
}

/// A trait for producer formats that can be converted into a [`FlexMessage`].
///
/// The conversion is where the envelope's hard gates live: implementations must
/// reject anything that is not a Flex Message carrying a bubble or carousel.
pub trait IntoMessage {
    /// Consumes the object and converts it into a validated message.
    fn into_message(self) -> Result<FlexMessage, ResolveError>;
}

fn discriminant(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(kind)) => kind.clone(),
        None | Some(Value::Null) => MISSING_TYPE.to_string(),
        Some(other) => other.to_string(),
    }
}

impl FlexContainer {
    /// Decodes the container, rejecting any discriminant other than `bubble` or `carousel`.
    pub fn from_value(value: Value) -> Result<Self, ResolveError> {
        match discriminant(value.get("type")).as_str() {
            "bubble" => Ok(FlexContainer::Bubble(serde_json::from_value(value)?)),
            "carousel" => Ok(FlexContainer::Carousel(serde_json::from_value(value)?)),
            other => Err(SchemaViolation::ContentsType {
                found: other.to_string(),
            }
            .into()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FlexContainer::Bubble(_) => "bubble",
            FlexContainer::Carousel(_) => "carousel",
        }
    }
}

impl IntoMessage for RawMessage {
    fn into_message(self) -> Result<FlexMessage, ResolveError> {
        let kind = discriminant(Some(&self.kind));
        if kind != "flex" {
            return Err(SchemaViolation::MessageType { found: kind }.into());
        }
        Ok(FlexMessage {
            alt_text: self.alt_text,
            contents: FlexContainer::from_value(self.contents)?,
        })
    }
}

impl IntoMessage for Value {
    fn into_message(self) -> Result<FlexMessage, ResolveError> {
        if !self.is_object() {
            return Err(SchemaViolation::MessageType {
                found: MISSING_TYPE.to_string(),
            }
            .into());
        }
        let raw: RawMessage = serde_json::from_value(self)?;
        raw.into_message()
    }
}

impl IntoMessage for FlexMessage {
    fn into_message(self) -> Result<FlexMessage, ResolveError> {
        Ok(self)
    }
}
