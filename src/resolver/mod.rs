use crate::error::ResolveError;
use crate::schema::{FlexContainer, FlexMessage, IntoMessage};
use crate::tree::{ResolvedContainer, ResolvedMessage};
use serde_json::Value;

mod bubble;
mod container;
mod content;
mod context;
mod dispatch;
mod media;
mod spacing;

pub use bubble::{Section, corner_radius, default_padding, max_width};
pub use content::{DEFAULT_BUTTON_LABEL, DEFAULT_LINE_HEIGHT};
pub use context::{LayoutContext, child_spacing};
pub use media::DEFAULT_VIDEO_ASPECT;
pub use spacing::SEPARATOR_COLOR;

use dispatch::TreeDispatcher;

/// What to do with a nested component whose `type` is not recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownComponentPolicy {
    /// Leave the node out of the tree and keep resolving its siblings.
    #[default]
    Skip,
    /// Fail the whole message with [`ResolveError::UnknownComponent`].
    Reject,
}

/// Turns Flex Message documents into resolved visual trees.
///
/// A resolver holds no per-call state and can be shared between threads.
pub struct Resolver {
    dispatcher: TreeDispatcher,
}

#[derive(Debug, Default)]
pub struct ResolverBuilder {
    unknown_components: UnknownComponentPolicy,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_components(mut self, policy: UnknownComponentPolicy) -> Self {
        self.unknown_components = policy;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            dispatcher: TreeDispatcher::new(self.unknown_components),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        ResolverBuilder::new().build()
    }
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Parses and resolves a JSON document.
    pub fn resolve_json(&self, json: &str) -> Result<ResolvedMessage, ResolveError> {
        let value: Value = serde_json::from_str(json)?;
        self.resolve_value(value)
    }

    /// Resolves an already parsed document.
    pub fn resolve_value(&self, value: Value) -> Result<ResolvedMessage, ResolveError> {
        self.resolve_from(value)
    }

    /// Resolves any producer format that converts into a [`FlexMessage`].
    pub fn resolve_from<M: IntoMessage>(&self, message: M) -> Result<ResolvedMessage, ResolveError> {
        let message = message.into_message()?;
        self.resolve(&message)
    }

    /// Resolves a validated message.
    pub fn resolve(&self, message: &FlexMessage) -> Result<ResolvedMessage, ResolveError> {
        log::debug!(
            "Resolving flex message '{}' ({})",
            message.alt_text,
            message.contents.kind()
        );
        let contents = match &message.contents {
            FlexContainer::Bubble(bubble) => {
                ResolvedContainer::Bubble(self.dispatcher.resolve_bubble(bubble, "contents")?)
            }
            FlexContainer::Carousel(carousel) => {
                ResolvedContainer::Carousel(self.dispatcher.resolve_carousel(carousel)?)
            }
        };
        Ok(ResolvedMessage {
            alt_text: message.alt_text.clone(),
            contents,
        })
    }
}

/// Resolves a JSON document with the default resolver.
pub fn resolve_json(json: &str) -> Result<ResolvedMessage, ResolveError> {
    Resolver::default().resolve_json(json)
}
