//! Activation of interactive nodes.
//!
//! The resolved tree only carries [`Action`] values. A host that wants to react
//! to a tap supplies an [`ActionDispatch`] when the gesture happens; without
//! one, the built-in fallback describes what a minimal host should do.

use crate::schema::Action;
use serde::{Deserialize, Serialize};

/// Receives the action attached to an activated node.
pub trait ActionDispatch {
    fn dispatch(&self, action: &Action);
}

impl<F> ActionDispatch for F
where
    F: Fn(&Action),
{
    fn dispatch(&self, action: &Action) {
        self(action)
    }
}

/// What the host should do when no dispatcher handled an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEffect {
    /// Open the URI outside the message surface.
    OpenExternal { uri: String },
    /// Show a short notice to the user.
    Notify { text: String },
}

/// The effect used when no dispatcher is present.
pub fn fallback_effect(action: &Action) -> HostEffect {
    match action {
        Action::Uri { uri, .. } => HostEffect::OpenExternal { uri: uri.clone() },
        Action::Message { text, .. } => HostEffect::Notify {
            text: format!("Message: {}", text),
        },
        Action::Postback { data, .. } => HostEffect::Notify {
            text: format!("Postback: {}", data),
        },
    }
}

/// Forwards `action` unmodified to `dispatch`, or falls back when there is none.
pub fn dispatch_action(action: &Action, dispatch: Option<&dyn ActionDispatch>) -> Option<HostEffect> {
    match dispatch {
        Some(dispatcher) => {
            log::trace!("Dispatching {} action", action.kind());
            dispatcher.dispatch(action);
            None
        }
        None => Some(fallback_effect(action)),
    }
}
