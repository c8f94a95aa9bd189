use serde::{Deserialize, Serialize};

/// A user-interaction descriptor attached to clickable components.
///
/// Actions are carried through resolution untouched and handed to the host's
/// dispatcher exactly as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Uri {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        uri: String,
        #[serde(default, rename = "altUri", skip_serializing_if = "Option::is_none")]
        alt_uri: Option<AltUri>,
    },
    Message {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        text: String,
    },
    Postback {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        data: String,
        #[serde(
            default,
            rename = "displayText",
            skip_serializing_if = "Option::is_none"
        )]
        display_text: Option<String>,
    },
}

/// Alternative URIs for specific hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltUri {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

impl Action {
    pub fn label(&self) -> Option<&str> {
        match self {
            Action::Uri { label, .. }
            | Action::Message { label, .. }
            | Action::Postback { label, .. } => label.as_deref(),
        }
    }

    /// The wire name of the action type.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Uri { .. } => "uri",
            Action::Message { .. } => "message",
            Action::Postback { .. } => "postback",
        }
    }
}
