use thiserror::Error;

/// Hard failures of the document envelope. These abort resolution of the whole message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error(
        "Invalid message type: expected 'flex', but received '{found}'. Only Flex Message documents can be resolved"
    )]
    MessageType { found: String },

    #[error("Invalid contents type: expected 'bubble' or 'carousel', but received '{found}'")]
    ContentsType { found: String },
}

/// Errors that can occur while resolving a message into a visual tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Failed to parse flex message JSON: {0}")]
    JsonParseError(String),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("Component at '{path}' has an unrecognized type: '{kind}'")]
    UnknownComponent { kind: String, path: String },
}

impl From<serde_json::Error> for ResolveError {
    fn from(e: serde_json::Error) -> Self {
        ResolveError::JsonParseError(e.to_string())
    }
}

/// Errors that can occur when handing a resolved tree to a host.
#[derive(Error, Debug, Clone)]
pub enum OutputError {
    #[error("{0}")]
    Generic(String),
}
