//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! fukidashi crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use fukidashi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/message.json")?;
//! let message = Resolver::default().resolve_json(&json)?;
//! println!("{}", DisplayTree::new(&message));
//! # Ok(())
//! # }
//! ```

// Resolution
pub use crate::resolver::{Resolver, ResolverBuilder, UnknownComponentPolicy};

// Input documents
pub use crate::schema::{Action, FlexComponent, FlexContainer, FlexMessage, IntoMessage};

// Resolved tree
pub use crate::tree::{DisplayTree, ResolvedBubble, ResolvedContainer, ResolvedMessage, ResolvedNode};

// Interaction
pub use crate::action::{ActionDispatch, HostEffect};

// Error types
pub use crate::error::{OutputError, ResolveError, SchemaViolation};

pub use crate::tokens::Unit;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
