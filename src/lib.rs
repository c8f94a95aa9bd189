//! # Fukidashi - Flex Message Layout Resolution
//!
//! **Fukidashi** turns Flex Message documents (the JSON card format used by chat
//! platforms: nested boxes, text, images, buttons, icons, separators, spacers
//! and video) into a fully resolved visual tree. Every node of the output
//! carries concrete geometry and style, ready for a host surface to paint.
//!
//! ## Core Workflow
//!
//! 1.  **Load the document**: Any JSON producer works. The envelope is checked
//!     through the `IntoMessage` trait, which is also the hook for producers
//!     with a different wrapper format.
//! 2.  **Resolve**: A `Resolver` (built with `Resolver::builder`) walks the
//!     tree, resolves size tokens, default paddings, spacing and aspect
//!     ratios, and returns a `ResolvedMessage`.
//! 3.  **Paint and interact**: The host paints the resolved tree and calls
//!     `ResolvedNode::activate` when the user taps an interactive node.
//!
//! Only the envelope is validated strictly: the document must be of type
//! `flex` and carry a `bubble` or `carousel`. Everything below that resolves
//! permissively; unknown tokens fall back to defaults and unknown component
//! kinds are skipped unless the resolver is configured to reject them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fukidashi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "type": "flex",
//!         "altText": "Order shipped",
//!         "contents": {
//!             "type": "bubble",
//!             "size": "kilo",
//!             "body": {
//!                 "type": "box",
//!                 "layout": "vertical",
//!                 "spacing": "md",
//!                 "contents": [
//!                     { "type": "text", "text": "Your order is on its way", "weight": "bold" },
//!                     { "type": "button", "style": "primary",
//!                       "action": { "type": "uri", "label": "Track", "uri": "https://example.com" } }
//!                 ]
//!             }
//!         }
//!     }"#;
//!
//!     let resolver = Resolver::builder()
//!         .with_unknown_components(UnknownComponentPolicy::Reject)
//!         .build();
//!     let message = resolver.resolve_json(json)?;
//!     println!("{}", DisplayTree::new(&message));
//!
//!     // Simulate a tap on the button without a host dispatcher.
//!     let body = &message.bubbles()[0].body.as_ref().unwrap().content;
//!     if let Some(button) = body.at(&[1]) {
//!         println!("{:?}", button.activate(None));
//!     }
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod resolver;
pub mod schema;
pub mod tokens;
pub mod tree;

#[cfg(feature = "python-bindings")]
mod python;

pub use resolver::resolve_json;
