//! The input side: the Flex Message document model as producers write it.

pub mod action;
pub mod component;
pub mod message;
pub mod values;

pub use action::*;
pub use component::*;
pub use message::*;
pub use values::*;
