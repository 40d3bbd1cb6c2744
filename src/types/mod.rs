//! Core data types shared across the adapter.

mod chat;
mod image;
mod request;
mod result;

pub use chat::{ChatMessage, MessageRole};
pub use image::{AspectRatio, ImageRequest, ReferenceImage};
pub use request::NormalizedRequest;
pub use result::NormalizedResult;
