//! # Promptkit - Multi-Provider Adapter for AI Image-Prompt Tooling
//!
//! Promptkit is the backend core of an AI image-generation prompt studio:
//! a multi-provider request/response adapter plus a set of pure prompt
//! text transforms.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Provider Adapter**: One abstract request (model id, messages,
//!   credential) builds the provider-specific wire request for Gemini,
//!   Grok, DeepSeek or Qwen, and the heterogeneous response JSON is
//!   normalized back into a single envelope.
//! - **Image Generation**: Multimodal Gemini specialization with reference
//!   images, aspect-ratio prompt enrichment, and inline-image extraction.
//! - **Translation**: A free relay backend and the signed Baidu vendor API.
//! - **Prompt Utilities**: Tag reorganization, weight-syntax injection,
//!   token estimation and language detection as pure functions.
//! - **Transport Seam**: All network I/O goes through the [`transport::HttpTransport`]
//!   trait; the core performs no retries and holds no shared mutable state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new();
//!     let messages = vec![
//!         ChatMessage::system("You optimize image prompts."),
//!         ChatMessage::user("a cat in the rain"),
//!     ];
//!     let result = client.chat("gemini-2.5-flash", &messages, "your-api-key").await;
//!     if result.success {
//!         println!("{}", result.text.unwrap_or_default());
//!     } else {
//!         eprintln!("{}", result.error_message.unwrap_or_default());
//!     }
//! }
//! ```
//!
//! The text utilities need no client at all:
//!
//! ```rust
//! use promptkit::text;
//!
//! let optimized = text::optimize("cat ears, masterpiece, cat ears");
//! assert_eq!(optimized, "(masterpiece:1.2), cat ears");
//! ```

pub mod chat;
pub mod client;
pub mod error;
pub mod image;
pub mod registry;
pub mod text;
pub mod translation;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::{AdapterError, ErrorKind};
pub use types::{
    AspectRatio, ChatMessage, ImageRequest, MessageRole, NormalizedRequest, NormalizedResult,
    ReferenceImage,
};

/// Common imports for downstream callers.
pub mod prelude {
    pub use crate::client::Client;
    pub use crate::error::{AdapterError, ErrorKind};
    pub use crate::translation::{Lang, TranslationRequest, TranslationService};
    pub use crate::types::{
        AspectRatio, ChatMessage, ImageRequest, MessageRole, NormalizedResult, ReferenceImage,
    };
}
