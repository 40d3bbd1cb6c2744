//! Chat request builder and response normalizer.

mod request;
mod response;

pub use request::{MAX_OUTPUT_TOKENS, build_chat_request};
pub use response::parse_chat_response;

pub(crate) use response::classify_error_body;
