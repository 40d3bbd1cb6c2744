//! Error types for the adapter core.
//!
//! All provider/vendor failures are classified into a coarse-grained
//! [`ErrorKind`] and surfaced to callers inside a normalized envelope,
//! never as raw errors crossing the adapter boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error kind for presentation (coarse-grained).
///
/// Every failure a caller can observe maps to exactly one kind, so UI
/// layers can render consistent messages without parsing vendor bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The model id has no registry entry
    UnsupportedModel,
    /// No API key / app id / secret supplied for a provider that needs one
    MissingCredential,
    /// More reference images than the provider ceiling allows
    TooManyImages,
    /// The provider rejected the request shape or content (HTTP 400)
    InvalidRequest,
    /// The provider's safety filter blocked the content
    SafetyBlocked,
    /// The credential was rejected (HTTP 401/403)
    AuthFailure,
    /// The model is not available (HTTP 404)
    ModelUnavailable,
    /// The provider throttled the request (HTTP 429)
    RateLimited,
    /// The provider backend failed (HTTP 5xx)
    UpstreamUnavailable,
    /// The response body did not match the provider's known shape
    MalformedResponse,
    /// An image request produced a text explanation instead of an image
    TextInsteadOfImage,
    /// The provider returned neither an image nor text
    EmptyResponse,
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    NetworkFailure,
    /// Transport-level timeout
    Timeout,
    /// Anything we could not classify
    Unknown,
}

impl ErrorKind {
    /// Fallback human-readable message used when the vendor supplied none.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UnsupportedModel => "Unsupported model",
            Self::MissingCredential => "API credential is required",
            Self::TooManyImages => "Too many reference images",
            Self::InvalidRequest => "Invalid request",
            Self::SafetyBlocked => "Content was blocked by the safety filter",
            Self::AuthFailure => "API credential is invalid or expired",
            Self::ModelUnavailable => "Model is not available",
            Self::RateLimited => "Rate limit exceeded, please retry later",
            Self::UpstreamUnavailable => "Provider service is temporarily unavailable",
            Self::MalformedResponse => "Provider returned an unexpected response shape",
            Self::TextInsteadOfImage => "Model returned text instead of an image",
            Self::EmptyResponse => "Provider returned an empty response",
            Self::NetworkFailure => "Network request failed",
            Self::Timeout => "Request timed out",
            Self::Unknown => "Unknown error",
        }
    }
}

/// Classify a non-success HTTP status into an [`ErrorKind`].
///
/// `vendor_message` is the message extracted from the provider's error
/// envelope (may be empty). A 400 with a safety-related message is a
/// distinct, reportable condition.
pub fn classify_status(status: u16, vendor_message: &str) -> ErrorKind {
    match status {
        400 => {
            if vendor_message.to_lowercase().contains("safety") {
                ErrorKind::SafetyBlocked
            } else {
                ErrorKind::InvalidRequest
            }
        }
        401 | 403 => ErrorKind::AuthFailure,
        404 => ErrorKind::ModelUnavailable,
        429 => ErrorKind::RateLimited,
        500..=599 => ErrorKind::UpstreamUnavailable,
        _ => ErrorKind::Unknown,
    }
}

/// Errors produced while building a request, before anything is sent.
///
/// Response-side failures never surface as `AdapterError`; they are folded
/// into `NormalizedResult` by the response normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The model id has no registry entry
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    /// The caller supplied no credential for a provider that requires one
    #[error("API key is required for model: {0}")]
    MissingCredential(String),

    /// Reference image count exceeds the provider ceiling
    #[error("At most {max} reference images are supported, got {count}")]
    TooManyImages { max: usize, count: usize },
}

impl AdapterError {
    /// Map to the presentation-level error kind.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedModel(_) => ErrorKind::UnsupportedModel,
            Self::MissingCredential(_) => ErrorKind::MissingCredential,
            Self::TooManyImages { .. } => ErrorKind::TooManyImages,
        }
    }
}

/// Result type for request-building operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
