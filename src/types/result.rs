//! Normalized result envelope.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Vendor-agnostic success/error envelope returned to callers.
///
/// Exactly one of the success payload fields (`text`, or
/// `image_base64` + `mime_type`) or the error fields is populated.
/// When `success` is false, `error_message` is always a non-empty,
/// human-readable string callers can render directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl NormalizedResult {
    /// Successful text result.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            image_base64: None,
            mime_type: None,
            error_kind: None,
            error_message: None,
        }
    }

    /// Successful image result.
    pub fn image<S: Into<String>, M: Into<String>>(base64: S, mime_type: M) -> Self {
        Self {
            success: true,
            text: None,
            image_base64: Some(base64.into()),
            mime_type: Some(mime_type.into()),
            error_kind: None,
            error_message: None,
        }
    }

    /// Failure result. A blank `message` falls back to the kind's default
    /// so `error_message` is never empty.
    pub fn error<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        Self {
            success: false,
            text: None,
            image_base64: None,
            mime_type: None,
            error_kind: Some(kind),
            error_message: Some(message),
        }
    }

    /// Convenience accessor for the error kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }
}

impl From<crate::error::AdapterError> for NormalizedResult {
    fn from(err: crate::error::AdapterError) -> Self {
        Self::error(err.kind(), err.to_string())
    }
}
