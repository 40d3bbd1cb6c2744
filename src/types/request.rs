//! Normalized wire request.

use serde::{Deserialize, Serialize};

/// A provider-specific request, ready for the transport layer.
///
/// Built fresh per call from an immutable registry entry; nothing in the
/// registry is ever mutated, so concurrent builds for different models or
/// credentials cannot interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRequest {
    /// Full endpoint URL, including any query-string credential.
    pub url: String,
    /// Header name/value pairs (insertion order preserved).
    pub headers: Vec<(String, String)>,
    /// Provider-specific JSON body. For form-encoded requests this is a
    /// flat string→string object that the transport re-encodes.
    pub body: serde_json::Value,
}

impl NormalizedRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
