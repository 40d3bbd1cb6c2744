//! Abstract HTTP transport.
//!
//! The adapter core depends only on [`HttpTransport`]: one request in, one
//! response out. Proxy selection, connection pooling, retries and timeout
//! policy all live behind this seam. Transport failures are classified
//! into the two transport-level error kinds and folded into the normalized
//! envelope by the caller.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::error::ErrorKind;
use crate::types::NormalizedRequest;

/// HTTP method for a normalized request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Raw response handed back to the normalizers.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure, before any HTTP status exists.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Network request failed: {0}")]
    Network(String),
}

impl TransportError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Network(_) => ErrorKind::NetworkFailure,
        }
    }
}

/// One-shot request/response capability.
///
/// Implementations must be safe to call concurrently; the adapter never
/// serializes calls through shared mutable state.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        request: &NormalizedRequest,
    ) -> Result<HttpResponse, TransportError>;
}

/// Default transport over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with reqwest defaults (no request timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Transport with a per-request timeout.
    ///
    /// Fails if the underlying client cannot be constructed; falling back
    /// to a client without the requested timeout would silently drop the
    /// caller's policy.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(classify_reqwest_error)?;
        Ok(Self { client })
    }

    /// Wrap a caller-configured client (custom proxy, TLS, pools).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn is_form_request(request: &NormalizedRequest) -> bool {
        request
            .header("content-type")
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        request: &NormalizedRequest,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = match method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if method == HttpMethod::Post {
            if Self::is_form_request(request) {
                let form: HashMap<String, String> = request
                    .body
                    .as_object()
                    .map(|obj| {
                        obj.iter()
                            .map(|(k, v)| {
                                let value = match v {
                                    Value::String(s) => s.clone(),
                                    other => other.to_string(),
                                };
                                (k.clone(), value)
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                builder = builder.form(&form);
            } else {
                builder = builder.json(&request.body);
            }
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(classify_reqwest_error)?;

        Ok(HttpResponse { status, body })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_kinds() {
        assert_eq!(
            TransportError::Timeout("t".into()).kind(),
            ErrorKind::Timeout
        );
        assert_eq!(
            TransportError::Network("n".into()).kind(),
            ErrorKind::NetworkFailure
        );
    }

    #[test]
    fn with_timeout_surfaces_builder_errors_instead_of_dropping_policy() {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn form_detection_reads_content_type() {
        let form = NormalizedRequest {
            url: "https://example.com".into(),
            headers: vec![(
                "Content-Type".into(),
                "application/x-www-form-urlencoded".into(),
            )],
            body: serde_json::json!({"q": "hi"}),
        };
        assert!(ReqwestTransport::is_form_request(&form));

        let json = NormalizedRequest {
            url: "https://example.com".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: serde_json::json!({}),
        };
        assert!(!ReqwestTransport::is_form_request(&json));
    }
}
