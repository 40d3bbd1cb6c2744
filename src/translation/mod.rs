//! Translation variant.
//!
//! Two interchangeable backends: an unauthenticated relay to the public
//! Google translate endpoint, and the signed Baidu vendor API. Both speak
//! the same normalized request/result envelope as the chat pipeline.

mod baidu;
mod proxy;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{NormalizedRequest, NormalizedResult};

pub use baidu::sign as baidu_sign;

/// Translation direction endpoint language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Zh,
    En,
}

impl Lang {
    /// Language code used by the Google relay.
    pub const fn google_code(&self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }

    /// Language code used by the Baidu API.
    pub const fn baidu_code(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// The other direction, for auto-flip translation.
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }
}

/// Which translation backend handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationService {
    /// Free unauthenticated relay.
    Proxy,
    /// Signed vendor API; needs an app id and secret.
    Baidu,
}

/// Caller-facing translation request.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub from: Lang,
    pub to: Lang,
    pub service: TranslationService,
    /// Baidu APP ID (signed backend only).
    pub app_id: Option<String>,
    /// Baidu secret key (signed backend only).
    pub secret: Option<String>,
}

impl TranslationRequest {
    /// Request against the free relay.
    pub fn proxy<S: Into<String>>(text: S, from: Lang, to: Lang) -> Self {
        Self {
            text: text.into(),
            from,
            to,
            service: TranslationService::Proxy,
            app_id: None,
            secret: None,
        }
    }

    /// Request against the signed Baidu backend.
    pub fn baidu<S, A, K>(text: S, from: Lang, to: Lang, app_id: A, secret: K) -> Self
    where
        S: Into<String>,
        A: Into<String>,
        K: Into<String>,
    {
        Self {
            text: text.into(),
            from,
            to,
            service: TranslationService::Baidu,
            app_id: Some(app_id.into()),
            secret: Some(secret.into()),
        }
    }
}

/// Translation result envelope mirrored back to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    pub from: Lang,
    pub to: Lang,
    pub service: TranslationService,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationOutcome {
    /// Fold a normalized result into the outcome envelope.
    pub(crate) fn from_result(request: &TranslationRequest, result: NormalizedResult) -> Self {
        Self {
            success: result.success,
            original_text: request.text.clone(),
            translated_text: result.text.unwrap_or_default(),
            from: request.from,
            to: request.to,
            service: request.service,
            error: result.error_message,
        }
    }
}

/// Build the backend-specific wire request.
pub fn build_translation_request(request: &TranslationRequest) -> Result<NormalizedRequest> {
    match request.service {
        TranslationService::Proxy => Ok(proxy::build_request(request)),
        TranslationService::Baidu => baidu::build_request(request),
    }
}

/// Normalize the backend-specific response.
pub fn parse_translation_response(
    service: TranslationService,
    status: u16,
    raw_body: &str,
) -> NormalizedResult {
    match service {
        TranslationService::Proxy => proxy::parse_response(status, raw_body),
        TranslationService::Baidu => baidu::parse_response(status, raw_body),
    }
}
