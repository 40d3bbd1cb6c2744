//! High-level adapter client.
//!
//! Ties the request builders, transport, and response normalizers into
//! single-shot operations. Every call is stateless and independent; build
//! and transport failures are folded into the normalized envelope rather
//! than surfaced as raw errors. Retries, if desired, belong to the caller.

use tracing::debug;

use crate::chat;
use crate::image;
use crate::translation::{self, TranslationOutcome, TranslationRequest, TranslationService};
use crate::transport::{HttpMethod, HttpTransport, ReqwestTransport};
use crate::types::{ChatMessage, ImageRequest, NormalizedResult};

/// Adapter client over an abstract transport.
#[derive(Debug, Clone)]
pub struct Client<T: HttpTransport = ReqwestTransport> {
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Client over the default reqwest transport.
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for Client<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> Client<T> {
    /// Client over a custom transport (tests, proxies, instrumentation).
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Send a chat completion request and normalize the response.
    pub async fn chat(
        &self,
        model_id: &str,
        messages: &[ChatMessage],
        credential: &str,
    ) -> NormalizedResult {
        let request = match chat::build_chat_request(model_id, messages, credential) {
            Ok(request) => request,
            Err(err) => return err.into(),
        };

        match self.transport.send(HttpMethod::Post, &request).await {
            Ok(response) => chat::parse_chat_response(model_id, response.status, &response.body),
            Err(err) => {
                debug!(model = model_id, error = %err, "chat transport failure");
                NormalizedResult::error(err.kind(), err.to_string())
            }
        }
    }

    /// Generate an image from a prompt and optional reference images.
    pub async fn generate_image(&self, request: &ImageRequest) -> NormalizedResult {
        let wire = match image::build_image_request(request) {
            Ok(wire) => wire,
            Err(err) => return err.into(),
        };

        match self.transport.send(HttpMethod::Post, &wire).await {
            Ok(response) => image::parse_image_response(response.status, &response.body),
            Err(err) => {
                debug!(error = %err, "image transport failure");
                NormalizedResult::error(err.kind(), err.to_string())
            }
        }
    }

    /// Translate text through the selected backend.
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        let wire = match translation::build_translation_request(request) {
            Ok(wire) => wire,
            Err(err) => return TranslationOutcome::from_result(request, err.into()),
        };

        let method = match request.service {
            TranslationService::Proxy => HttpMethod::Get,
            TranslationService::Baidu => HttpMethod::Post,
        };

        let result = match self.transport.send(method, &wire).await {
            Ok(response) => translation::parse_translation_response(
                request.service,
                response.status,
                &response.body,
            ),
            Err(err) => {
                debug!(service = ?request.service, error = %err, "translation transport failure");
                NormalizedResult::error(err.kind(), err.to_string())
            }
        };

        TranslationOutcome::from_result(request, result)
    }
}
