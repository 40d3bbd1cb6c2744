//! Image-generation variant.
//!
//! Specializes the request builder and response normalizer for Gemini's
//! multimodal `generateContent` endpoint: reference images become inline
//! data parts, the prompt is enriched with an aspect-ratio sentence, and
//! the response scan distinguishes inline images from text-only fallbacks.

use serde_json::{Value, json};
use tracing::debug;

use crate::error::{AdapterError, ErrorKind, Result};
use crate::types::{ImageRequest, NormalizedRequest, NormalizedResult};

/// Hard ceiling on reference images per request.
pub const MAX_REFERENCE_IMAGES: usize = 3;

/// Model used for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.0-flash-exp";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How much of a text-only reply is echoed into the error message.
const TEXT_PREVIEW_LEN: usize = 100;

/// Build the enriched generation prompt.
///
/// The aspect ratio is communicated as prose and the model is explicitly
/// told to output only the image; both sentences are part of the upstream
/// contract this adapter reproduces.
fn build_image_prompt(request: &ImageRequest) -> String {
    let ratio = request.aspect_ratio.description();
    let target = match request.images.len() {
        0 => "the following description",
        1 => "the provided image",
        _ => "the provided images",
    };
    format!(
        "Generate 1 high-quality image in {ratio} at 1024x1024 pixels resolution, \
         high definition based on {target}. Output only the image without any text.\
         \n\nDescription: {}",
        request.prompt
    )
}

/// Build an image-generation request.
///
/// The image-count ceiling is checked before anything else; no request is
/// constructed for an over-limit call.
pub fn build_image_request(request: &ImageRequest) -> Result<NormalizedRequest> {
    if request.images.len() > MAX_REFERENCE_IMAGES {
        return Err(AdapterError::TooManyImages {
            max: MAX_REFERENCE_IMAGES,
            count: request.images.len(),
        });
    }

    if request.api_key.trim().is_empty() {
        return Err(AdapterError::MissingCredential(IMAGE_MODEL.to_string()));
    }

    let mut parts: Vec<Value> = request
        .images
        .iter()
        .map(|image| {
            json!({
                "inlineData": {
                    "data": image.base64,
                    "mimeType": image.mime_type.as_deref().unwrap_or("image/png"),
                }
            })
        })
        .collect();
    parts.push(json!({ "text": build_image_prompt(request) }));

    let url = format!(
        "{API_BASE}/{IMAGE_MODEL}:generateContent?key={}",
        urlencoding::encode(&request.api_key)
    );

    debug!(
        images = request.images.len(),
        ratio = ?request.aspect_ratio,
        "built image generation request"
    );

    Ok(NormalizedRequest {
        url,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
            }
        }),
    })
}

/// Normalize an image-generation response.
///
/// Scans all candidates' parts for inline image payloads. The first image
/// wins; extra images in a multi-image response are discarded. A text-only
/// reply is surfaced as [`ErrorKind::TextInsteadOfImage`] with a truncated
/// preview, and a reply with neither is [`ErrorKind::EmptyResponse`].
pub fn parse_image_response(status: u16, raw_body: &str) -> NormalizedResult {
    if !(200..300).contains(&status) {
        return crate::chat::classify_error_body(status, raw_body);
    }

    let Ok(json) = serde_json::from_str::<Value>(raw_body) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Image API returned a non-JSON body",
        );
    };

    let Some(candidates) = json.get("candidates").and_then(Value::as_array) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Image API response did not contain candidates",
        );
    };

    for part in candidate_parts(candidates) {
        if let Some(data) = part.pointer("/inlineData/data").and_then(Value::as_str) {
            let mime_type = part
                .pointer("/inlineData/mimeType")
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            return NormalizedResult::image(data, mime_type);
        }
    }

    // No image anywhere; the model may have explained itself in text instead.
    for part in candidate_parts(candidates) {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            let preview: String = text.chars().take(TEXT_PREVIEW_LEN).collect();
            return NormalizedResult::error(
                ErrorKind::TextInsteadOfImage,
                format!("Model returned text instead of an image: \"{preview}...\""),
            );
        }
    }

    NormalizedResult::error(
        ErrorKind::EmptyResponse,
        "The API returned no image; try rewording the prompt",
    )
}

fn candidate_parts(candidates: &[Value]) -> impl Iterator<Item = &Value> {
    candidates
        .iter()
        .filter_map(|candidate| candidate.pointer("/content/parts").and_then(Value::as_array))
        .flatten()
}
