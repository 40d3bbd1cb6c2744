//! Chat response normalization.
//!
//! Parses heterogeneous provider JSON back into the vendor-agnostic
//! [`NormalizedResult`]. All failures are classified here; nothing is ever
//! thrown past the adapter boundary.

use serde_json::Value;
use tracing::debug;

use crate::error::{ErrorKind, classify_status};
use crate::registry::{self, ResponseShape};
use crate::types::NormalizedResult;

/// Normalize a raw provider response.
///
/// Non-2xx statuses map through the fixed status table, carrying the vendor
/// message when one can be extracted. On success the text is pulled from
/// the provider's known JSON path; an absent path yields
/// [`ErrorKind::MalformedResponse`] rather than a panic.
pub fn parse_chat_response(model_id: &str, status: u16, raw_body: &str) -> NormalizedResult {
    let Some(entry) = registry::lookup(model_id) else {
        return NormalizedResult::error(
            ErrorKind::UnsupportedModel,
            format!("Unsupported model: {model_id}"),
        );
    };

    if !(200..300).contains(&status) {
        return classify_error_body(status, raw_body);
    }

    let Ok(json) = serde_json::from_str::<Value>(raw_body) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            format!("{model_id} returned a non-JSON body"),
        );
    };

    let text = match entry.response_shape {
        ResponseShape::GeminiCandidates => json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str),
        ResponseShape::OpenAiChoices => json
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str),
    };

    match text {
        Some(text) => NormalizedResult::text(text),
        None => {
            debug!(model = model_id, "response body missing expected text path");
            NormalizedResult::error(
                ErrorKind::MalformedResponse,
                format!("{model_id} response did not contain generated text"),
            )
        }
    }
}

/// Map a non-2xx response to a normalized error.
///
/// Both the Gemini and OpenAI error envelopes nest the message under
/// `error.message`; free-form bodies fall back to the status text.
pub(crate) fn classify_error_body(status: u16, raw_body: &str) -> NormalizedResult {
    let vendor_message = extract_vendor_message(raw_body);
    let kind = classify_status(status, &vendor_message);
    let message = if vendor_message.is_empty() {
        format!("{} (HTTP {status})", kind.default_message())
    } else {
        vendor_message
    };
    NormalizedResult::error(kind, message)
}

fn extract_vendor_message(raw_body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(raw_body) else {
        return String::new();
    };
    json.pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::model_ids;

    #[test]
    fn gemini_text_is_extracted_from_candidates() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"a painterly cat"}]}}]}"#;
        let result = parse_chat_response(model_ids::GEMINI, 200, body);
        assert!(result.success);
        assert_eq!(result.text.as_deref(), Some("a painterly cat"));
    }

    #[test]
    fn openai_text_is_extracted_from_choices() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"done"}}]}"#;
        let result = parse_chat_response(model_ids::DEEPSEEK, 200, body);
        assert!(result.success);
        assert_eq!(result.text.as_deref(), Some("done"));
    }

    #[test]
    fn missing_text_path_is_malformed_not_a_panic() {
        let result = parse_chat_response(model_ids::GEMINI, 200, r#"{"candidates":[]}"#);
        assert_eq!(result.kind(), Some(ErrorKind::MalformedResponse));
        let result = parse_chat_response(model_ids::GROK, 200, "{}");
        assert_eq!(result.kind(), Some(ErrorKind::MalformedResponse));
    }

    #[test]
    fn non_json_success_body_is_malformed() {
        let result = parse_chat_response(model_ids::QWEN, 200, "<html>gateway</html>");
        assert_eq!(result.kind(), Some(ErrorKind::MalformedResponse));
    }

    #[test]
    fn http_429_maps_to_rate_limited() {
        let body = r#"{"error":{"message":"Resource has been exhausted"}}"#;
        let result = parse_chat_response(model_ids::GEMINI, 429, body);
        assert_eq!(result.kind(), Some(ErrorKind::RateLimited));
        assert!(result.error_message.unwrap().contains("exhausted"));
    }

    #[test]
    fn http_400_with_safety_message_is_safety_blocked() {
        let body = r#"{"error":{"message":"Blocked by safety settings"}}"#;
        let result = parse_chat_response(model_ids::GEMINI, 400, body);
        assert_eq!(result.kind(), Some(ErrorKind::SafetyBlocked));
    }

    #[test]
    fn http_401_maps_to_auth_failure_with_fallback_message() {
        let result = parse_chat_response(model_ids::GROK, 401, "not json");
        assert_eq!(result.kind(), Some(ErrorKind::AuthFailure));
        assert!(result.error_message.unwrap().contains("HTTP 401"));
    }

    #[test]
    fn unknown_model_is_reported_not_panicked() {
        let result = parse_chat_response("nope", 200, "{}");
        assert_eq!(result.kind(), Some(ErrorKind::UnsupportedModel));
    }
}
