//! Chat request building.
//!
//! Converts the caller's abstract request (model id, message list,
//! credential) into a provider-specific wire request. Registry entries are
//! read-only templates; every call allocates fresh headers and bodies.

use serde_json::json;
use tracing::debug;

use crate::error::{AdapterError, Result};
use crate::registry::{self, AuthMode, RequestShape};
use crate::types::{ChatMessage, NormalizedRequest};

/// Output-token ceiling applied to every chat provider.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Build a provider-specific chat request.
///
/// Fails with [`AdapterError::UnsupportedModel`] when the model id has no
/// registry entry and [`AdapterError::MissingCredential`] when the
/// credential is blank. Message order is preserved in every body shape.
pub fn build_chat_request(
    model_id: &str,
    messages: &[ChatMessage],
    credential: &str,
) -> Result<NormalizedRequest> {
    let entry = registry::lookup(model_id)
        .ok_or_else(|| AdapterError::UnsupportedModel(model_id.to_string()))?;

    if credential.trim().is_empty() {
        return Err(AdapterError::MissingCredential(model_id.to_string()));
    }

    let mut url = entry.endpoint.to_string();
    let mut headers = vec![(
        "Content-Type".to_string(),
        "application/json".to_string(),
    )];

    match entry.auth {
        AuthMode::QueryParam => {
            url.push_str("?key=");
            url.push_str(&urlencoding::encode(credential));
        }
        AuthMode::BearerHeader => {
            headers.push(("Authorization".to_string(), format!("Bearer {credential}")));
        }
        AuthMode::BearerWithExtraHeader { name, value } => {
            headers.push(("Authorization".to_string(), format!("Bearer {credential}")));
            headers.push((name.to_string(), value.to_string()));
        }
    }

    let body = match entry.request_shape {
        RequestShape::GeminiContents => build_gemini_body(messages),
        RequestShape::OpenAiChat {
            wire_model,
            temperature,
            stream_flag,
        } => build_openai_body(wire_model, temperature, stream_flag, messages),
    };

    debug!(model = model_id, url = %entry.endpoint, "built chat request");

    Ok(NormalizedRequest { url, headers, body })
}

/// Gemini `generateContent` body.
///
/// Each message becomes one `contents` element holding a single text part.
/// Roles are dropped entirely; this flattening is lossy by upstream
/// contract, not a defect to repair here.
fn build_gemini_body(messages: &[ChatMessage]) -> serde_json::Value {
    let contents: Vec<serde_json::Value> = messages
        .iter()
        .map(|msg| json!({ "parts": [{ "text": msg.content }] }))
        .collect();

    json!({
        "contents": contents,
        "generationConfig": {
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
            "temperature": 0.7,
        }
    })
}

/// OpenAI-style `chat/completions` body shared by Grok, DeepSeek and Qwen.
fn build_openai_body(
    wire_model: &str,
    temperature: f64,
    stream_flag: bool,
    messages: &[ChatMessage],
) -> serde_json::Value {
    let mut body = json!({
        "model": wire_model,
        "messages": messages,
        "max_tokens": MAX_OUTPUT_TOKENS,
        "temperature": temperature,
    });
    if stream_flag {
        body["stream"] = json!(false);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::model_ids;

    fn sample_messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("you are a prompt engineer"),
            ChatMessage::user("a cat in the rain"),
        ]
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = build_chat_request("unknown-model", &sample_messages(), "key").unwrap_err();
        assert_eq!(err, AdapterError::UnsupportedModel("unknown-model".into()));
    }

    #[test]
    fn blank_credential_is_rejected() {
        let err = build_chat_request(model_ids::GEMINI, &sample_messages(), "").unwrap_err();
        assert_eq!(
            err,
            AdapterError::MissingCredential(model_ids::GEMINI.into())
        );
        let err = build_chat_request(model_ids::GROK, &sample_messages(), "   ").unwrap_err();
        assert_eq!(err, AdapterError::MissingCredential(model_ids::GROK.into()));
    }

    #[test]
    fn gemini_uses_query_param_auth_and_flattens_roles() {
        let req = build_chat_request(model_ids::GEMINI, &sample_messages(), "k/ey").unwrap();
        assert!(req.url.ends_with("generateContent?key=k%2Fey"));
        assert!(req.header("authorization").is_none());

        let contents = req.body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0]["parts"][0]["text"], "you are a prompt engineer");
        assert_eq!(contents[1]["parts"][0]["text"], "a cat in the rain");
        assert!(contents[0].get("role").is_none());
        assert_eq!(req.body["generationConfig"]["maxOutputTokens"], 2000);
    }

    #[test]
    fn grok_uses_bearer_auth_with_stream_disabled() {
        let req = build_chat_request(model_ids::GROK, &sample_messages(), "secret").unwrap();
        assert_eq!(req.header("Authorization"), Some("Bearer secret"));
        assert_eq!(req.body["model"], "grok-4-latest");
        assert_eq!(req.body["temperature"], 0.0);
        assert_eq!(req.body["stream"], false);
        assert_eq!(req.body["messages"][0]["role"], "system");
        assert_eq!(req.body["messages"][1]["content"], "a cat in the rain");
    }

    #[test]
    fn deepseek_body_has_no_stream_field() {
        let req = build_chat_request(model_ids::DEEPSEEK, &sample_messages(), "secret").unwrap();
        assert!(req.body.get("stream").is_none());
        assert_eq!(req.body["temperature"], 0.7);
    }

    #[test]
    fn qwen_overrides_wire_model_and_disables_sse() {
        let req = build_chat_request(model_ids::QWEN, &sample_messages(), "secret").unwrap();
        assert_eq!(req.body["model"], "Qwen/Qwen3-235B-A22B-Thinking-2507");
        assert_eq!(req.header("X-DashScope-SSE"), Some("disable"));
        assert_eq!(req.body["stream"], false);
    }

    #[test]
    fn builds_are_independent_per_call() {
        let a = build_chat_request(model_ids::GEMINI, &sample_messages(), "key-a").unwrap();
        let b = build_chat_request(model_ids::GEMINI, &sample_messages(), "key-b").unwrap();
        // The query-param credential must not leak between builds.
        assert!(a.url.ends_with("key=key-a"));
        assert!(b.url.ends_with("key=key-b"));
    }

    #[test]
    fn message_order_is_preserved() {
        let messages: Vec<ChatMessage> = (0..5)
            .map(|i| ChatMessage::user(format!("msg-{i}")))
            .collect();
        let req = build_chat_request(model_ids::DEEPSEEK, &messages, "k").unwrap();
        let wire = req.body["messages"].as_array().unwrap();
        for (i, msg) in wire.iter().enumerate() {
            assert_eq!(msg["content"], format!("msg-{i}"));
        }
    }
}
