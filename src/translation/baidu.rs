//! Signed Baidu translation backend.

use md5::{Digest, Md5};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{AdapterError, ErrorKind, Result};
use crate::types::{NormalizedRequest, NormalizedResult};

use super::TranslationRequest;

const ENDPOINT: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Compute the Baidu request signature.
///
/// `MD5(appId + text + salt + secret)`, hex-encoded. The concatenation
/// order is load-bearing; the vendor rejects any other arrangement.
pub fn sign(app_id: &str, text: &str, salt: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(text.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the signed form-encoded request.
///
/// Fails with [`AdapterError::MissingCredential`] unless both app id and
/// secret are present and non-blank.
pub(super) fn build_request(request: &TranslationRequest) -> Result<NormalizedRequest> {
    let (Some(app_id), Some(secret)) = (request.app_id.as_deref(), request.secret.as_deref())
    else {
        return Err(AdapterError::MissingCredential("baidu-translate".into()));
    };
    if app_id.trim().is_empty() || secret.trim().is_empty() {
        return Err(AdapterError::MissingCredential("baidu-translate".into()));
    }

    let salt = chrono::Utc::now().timestamp_millis().to_string();
    Ok(build_request_with_salt(request, app_id, secret, &salt))
}

fn build_request_with_salt(
    request: &TranslationRequest,
    app_id: &str,
    secret: &str,
    salt: &str,
) -> NormalizedRequest {
    let signature = sign(app_id, &request.text, salt, secret);
    debug!(salt, "signed Baidu translation request");

    NormalizedRequest {
        url: ENDPOINT.to_string(),
        headers: vec![(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )],
        // Flat string map; the transport re-encodes it as a form body.
        body: json!({
            "q": request.text,
            "from": request.from.baidu_code(),
            "to": request.to.baidu_code(),
            "appid": app_id,
            "salt": salt,
            "sign": signature,
        }),
    }
}

/// Map a vendor numeric error code to a kind and user-facing message.
fn map_error_code(code: &str) -> (ErrorKind, String) {
    let (kind, message) = match code {
        "52001" => (ErrorKind::Timeout, "Baidu API request timed out"),
        "52002" => (ErrorKind::UpstreamUnavailable, "Baidu system error"),
        "52003" => (ErrorKind::AuthFailure, "Unauthorized Baidu API user"),
        "54000" => (ErrorKind::InvalidRequest, "Required parameter is empty"),
        "54001" => (ErrorKind::AuthFailure, "Invalid Baidu API signature"),
        "54003" => (ErrorKind::RateLimited, "Baidu API access frequency limited"),
        "54004" => (ErrorKind::AuthFailure, "Insufficient Baidu account balance"),
        "54005" => (ErrorKind::RateLimited, "Frequent long-query requests"),
        "58000" => (ErrorKind::AuthFailure, "Client IP is not allowed"),
        "58001" => (
            ErrorKind::InvalidRequest,
            "Translation direction is not supported",
        ),
        "58002" => (ErrorKind::UpstreamUnavailable, "Baidu service is closed"),
        "90107" => (
            ErrorKind::AuthFailure,
            "Baidu certification not passed or not effective",
        ),
        other => return (ErrorKind::Unknown, format!("Baidu translation error {other}")),
    };
    (kind, message.to_string())
}

/// Parse the Baidu response.
///
/// A present `error_code` always wins over any partial result payload.
pub(super) fn parse_response(status: u16, raw_body: &str) -> NormalizedResult {
    if !(200..300).contains(&status) {
        return crate::chat::classify_error_body(status, raw_body);
    }

    let Ok(json) = serde_json::from_str::<Value>(raw_body) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Baidu API returned a non-JSON body",
        );
    };

    if let Some(code) = json.get("error_code") {
        let code = match code {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let (kind, message) = map_error_code(&code);
        return NormalizedResult::error(kind, message);
    }

    match json
        .pointer("/trans_result/0/dst")
        .and_then(Value::as_str)
    {
        Some(dst) => NormalizedResult::text(dst),
        None => NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Baidu API returned an empty translation result",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::Lang;

    #[test]
    fn signature_matches_fixed_concatenation() {
        // MD5("testhello1000sec")
        let expected = {
            let mut hasher = Md5::new();
            hasher.update(b"testhello1000sec");
            hex::encode(hasher.finalize())
        };
        assert_eq!(sign("test", "hello", "1000", "sec"), expected);
    }

    #[test]
    fn known_signature_vector() {
        // Independently computed: md5("testhello1000sec")
        assert_eq!(
            sign("test", "hello", "1000", "sec"),
            "679464ce81f91b19e5fcd66a5ee3aa6b"
        );
    }

    #[test]
    fn form_fields_are_complete_and_signed() {
        let request = TranslationRequest::baidu("hello", Lang::En, Lang::Zh, "app", "sec");
        let wire = build_request_with_salt(&request, "app", "sec", "1000");
        assert_eq!(wire.url, ENDPOINT);
        assert_eq!(
            wire.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(wire.body["q"], "hello");
        assert_eq!(wire.body["from"], "en");
        assert_eq!(wire.body["to"], "zh");
        assert_eq!(wire.body["appid"], "app");
        assert_eq!(wire.body["salt"], "1000");
        assert_eq!(wire.body["sign"], json!(sign("app", "hello", "1000", "sec")));
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let mut request = TranslationRequest::baidu("hi", Lang::En, Lang::Zh, "app", "sec");
        request.secret = None;
        assert!(matches!(
            build_request(&request).unwrap_err(),
            AdapterError::MissingCredential(_)
        ));

        let request = TranslationRequest::baidu("hi", Lang::En, Lang::Zh, "", "sec");
        assert!(matches!(
            build_request(&request).unwrap_err(),
            AdapterError::MissingCredential(_)
        ));
    }

    #[test]
    fn translated_text_is_extracted() {
        let body = r#"{"from":"en","to":"zh","trans_result":[{"src":"hello","dst":"你好"}]}"#;
        let result = parse_response(200, body);
        assert!(result.success);
        assert_eq!(result.text.as_deref(), Some("你好"));
    }

    #[test]
    fn known_error_codes_map_to_messages() {
        let result = parse_response(200, r#"{"error_code":"54003"}"#);
        assert_eq!(result.kind(), Some(ErrorKind::RateLimited));
        assert!(result.error_message.unwrap().contains("frequency"));

        let result = parse_response(200, r#"{"error_code":"54001"}"#);
        assert_eq!(result.kind(), Some(ErrorKind::AuthFailure));
    }

    #[test]
    fn numeric_error_codes_are_accepted_too() {
        let result = parse_response(200, r#"{"error_code":52001}"#);
        assert_eq!(result.kind(), Some(ErrorKind::Timeout));
    }

    #[test]
    fn unknown_error_code_falls_through_to_generic_message() {
        let result = parse_response(200, r#"{"error_code":"99999"}"#);
        assert_eq!(result.kind(), Some(ErrorKind::Unknown));
        assert_eq!(
            result.error_message.as_deref(),
            Some("Baidu translation error 99999")
        );
    }

    #[test]
    fn empty_result_list_is_malformed() {
        let result = parse_response(200, r#"{"trans_result":[]}"#);
        assert_eq!(result.kind(), Some(ErrorKind::MalformedResponse));
    }
}
