//! Free relay backend (Google translate `gtx` endpoint).

use serde_json::Value;

use crate::error::ErrorKind;
use crate::types::{NormalizedRequest, NormalizedResult};

use super::TranslationRequest;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Build the GET request. All parameters travel in the query string; the
/// body stays empty.
pub(super) fn build_request(request: &TranslationRequest) -> NormalizedRequest {
    let url = format!(
        "{ENDPOINT}?client=gtx&sl={}&tl={}&dt=t&q={}",
        request.from.google_code(),
        request.to.google_code(),
        urlencoding::encode(&request.text),
    );
    NormalizedRequest {
        url,
        headers: Vec::new(),
        body: Value::Null,
    }
}

/// Parse the relay response.
///
/// The endpoint answers with a nested array; element `[0]` holds segment
/// arrays whose first entry is the translated chunk. Chunks concatenate
/// into the final text.
pub(super) fn parse_response(status: u16, raw_body: &str) -> NormalizedResult {
    if !(200..300).contains(&status) {
        return crate::chat::classify_error_body(status, raw_body);
    }

    let Ok(json) = serde_json::from_str::<Value>(raw_body) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Translation relay returned a non-JSON body",
        );
    };

    let Some(segments) = json.get(0).and_then(Value::as_array) else {
        return NormalizedResult::error(
            ErrorKind::MalformedResponse,
            "Translation relay response had no segment list",
        );
    };

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    NormalizedResult::text(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::Lang;

    #[test]
    fn query_string_carries_codes_and_encoded_text() {
        let request = TranslationRequest::proxy("best quality", Lang::En, Lang::Zh);
        let wire = build_request(&request);
        assert!(wire.url.starts_with(ENDPOINT));
        assert!(wire.url.contains("sl=en"));
        assert!(wire.url.contains("tl=zh-CN"));
        assert!(wire.url.contains("q=best%20quality"));
        assert!(wire.body.is_null());
    }

    #[test]
    fn segments_concatenate_in_order() {
        let body = r#"[[["Hello, ","你好，",null],["world","世界",null]],null,"zh-CN"]"#;
        let result = parse_response(200, body);
        assert!(result.success);
        assert_eq!(result.text.as_deref(), Some("Hello, world"));
    }

    #[test]
    fn missing_segment_list_is_malformed() {
        assert_eq!(
            parse_response(200, "{}").kind(),
            Some(ErrorKind::MalformedResponse)
        );
        assert_eq!(
            parse_response(200, "null").kind(),
            Some(ErrorKind::MalformedResponse)
        );
    }

    #[test]
    fn relay_throttling_maps_to_rate_limited() {
        assert_eq!(
            parse_response(429, "").kind(),
            Some(ErrorKind::RateLimited)
        );
    }
}
