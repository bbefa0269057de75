//! Shared HTTP response helpers for the dictionary client.
//!
//! Centralizes status-code checks (404 → [`LookupError::NotFound`], 429 with
//! `Retry-After` parsing, other non-success → [`LookupError::Status`]) and body
//! decoding so the client stays focused on request construction.

use lexi_core::definition::Definition;

use crate::error::LookupError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for error statuses, returning it unchanged on success.
pub async fn check_response(
    resp: reqwest::Response,
    word: &str,
) -> Result<reqwest::Response, LookupError> {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound(word.to_string()));
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(LookupError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a successful body into definitions. An empty array means not found.
pub fn decode_definitions(body: &str, word: &str) -> Result<Vec<Definition>, LookupError> {
    let definitions: Vec<Definition> =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    if definitions.is_empty() {
        return Err(LookupError::NotFound(word.to_string()));
    }
    Ok(definitions)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn not_found_status() {
        let resp = mock_response(404, r#"{"title":"No Definitions Found"}"#);
        let err = check_response(resp, "qwzx").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(ref w) if w == "qwzx"));
    }

    #[tokio::test]
    async fn rate_limited_with_header() {
        let resp = mock_response_with_retry_after("30");
        let err = check_response(resp, "cat").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn rate_limited_default() {
        let resp = mock_response_with_retry_after("soon");
        let err = check_response(resp, "cat").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let resp = mock_response(503, "maintenance");
        let err = check_response(resp, "cat").await.unwrap_err();
        match err {
            LookupError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp, "cat").await.is_ok());
    }

    #[test]
    fn decode_valid_body() {
        let body = r#"[{"word":"cat","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A feline."}]}]}]"#;
        let defs = decode_definitions(body, "cat").unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].meanings[0].part_of_speech, "noun");
    }

    #[test]
    fn decode_empty_array_is_not_found() {
        let err = decode_definitions("[]", "cat").unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
    }

    #[test]
    fn decode_malformed_body() {
        let err = decode_definitions(r#"{"title":"odd"}"#, "cat").unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }
}
