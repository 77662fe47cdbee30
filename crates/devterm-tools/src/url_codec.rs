//! URL percent-encoding tools

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Everything except unreserved characters (RFC 3986: ALPHA / DIGIT / "-" / "." / "_" / "~")
const RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Tool that percent-encodes all reserved characters
pub struct UrlEncodeTool;

#[async_trait]
impl Tool for UrlEncodeTool {
    fn name(&self) -> &str {
        "url_encode"
    }

    fn description(&self) -> &str {
        "Percent-encode all reserved URL characters"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        Ok(ToolResult::success(
            utf8_percent_encode(data, RESERVED).to_string(),
        ))
    }
}

/// Tool that decodes percent sequences, leniently
pub struct UrlDecodeTool;

#[async_trait]
impl Tool for UrlDecodeTool {
    fn name(&self) -> &str {
        "url_decode"
    }

    fn description(&self) -> &str {
        "Decode percent-encoded text"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        // Lenient: invalid sequences pass through, invalid UTF-8 is replaced
        Ok(ToolResult::success(
            percent_decode_str(data).decode_utf8_lossy().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_encode_reserved_characters() {
        let result = UrlEncodeTool
            .execute(json!({"data": "a b/c?d=e&f"}))
            .await
            .unwrap();
        assert_eq!(result.output, "a%20b%2Fc%3Fd%3De%26f");
    }

    #[tokio::test]
    async fn test_unreserved_characters_pass_through() {
        let result = UrlEncodeTool
            .execute(json!({"data": "AZaz09-._~"}))
            .await
            .unwrap();
        assert_eq!(result.output, "AZaz09-._~");
    }

    #[tokio::test]
    async fn test_round_trip() {
        let original = "hello world! ?&=#+%/ äöü";
        let encoded = UrlEncodeTool
            .execute(json!({"data": original}))
            .await
            .unwrap();
        let decoded = UrlDecodeTool
            .execute(json!({"data": encoded.output}))
            .await
            .unwrap();
        assert_eq!(decoded.output, original);
    }

    #[tokio::test]
    async fn test_decode_is_lenient_on_bad_sequences() {
        let result = UrlDecodeTool
            .execute(json!({"data": "50%Z off"}))
            .await
            .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.output, "50%Z off");
    }
}
