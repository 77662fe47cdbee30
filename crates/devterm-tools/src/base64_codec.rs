//! Base64 encode/decode tools

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use devterm_core::{Result, Tool, ToolResult};
use serde_json::Value;

/// Tool that base64-encodes UTF-8 text
pub struct Base64EncodeTool;

#[async_trait]
impl Tool for Base64EncodeTool {
    fn name(&self) -> &str {
        "base64_encode"
    }

    fn description(&self) -> &str {
        "Encode text as standard base64"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        Ok(ToolResult::success(STANDARD.encode(data.as_bytes())))
    }
}

/// Tool that decodes standard base64 back to text
pub struct Base64DecodeTool;

#[async_trait]
impl Tool for Base64DecodeTool {
    fn name(&self) -> &str {
        "base64_decode"
    }

    fn description(&self) -> &str {
        "Decode standard base64 into text"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();

        let bytes = match STANDARD.decode(data.trim()) {
            Ok(b) => b,
            Err(e) => return Ok(ToolResult::error(format!("Invalid base64: {}", e))),
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(ToolResult::success(text)),
            Err(e) => Ok(ToolResult::error(format!("Decoded data is not UTF-8: {}", e))),
        }
    }
}
