//! JSON format/minify tool

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use serde_json::Value;

/// Tool that pretty-prints or minifies a JSON document
pub struct JsonFormatTool;

#[async_trait]
impl Tool for JsonFormatTool {
    fn name(&self) -> &str {
        "json_format"
    }

    fn description(&self) -> &str {
        "Format (2-space indent) or minify a JSON document"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        let mode = input["mode"].as_str().unwrap_or("format");

        let parsed: Value = match serde_json::from_str(data) {
            Ok(v) => v,
            Err(e) => return Ok(ToolResult::error(e.to_string())),
        };

        let output = if mode == "minify" {
            serde_json::to_string(&parsed)?
        } else {
            serde_json::to_string_pretty(&parsed)?
        };

        Ok(ToolResult::success(output))
    }
}
