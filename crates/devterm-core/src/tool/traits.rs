//! Tool trait definition
//!
//! Defines the trait implemented by every transformation tool exposed
//! through the HTTP API.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::Result;

/// Tool execution result
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Output string from tool execution (or the error message)
    pub output: String,
    /// Whether the execution resulted in an error
    pub is_error: bool,
    /// PNG data URI, set only by image-producing tools
    pub image: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
            image: None,
        }
    }

    /// Create an error tool result
    pub fn error(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: true,
            image: None,
        }
    }

    /// Create a successful result carrying an image data URI
    pub fn image(data_uri: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            is_error: false,
            image: Some(data_uri.into()),
        }
    }
}

/// Trait for a stateless transformation tool
///
/// Implementations take a JSON input payload and return a `ToolResult`.
/// Tools hold no mutable state, so a single instance serves any number of
/// concurrent requests.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name (used for registry dispatch)
    fn name(&self) -> &str;

    /// Get a short human-readable description
    fn description(&self) -> &str;

    /// Execute the tool with the given input
    ///
    /// # Arguments
    /// * `input` - JSON value containing the tool input parameters
    ///
    /// # Returns
    /// A `ToolResult` containing the output or error message
    async fn execute(&self, input: JsonValue) -> Result<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = ToolResult::success("ok");
        assert_eq!(result.output, "ok");
        assert!(!result.is_error);
        assert!(result.image.is_none());
    }

    #[test]
    fn test_error_result() {
        let result = ToolResult::error("bad input");
        assert!(result.is_error);
        assert_eq!(result.output, "bad input");
    }

    #[test]
    fn test_image_result() {
        let result = ToolResult::image("data:image/png;base64,AAAA");
        assert!(!result.is_error);
        assert!(result.output.is_empty());
        assert_eq!(result.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
