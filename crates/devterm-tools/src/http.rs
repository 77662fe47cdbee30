//! Ad-hoc HTTP client tool

use async_trait::async_trait;
use devterm_core::config::HttpToolConfig;
use devterm_core::{Result, Tool, ToolResult};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Tool that issues one outbound HTTP request and reports the response
///
/// The response is summarized as the status line, all headers, and a
/// truncated body. A slow remote cannot hold a worker past the configured
/// timeout.
pub struct HttpRequestTool {
    client: Client,
    max_body_chars: usize,
}

/// Request input parameters
#[derive(Debug, Deserialize)]
struct HttpInput {
    /// The URL to request
    url: String,
    /// HTTP method (default: GET)
    #[serde(default = "default_method")]
    method: String,
    /// Optional request body, sent for POST/PUT only
    #[serde(default)]
    body: String,
}

fn default_method() -> String {
    "GET".to_string()
}

impl HttpRequestTool {
    /// Create a new HttpRequestTool instance
    pub fn new(config: &HttpToolConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("devterm-web/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            max_body_chars: config.max_body_chars,
        }
    }

    async fn send(&self, input: &HttpInput) -> Result<String> {
        let parsed_url = url::Url::parse(&input.url)
            .map_err(|e| devterm_core::Error::ToolExecution(format!("Invalid URL: {}", e)))?;

        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(devterm_core::Error::ToolExecution(
                "Only HTTP and HTTPS URLs are supported".to_string(),
            ));
        }

        let method = Method::from_bytes(input.method.to_uppercase().as_bytes())
            .map_err(|_| {
                devterm_core::Error::ToolExecution(format!("Invalid method: {}", input.method))
            })?;

        tracing::info!(url = %input.url, method = %method, "Sending HTTP request");

        let mut request = self.client.request(method.clone(), parsed_url);
        if !input.body.is_empty() && matches!(method, Method::POST | Method::PUT) {
            request = request.body(input.body.clone());
        }

        let response = request.send().await?;

        let status = response.status();
        let mut output = format!("Status: {}\n\nHeaders:\n", status.as_u16());
        for (name, value) in response.headers() {
            output.push_str(&format!("{}: {}\n", name, value.to_str().unwrap_or("<binary>")));
        }

        let body = response.text().await?;
        let truncated: String = body.chars().take(self.max_body_chars).collect();
        output.push_str(&format!("\nBody:\n{}", truncated));

        Ok(output)
    }
}

#[async_trait]
impl Tool for HttpRequestTool {
    fn name(&self) -> &str {
        "http_request"
    }

    fn description(&self) -> &str {
        "Issue one HTTP request and report status, headers, and body"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let http_input: HttpInput = match serde_json::from_value(input) {
            Ok(v) => v,
            Err(e) => return Ok(ToolResult::error(format!("Invalid input parameters: {}", e))),
        };

        if http_input.url.trim().is_empty() {
            return Ok(ToolResult::error("URL cannot be empty"));
        }

        match self.send(&http_input).await {
            Ok(output) => Ok(ToolResult::success(output)),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool() -> HttpRequestTool {
        HttpRequestTool::new(&HttpToolConfig::default())
    }

    #[tokio::test]
    async fn test_empty_url_is_an_error() {
        let result = tool().execute(json!({"url": ""})).await.unwrap();
        assert!(result.is_error);
        assert_eq!(result.output, "URL cannot be empty");
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let result = tool().execute(json!({"url": "not a url"})).await.unwrap();
        assert!(result.is_error);
        assert!(result.output.contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_rejected() {
        let result = tool()
            .execute(json!({"url": "ftp://example.com/file"}))
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(result.output.contains("Only HTTP and HTTPS"));
    }

    #[tokio::test]
    async fn test_invalid_method_is_an_error() {
        let result = tool()
            .execute(json!({"url": "https://example.com", "method": "GE T"}))
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(result.output.contains("Invalid method"));
    }

    #[tokio::test]
    async fn test_unreachable_host_surfaces_as_error_result() {
        // Reserved TLD, guaranteed not to resolve
        let result = tool()
            .execute(json!({"url": "http://devterm-test.invalid/"}))
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(!result.output.is_empty());
    }

    #[test]
    fn test_input_defaults() {
        let input: HttpInput =
            serde_json::from_value(json!({"url": "https://example.com"})).unwrap();
        assert_eq!(input.method, "GET");
        assert!(input.body.is_empty());
    }
}
