//! HTTP API handlers
//!
//! Every tool endpoint answers `200 OK` with a uniform envelope; the
//! `success` flag carries the semantic result. Failures inside a tool
//! never become HTTP errors.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::page::INDEX_HTML;
use crate::server::AppState;

/// Uniform wire envelope for every tool endpoint
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ToolResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(message.into()),
            image: None,
        }
    }
}

/// Dispatch a request payload to a registered tool and build the envelope
async fn dispatch(state: &AppState, tool: &str, input: Value) -> Json<ToolResponse> {
    debug!(tool = %tool, "Dispatching tool request");

    let result = match state.registry.execute(tool, input).await {
        Ok(result) => result,
        // Unknown tool or internal failure: same envelope, never a crash
        Err(e) => return Json(ToolResponse::failure(e.to_string())),
    };

    Json(if result.is_error {
        ToolResponse::failure(result.output)
    } else if let Some(image) = result.image {
        ToolResponse {
            success: true,
            output: None,
            error: None,
            image: Some(image),
        }
    } else {
        ToolResponse {
            success: true,
            output: Some(result.output),
            error: None,
            image: None,
        }
    })
}

/// Serve the interactive tool page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "devterm-web"
    }))
}

pub async fn json_format(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "json_format", body).await
}

pub async fn base64_encode(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "base64_encode", body).await
}

pub async fn base64_decode(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "base64_decode", body).await
}

pub async fn url_encode(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "url_encode", body).await
}

pub async fn url_decode(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "url_decode", body).await
}

pub async fn hash_data(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "hash", body).await
}

pub async fn generate_uuid(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "uuid", body).await
}

pub async fn generate_password(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "password", body).await
}

pub async fn generate_qrcode(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "qrcode", body).await
}

pub async fn http_request(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "http_request", body).await
}

pub async fn case_convert(State(state): State<AppState>, Json(body): Json<Value>) -> Json<ToolResponse> {
    dispatch(&state, "case_convert", body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use devterm_core::{Config, ToolRegistry};
    use devterm_tools::register_default_tools;
    use serde_json::json;
    use std::sync::Arc;

    fn state() -> AppState {
        let mut registry = ToolRegistry::new();
        register_default_tools(&mut registry, &Config::default());
        AppState {
            registry: Arc::new(registry),
        }
    }

    #[tokio::test]
    async fn test_dispatch_success_envelope() {
        let response = dispatch(&state(), "case_convert", json!({"data": "Hi", "type": "upper"})).await;
        assert!(response.0.success);
        assert_eq!(response.0.output.as_deref(), Some("HI"));
        assert!(response.0.error.is_none());
        assert!(response.0.image.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_error_envelope() {
        let response = dispatch(&state(), "json_format", json!({"data": "{bad"})).await;
        assert!(!response.0.success);
        assert!(response.0.output.is_none());
        assert!(response.0.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_envelope() {
        let response = dispatch(&state(), "frobnicate", json!({})).await;
        assert!(!response.0.success);
        assert!(response.0.error.unwrap().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_dispatch_image_envelope() {
        let response = dispatch(&state(), "qrcode", json!({"data": "hi"})).await;
        assert!(response.0.success);
        assert!(response.0.output.is_none());
        assert!(response.0.image.unwrap().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_envelope_omits_absent_fields() {
        let wire = serde_json::to_string(&ToolResponse {
            success: true,
            output: Some("x".to_string()),
            error: None,
            image: None,
        })
        .unwrap();
        assert_eq!(wire, r#"{"success":true,"output":"x"}"#);
    }
}
