//! Route definitions
//!
//! One POST route per tool, plus the static page and a health probe.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    base64_decode, base64_encode, case_convert, generate_password, generate_qrcode,
    generate_uuid, hash_data, health, http_request, index, json_format, url_decode, url_encode,
};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Static interactive page
        .route("/", get(index))
        // Health check
        .route("/health", get(health))
        // Tool endpoints
        .route("/api/json/format", post(json_format))
        .route("/api/base64/encode", post(base64_encode))
        .route("/api/base64/decode", post(base64_decode))
        .route("/api/url/encode", post(url_encode))
        .route("/api/url/decode", post(url_decode))
        .route("/api/hash", post(hash_data))
        .route("/api/uuid", post(generate_uuid))
        .route("/api/password", post(generate_password))
        .route("/api/qrcode", post(generate_qrcode))
        .route("/api/http", post(http_request))
        .route("/api/case", post(case_convert))
}
