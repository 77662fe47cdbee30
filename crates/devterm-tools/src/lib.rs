//! devterm-tools: Built-in tools for devterm-web
//!
//! One module per developer utility. Every tool is stateless and
//! registered by name into the shared registry.

use devterm_core::{Config, ToolRegistry};

pub mod base64_codec;
pub mod case;
pub mod hash;
pub mod http;
pub mod json;
pub mod password;
pub mod qrcode_gen;
pub mod url_codec;
pub mod uuid_gen;

pub use base64_codec::{Base64DecodeTool, Base64EncodeTool};
pub use case::CaseConvertTool;
pub use hash::HashTool;
pub use http::HttpRequestTool;
pub use json::JsonFormatTool;
pub use password::PasswordTool;
pub use qrcode_gen::QrCodeTool;
pub use url_codec::{UrlDecodeTool, UrlEncodeTool};
pub use uuid_gen::UuidTool;

use std::sync::Arc;

/// Register all built-in tools with the registry
pub fn register_default_tools(registry: &mut ToolRegistry, config: &Config) {
    registry.register(Arc::new(JsonFormatTool));
    registry.register(Arc::new(Base64EncodeTool));
    registry.register(Arc::new(Base64DecodeTool));
    registry.register(Arc::new(UrlEncodeTool));
    registry.register(Arc::new(UrlDecodeTool));
    registry.register(Arc::new(HashTool));
    registry.register(Arc::new(UuidTool));
    registry.register(Arc::new(PasswordTool));
    registry.register(Arc::new(QrCodeTool));
    registry.register(Arc::new(HttpRequestTool::new(&config.http_tool)));
    registry.register(Arc::new(CaseConvertTool));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_default_tools() {
        let mut registry = ToolRegistry::new();
        register_default_tools(&mut registry, &Config::default());

        for name in [
            "json_format",
            "base64_encode",
            "base64_decode",
            "url_encode",
            "url_decode",
            "hash",
            "uuid",
            "password",
            "qrcode",
            "http_request",
            "case_convert",
        ] {
            assert!(registry.contains(name), "missing tool: {}", name);
        }
        assert_eq!(registry.len(), 11);
    }
}
