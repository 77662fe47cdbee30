//! QR code rendering tool

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use devterm_core::{Result, Tool, ToolResult};
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use serde_json::Value;
use std::io::Cursor;

/// Pixels per QR module
const MODULE_SIZE: u32 = 10;
/// Quiet zone width, in modules
const BORDER_MODULES: u32 = 4;

/// Tool that renders text into a QR code PNG, returned as a data URI
pub struct QrCodeTool;

fn render_png(data: &str) -> Result<Vec<u8>> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| devterm_core::Error::ToolExecution(format!("QR encoding failed: {}", e)))?;

    let modules = code.width() as u32;
    let colors = code.to_colors();
    let size = (modules + 2 * BORDER_MODULES) * MODULE_SIZE;

    let img = GrayImage::from_fn(size, size, |x, y| {
        let mx = (x / MODULE_SIZE).checked_sub(BORDER_MODULES);
        let my = (y / MODULE_SIZE).checked_sub(BORDER_MODULES);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                colors[(my * modules + mx) as usize] == Color::Dark
            }
            _ => false,
        };
        if dark { Luma([0u8]) } else { Luma([255u8]) }
    });

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| devterm_core::Error::ToolExecution(format!("PNG encoding failed: {}", e)))?;

    Ok(buffer.into_inner())
}

#[async_trait]
impl Tool for QrCodeTool {
    fn name(&self) -> &str {
        "qrcode"
    }

    fn description(&self) -> &str {
        "Render text as a QR code PNG data URI"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();

        match render_png(data) {
            Ok(png) => Ok(ToolResult::image(format!(
                "data:image/png;base64,{}",
                STANDARD.encode(png)
            ))),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_png_produces_png_magic() {
        let png = render_png("https://example.com").unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[tokio::test]
    async fn test_image_is_a_png_data_uri() {
        let result = QrCodeTool
            .execute(json!({"data": "hello world"}))
            .await
            .unwrap();
        assert!(!result.is_error);
        let uri = result.image.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        // Payload must decode back to bytes
        let payload = uri.trim_start_matches("data:image/png;base64,");
        assert!(STANDARD.decode(payload).is_ok());
    }

    #[tokio::test]
    async fn test_oversized_payload_is_reported_not_fatal() {
        // Far beyond QR version 40 capacity
        let huge = "x".repeat(10_000);
        let result = QrCodeTool.execute(json!({"data": huge})).await.unwrap();
        assert!(result.is_error);
    }
}
