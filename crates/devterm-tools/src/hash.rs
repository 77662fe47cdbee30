//! Hash digest tool

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use md5::Md5;
use serde_json::Value;
use sha2::{Digest, Sha256, Sha512};

/// Tool that computes MD5, SHA-256, and SHA-512 digests of the input text
pub struct HashTool;

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[async_trait]
impl Tool for HashTool {
    fn name(&self) -> &str {
        "hash"
    }

    fn description(&self) -> &str {
        "Compute MD5, SHA-256, and SHA-512 hex digests"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        let bytes = data.as_bytes();

        let output = format!(
            "MD5: {}\nSHA-256: {}\nSHA-512: {}",
            hex_digest::<Md5>(bytes),
            hex_digest::<Sha256>(bytes),
            hex_digest::<Sha512>(bytes),
        );

        Ok(ToolResult::success(output))
    }
}
