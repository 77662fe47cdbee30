//! UUID generation tool

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use serde_json::Value;
use uuid::Uuid;

/// Tool that generates a random v4 UUID
pub struct UuidTool;

#[async_trait]
impl Tool for UuidTool {
    fn name(&self) -> &str {
        "uuid"
    }

    fn description(&self) -> &str {
        "Generate a random version 4 UUID"
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult> {
        Ok(ToolResult::success(Uuid::new_v4().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_output_is_a_v4_uuid() {
        let result = UuidTool.execute(json!({})).await.unwrap();
        let parsed = Uuid::parse_str(&result.output).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_uuids_are_unique() {
        let a = UuidTool.execute(json!({})).await.unwrap();
        let b = UuidTool.execute(json!({})).await.unwrap();
        assert_ne!(a.output, b.output);
    }
}
