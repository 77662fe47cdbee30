//! Password generation tool

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use rand::rngs::OsRng;
use rand::Rng;
use serde_json::Value;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const DEFAULT_LENGTH: usize = 16;
const MAX_LENGTH: usize = 256;

/// Tool that generates a random password from selected character classes
///
/// Output is presented as a usable credential, so characters are drawn
/// from the OS random source (a CSPRNG), not a seeded generator.
pub struct PasswordTool;

/// The form posts `length` as a string; accept numbers too.
fn parse_length(input: &Value) -> usize {
    let length = match &input["length"] {
        Value::Number(n) => n.as_u64().unwrap_or(DEFAULT_LENGTH as u64) as usize,
        Value::String(s) => s.trim().parse().unwrap_or(DEFAULT_LENGTH),
        _ => DEFAULT_LENGTH,
    };
    length.clamp(1, MAX_LENGTH)
}

#[async_trait]
impl Tool for PasswordTool {
    fn name(&self) -> &str {
        "password"
    }

    fn description(&self) -> &str {
        "Generate a cryptographically random password"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let length = parse_length(&input);

        let mut pool = String::new();
        if input["uppercase"].as_bool().unwrap_or(false) {
            pool.push_str(UPPERCASE);
        }
        if input["lowercase"].as_bool().unwrap_or(false) {
            pool.push_str(LOWERCASE);
        }
        if input["digits"].as_bool().unwrap_or(false) {
            pool.push_str(DIGITS);
        }
        if input["special"].as_bool().unwrap_or(false) {
            pool.push_str(SPECIAL);
        }

        if pool.is_empty() {
            return Ok(ToolResult::error("Select at least one character type"));
        }

        let chars: Vec<char> = pool.chars().collect();
        let mut rng = OsRng;
        let password: String = (0..length)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect();

        Ok(ToolResult::success(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_length_and_pool_membership() {
        let result = PasswordTool
            .execute(json!({"length": 32, "uppercase": true, "digits": true}))
            .await
            .unwrap();
        assert_eq!(result.output.chars().count(), 32);
        assert!(result
            .output
            .chars()
            .all(|c| UPPERCASE.contains(c) || DIGITS.contains(c)));
    }

    #[tokio::test]
    async fn test_length_accepted_as_string() {
        let result = PasswordTool
            .execute(json!({"length": "20", "lowercase": true}))
            .await
            .unwrap();
        assert_eq!(result.output.chars().count(), 20);
    }

    #[tokio::test]
    async fn test_no_classes_selected_is_an_error() {
        let result = PasswordTool.execute(json!({"length": 16})).await.unwrap();
        assert!(result.is_error);
        assert_eq!(result.output, "Select at least one character type");
    }

    #[tokio::test]
    async fn test_special_only() {
        let result = PasswordTool
            .execute(json!({"length": 12, "special": true}))
            .await
            .unwrap();
        assert!(result.output.chars().all(|c| SPECIAL.contains(c)));
    }

    #[tokio::test]
    async fn test_length_is_clamped() {
        let result = PasswordTool
            .execute(json!({"length": 100000, "lowercase": true}))
            .await
            .unwrap();
        assert_eq!(result.output.chars().count(), MAX_LENGTH);
    }
}
