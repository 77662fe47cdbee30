//! Text case conversion tool

use async_trait::async_trait;
use devterm_core::{Result, Tool, ToolResult};
use serde_json::Value;

/// Tool that converts text between casing conventions
pub struct CaseConvertTool;

/// Capitalize the first letter of each alphabetic run, lowercase the rest
fn title_case(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    let mut at_word_start = true;
    for ch in data.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// First alphabetic run lowercased, subsequent runs capitalized,
/// non-letters dropped. No runs at all yields an empty string.
fn camel_case(data: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in data.chars() {
        if ch.is_alphabetic() {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::with_capacity(data.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

/// Collapse runs of non-word characters to a single separator,
/// lowercase, and strip leading/trailing separators. Underscores are
/// word characters, so snake mode must also trim literal edge
/// underscores while kebab mode leaves them alone.
fn separator_case(data: &str, separator: char) -> String {
    let mut out = String::with_capacity(data.len());
    let mut pending_separator = false;
    for ch in data.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out.trim_matches(separator).to_string()
}

/// snake_case conversion
pub fn snake_case(data: &str) -> String {
    separator_case(data, '_')
}

/// kebab-case conversion
pub fn kebab_case(data: &str) -> String {
    separator_case(data, '-')
}

#[async_trait]
impl Tool for CaseConvertTool {
    fn name(&self) -> &str {
        "case_convert"
    }

    fn description(&self) -> &str {
        "Convert text to upper, lower, title, camel, snake, or kebab case"
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let data = input["data"].as_str().unwrap_or_default();
        let kind = input["type"].as_str().unwrap_or("lower");

        let output = match kind {
            "upper" => data.to_uppercase(),
            "lower" => data.to_lowercase(),
            "title" => title_case(data),
            "camel" => camel_case(data),
            "snake" => snake_case(data),
            "kebab" => kebab_case(data),
            // unknown kinds pass the input through unchanged
            _ => data.to_string(),
        };

        Ok(ToolResult::success(output))
    }
}
