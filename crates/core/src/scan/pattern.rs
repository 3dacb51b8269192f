//! Block grammar for Terraform `variable` declarations.

use regex::{Captures, Regex};
use thiserror::Error;

use crate::scan::block::VariableBlock;

/// Matches `variable "name" { description = "..." type = ... default = ... }`.
///
/// Every attribute is optional but they must appear in that order. The
/// default value is lazy and stops at the first `}` preceded only by
/// whitespace, so a multi-line object default loses its own closing brace.
/// [`crate::scan::normalize::close_truncated`] puts it back.
const VARIABLE_BLOCK: &str = concat!(
    r#"variable\s*"(.*?)"\s*\{\s*"#,
    r#"(?:description\s*=\s*"(.*?)"\s*)?"#,
    r"(?:type\s*=\s*([^\n]*?))?\s*",
    r"(?:default\s*=\s*([\s\S]*?))?\s*\}",
);

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to compile variable block pattern: {0}")]
    Pattern(#[source] regex::Error),
}

/// Compiled block grammar.
///
/// Build one at startup and share it by reference; it is never mutated.
#[derive(Debug, Clone)]
pub struct VariableScanner {
    pattern: Regex,
}

impl VariableScanner {
    pub fn new() -> Result<Self, ScanError> {
        let pattern = Regex::new(VARIABLE_BLOCK).map_err(ScanError::Pattern)?;
        Ok(Self { pattern })
    }

    /// Find every variable block in `content`, in file order.
    ///
    /// Matches never overlap. Malformed blocks are skipped silently; an
    /// empty result is the "no variables" outcome, not an error. Invalid
    /// UTF-8 is replaced with U+FFFD before matching.
    pub fn extract(&self, content: &[u8]) -> Vec<VariableBlock> {
        let text = String::from_utf8_lossy(content);
        self.pattern.captures_iter(&text).map(|caps| block_from_captures(&caps)).collect()
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

fn block_from_captures(caps: &Captures<'_>) -> VariableBlock {
    let group = |i: usize| {
        caps.get(i).map(|m| m.as_str().trim().to_string()).unwrap_or_default()
    };

    VariableBlock {
        name: group(1),
        description: group(2),
        type_expr: group(3),
        default_expr: group(4),
    }
}
