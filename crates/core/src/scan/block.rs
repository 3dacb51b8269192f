use crate::scan::normalize::{clean, normalize_default};

/// Raw text captured for one `variable` block.
///
/// Fields that the block does not declare are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBlock {
    pub name: String,
    pub description: String,
    /// Type expression as written, e.g. `map(string)`.
    pub type_expr: String,
    /// Default value as written; may span lines and may be truncated
    /// before its closing brace.
    pub default_expr: String,
}

/// A variable with every field cleaned and ready to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedVariable {
    pub name: String,
    pub description: String,
    pub type_expr: String,
    pub default_value: String,
}

impl NormalizedVariable {
    pub fn from_block(block: &VariableBlock) -> Self {
        Self {
            name: clean(&block.name),
            description: clean(&block.description),
            type_expr: clean(&block.type_expr),
            default_value: normalize_default(&block.default_expr),
        }
    }
}

impl From<&VariableBlock> for NormalizedVariable {
    fn from(block: &VariableBlock) -> Self {
        Self::from_block(block)
    }
}
