//! Variable block scanning.
//!
//! Scanning is split in three steps:
//! - [`pattern`] finds `variable "name" { ... }` blocks in raw file content
//! - [`normalize`] cleans the captured text of each field
//! - [`emit`] prints a normalized variable as an override flag plus annotation

pub mod block;
pub mod emit;
pub mod normalize;
pub mod pattern;

pub use block::{NormalizedVariable, VariableBlock};
pub use emit::{emit, render};
pub use normalize::{
    clean, close_truncated, collapse_whitespace, normalize_default, strip_surrounding_quotes,
    strip_trailing_comment,
};
pub use pattern::{ScanError, VariableScanner};
