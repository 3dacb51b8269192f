#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Extract Terraform `variable` blocks and print them as `-var` override flags.

pub mod config;
pub mod report;
pub mod scan;
pub mod walker;

pub use report::{ReportError, ReportSummary, Reporter, ScanTarget};
pub use scan::{NormalizedVariable, ScanError, VariableBlock, VariableScanner};
