//! Override flag output.

use std::io::{self, Write};

use crate::scan::block::NormalizedVariable;

const ANNOTATION_INDENT: &str = "        ";

/// Write the override flag and its annotation line for one variable.
pub fn emit<W: Write>(var: &NormalizedVariable, out: &mut W) -> io::Result<()> {
    writeln!(out, "-var {}='{}'", var.name, var.default_value)?;
    if var.description.is_empty() {
        writeln!(out, "{ANNOTATION_INDENT}~> {}", var.type_expr)
    } else {
        writeln!(out, "{ANNOTATION_INDENT}~> {} value only ({})", var.type_expr, var.description)
    }
}

/// Same as [`emit`] but returns the two lines as a string.
pub fn render(var: &NormalizedVariable) -> String {
    let mut buf = Vec::new();
    emit(var, &mut buf).ok();
    String::from_utf8_lossy(&buf).into_owned()
}
