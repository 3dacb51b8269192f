//! Per-file and per-target report driver.
//!
//! Reads Terraform files, runs the block scanner over their content and
//! writes one override flag plus one annotation line per variable.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::scan::{NormalizedVariable, VariableScanner, emit};
use crate::walker::{TfWalker, TfWalkerError};

/// What to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    File(PathBuf),
    /// Directory walked recursively for `.tf` files.
    Directory(PathBuf),
}

impl ScanTarget {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("error reading file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] TfWalkerError),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub files_without_variables: usize,
    pub variables: usize,
}

pub struct Reporter<'a> {
    scanner: &'a VariableScanner,
    excluded_folders: Vec<PathBuf>,
}

impl<'a> Reporter<'a> {
    pub fn new(scanner: &'a VariableScanner) -> Self {
        Self { scanner, excluded_folders: Vec::new() }
    }

    /// Folders to skip when scanning a directory.
    pub fn with_exclusions(mut self, excluded_folders: Vec<PathBuf>) -> Self {
        self.excluded_folders = excluded_folders;
        self
    }

    /// Report every variable found in `content`.
    ///
    /// `label` names the source in log messages. Returns how many variables
    /// were written; zero is logged as an informational outcome.
    pub fn report_content<W: Write>(
        &self,
        label: &str,
        content: &[u8],
        out: &mut W,
    ) -> io::Result<usize> {
        let blocks = self.scanner.extract(content);
        if blocks.is_empty() {
            info!("No matches found in file {label}.");
            return Ok(0);
        }
        debug!(file = label, blocks = blocks.len(), "matched variable blocks");

        let mut written = 0;
        for block in &blocks {
            let var = NormalizedVariable::from_block(block);
            if var.name.is_empty() {
                warn!(file = label, "skipping variable block with an empty name");
                continue;
            }
            emit(&var, out)?;
            written += 1;
        }

        Ok(written)
    }

    /// Read a file and report its variables.
    pub fn report_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<usize, ReportError> {
        let content = fs::read(path).map_err(|source| ReportError::FileAccess {
            path: path.display().to_string(),
            source,
        })?;

        self.report_content(&path.display().to_string(), &content, out)
            .map_err(ReportError::Output)
    }

    /// Scan a file or directory.
    ///
    /// In directory mode a file that cannot be read is logged and skipped;
    /// in file mode the error is returned.
    pub fn run<W: Write>(
        &self,
        target: &ScanTarget,
        out: &mut W,
    ) -> Result<ReportSummary, ReportError> {
        let mut summary = ReportSummary::default();

        match target {
            ScanTarget::File(path) => {
                let n = self.report_file(path, out)?;
                summary.record(n);
            }
            ScanTarget::Directory(root) => {
                let walker =
                    TfWalker::with_exclusions(root, self.excluded_folders.clone())?;
                for path in walker.walk() {
                    match self.report_file(&path, out) {
                        Ok(n) => summary.record(n),
                        Err(e @ ReportError::FileAccess { .. }) => {
                            error!("{e}");
                            summary.files_failed += 1;
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        out.flush().map_err(ReportError::Output)?;

        debug!(
            target = %target.path().display(),
            files = summary.files_scanned,
            failed = summary.files_failed,
            empty = summary.files_without_variables,
            variables = summary.variables,
            "report complete"
        );
        Ok(summary)
    }
}

impl ReportSummary {
    fn record(&mut self, variables: usize) {
        self.files_scanned += 1;
        self.variables += variables;
        if variables == 0 {
            self.files_without_variables += 1;
        }
    }
}
