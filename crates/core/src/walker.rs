//! Recursive discovery of `.tf` files under a directory.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

const TERRAFORM_EXTENSION: &str = "tf";

#[derive(Debug, Error)]
pub enum TfWalkerError {
    #[error("directory does not exist: {0}")]
    MissingRoot(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),
}

/// Walker for discovering Terraform files below a root directory.
#[derive(Debug)]
pub struct TfWalker {
    root: PathBuf,
    /// Paths to skip, relative to root.
    excluded: Vec<PathBuf>,
}

impl TfWalker {
    pub fn new(root: &Path) -> Result<Self, TfWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips the given folders.
    ///
    /// Exclusions can be relative to root or absolute paths under it.
    pub fn with_exclusions(
        root: &Path,
        excluded: Vec<PathBuf>,
    ) -> Result<Self, TfWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| TfWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(TfWalkerError::NotADirectory(root.display().to_string()));
        }

        let excluded = excluded
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    let p = p.canonicalize().unwrap_or(p);
                    p.strip_prefix(&root).map(Path::to_path_buf).unwrap_or(p)
                } else {
                    p.components().filter(|c| !matches!(c, Component::CurDir)).collect()
                }
            })
            .collect();

        Ok(Self { root, excluded })
    }

    /// Walk the tree and return every `.tf` file in lexical order.
    ///
    /// Entries that cannot be read are logged and skipped.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_terraform_file(path) {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        if entry.depth() == 0 || self.excluded.is_empty() {
            return false;
        }

        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|relative| self.excluded.iter().any(|ex| relative.starts_with(ex)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_terraform_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == TERRAFORM_EXTENSION)
}
