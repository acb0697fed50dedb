use crate::artifacts::core::error::{PackageError, Result};
use crate::artifacts::diff::quoted_path::{is_quoted, unquote_path};
use std::path::{Path, PathBuf};

/// Paths changed between two revisions, in the order git listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl ChangeSet {
    /// Parses `git diff --name-only` output produced inside `root`.
    pub fn parse(output: &str, root: &Path) -> Result<Self> {
        let files = output
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                if is_quoted(line) {
                    unquote_path(line)
                        .map(PathBuf::from)
                        .map_err(|source| PackageError::MalformedPath {
                            line: line.to_string(),
                            source,
                        })
                } else {
                    Ok(PathBuf::from(line))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChangeSet {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths relative to the project root.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn absolute_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|file| self.root.join(file))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
