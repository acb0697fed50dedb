//! Run configuration
//!
//! `PackageOptions` is built from the command line and validated into a
//! `Layout`: the resolved project root and the two output paths.

use crate::artifacts::core::Verbosity;
use crate::artifacts::core::error::{PackageError, Result};
use derive_new::new;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_CURRENT_REVISION: &str = "HEAD";
pub const DEFAULT_LAST_REVISION: &str = "HEAD~1";
pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const ARCHIVE_EXTENSION: &str = "zip";

/// The older and newer revision a package is built between.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RevisionRange {
    pub last: String,
    pub current: String,
}

impl Default for RevisionRange {
    fn default() -> Self {
        RevisionRange::new(
            DEFAULT_LAST_REVISION.to_string(),
            DEFAULT_CURRENT_REVISION.to_string(),
        )
    }
}

impl RevisionRange {
    // Arguments are passed to git without a shell, so a leading '-' would
    // be parsed as an option rather than a revision.
    fn validate(&self) -> Result<()> {
        [&self.last, &self.current]
            .into_iter()
            .find(|revision| revision.is_empty() || revision.starts_with('-'))
            .map_or(Ok(()), |revision| {
                Err(PackageError::InvalidRevision(revision.clone()))
            })
    }
}

/// What to do when the staging directory or archive already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    #[default]
    Replace,
    Refuse,
}

#[derive(Debug, Clone, new)]
pub struct PackageOptions {
    pub project_dir: PathBuf,
    pub out_dir: PathBuf,
    pub version: String,
    pub revisions: RevisionRange,
    pub verbosity: Verbosity,
    pub overwrite: Overwrite,
    pub git_program: String,
}

/// Filesystem locations derived from validated options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub project_root: PathBuf,
    pub staging_dir: PathBuf,
    pub archive_path: PathBuf,
}

impl PackageOptions {
    pub fn validate(&self) -> Result<Layout> {
        if !self.project_dir.is_dir() {
            return Err(PackageError::MissingProjectDir(self.project_dir.clone()));
        }
        if !self.out_dir.is_dir() {
            return Err(PackageError::MissingOutputDir(self.out_dir.clone()));
        }

        self.revisions.validate()?;

        if !is_single_segment(&self.version) {
            return Err(PackageError::InvalidVersion(self.version.clone()));
        }

        let project_root = self
            .project_dir
            .canonicalize()
            .map_err(|_| PackageError::MissingProjectDir(self.project_dir.clone()))?;
        let out_dir = self
            .out_dir
            .canonicalize()
            .map_err(|_| PackageError::MissingOutputDir(self.out_dir.clone()))?;

        // the staging dir is wiped before export
        let staging_dir = out_dir.join(&self.version);
        if project_root.starts_with(&staging_dir) {
            return Err(PackageError::StagingContainsProject {
                staging: staging_dir,
                project: project_root,
            });
        }

        Ok(Layout {
            project_root,
            staging_dir,
            archive_path: out_dir.join(format!("{}.{}", self.version, ARCHIVE_EXTENSION)),
        })
    }
}

fn is_single_segment(version: &str) -> bool {
    let mut components = Path::new(version).components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == version
    )
}
