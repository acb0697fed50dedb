use crate::artifacts::diff::quoted_path::UnquoteError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure classes of a packaging run, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad flags or unusable directories; nothing was touched.
    Configuration,
    /// `git diff` could not produce a usable change set; nothing was copied.
    Resolution,
    /// I/O failure while copying into the staging directory.
    Export,
    /// I/O failure while writing the archive.
    Archive,
}

impl ErrorKind {
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::Configuration => 2,
            ErrorKind::Resolution => 3,
            ErrorKind::Export => 4,
            ErrorKind::Archive => 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("project dir {} does not exist", .0.display())]
    MissingProjectDir(PathBuf),
    #[error("output dir {} does not exist", .0.display())]
    MissingOutputDir(PathBuf),
    #[error("invalid revision {0:?}: must be non-empty and must not start with '-'")]
    InvalidRevision(String),
    #[error("invalid version {0:?}: must be a single path segment")]
    InvalidVersion(String),
    #[error("{} already exists and overwriting is disabled", .0.display())]
    AlreadyExists(PathBuf),
    #[error(
        "staging dir {} would contain project dir {}; pick another --outDir or --version",
        .staging.display(),
        .project.display()
    )]
    StagingContainsProject { staging: PathBuf, project: PathBuf },

    #[error("failed to run {program}")]
    GitSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("git diff exited with {status}: {stderr}")]
    GitFailed { status: ExitStatus, stderr: String },
    #[error("malformed quoted path in git output: {line}")]
    MalformedPath {
        line: String,
        #[source]
        source: UnquoteError,
    },
    #[error("no changed files between {last} and {current}")]
    EmptyChangeSet { last: String, current: String },

    #[error("failed to export {}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not inside project root {}", .path.display(), .root.display())]
    OutsideProject { path: PathBuf, root: PathBuf },

    #[error("failed to archive {}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl PackageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackageError::MissingProjectDir(_)
            | PackageError::MissingOutputDir(_)
            | PackageError::InvalidRevision(_)
            | PackageError::InvalidVersion(_)
            | PackageError::AlreadyExists(_)
            | PackageError::StagingContainsProject { .. } => ErrorKind::Configuration,
            PackageError::GitSpawn { .. }
            | PackageError::GitFailed { .. }
            | PackageError::MalformedPath { .. }
            | PackageError::EmptyChangeSet { .. } => ErrorKind::Resolution,
            PackageError::Export { .. } | PackageError::OutsideProject { .. } => ErrorKind::Export,
            PackageError::Archive { .. } => ErrorKind::Archive,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }

    pub(crate) fn export(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PackageError::Export { path, source }
    }

    pub(crate) fn archive<E>(path: impl Into<PathBuf>) -> impl FnOnce(E) -> Self
    where
        E: Into<zip::result::ZipError>,
    {
        let path = path.into();
        move |source| PackageError::Archive {
            path,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackageError>;
