use crate::artifacts::core::error::{PackageError, Result};
use crate::artifacts::diff::DiffFilter;
use crate::artifacts::diff::quoted_path::UnquoteError;
use crate::artifacts::options::RevisionRange;
use std::path::Path;
use std::process::Command;

/// The source-controlled directory a release is cut from.
#[derive(Debug)]
pub struct Project {
    path: Box<Path>,
    git_program: String,
}

impl Project {
    pub fn new(path: Box<Path>, git_program: String) -> Self {
        Project { path, git_program }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    /// Arguments for listing the paths changed between two revisions.
    ///
    /// `core.quotePath` is forced on so non-ASCII names always arrive
    /// octal-escaped, and `--relative` keeps paths relative to the project
    /// dir even when it is a subdirectory of the repository.
    pub fn diff_args(&self, revisions: &RevisionRange, filter: DiffFilter) -> Vec<String> {
        vec![
            "-c".to_string(),
            "core.quotePath=true".to_string(),
            "diff".to_string(),
            "--no-color".to_string(),
            "--no-ext-diff".to_string(),
            "--relative".to_string(),
            "--name-only".to_string(),
            format!("--diff-filter={}", filter.to_arg()),
            revisions.last.clone(),
            revisions.current.clone(),
            "--".to_string(),
        ]
    }

    /// Runs git inside the project dir and returns its stdout.
    pub fn git(&self, args: &[String]) -> Result<String> {
        let output = Command::new(&self.git_program)
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|source| PackageError::GitSpawn {
                program: self.git_program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PackageError::GitFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|err| PackageError::MalformedPath {
            line: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            source: UnquoteError::InvalidUtf8(err),
        })
    }
}
