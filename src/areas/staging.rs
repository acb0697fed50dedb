use crate::artifacts::core::error::{PackageError, Result};
use crate::artifacts::options::Overwrite;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Directory mirroring the subset of the project touched by a change set.
#[derive(Debug)]
pub struct Staging {
    path: Box<Path>,
}

impl Staging {
    pub fn new(path: Box<Path>) -> Self {
        Staging { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ensure_writable(&self, overwrite: Overwrite) -> Result<()> {
        if overwrite == Overwrite::Refuse && fs::symlink_metadata(&self.path).is_ok() {
            return Err(PackageError::AlreadyExists(self.path.to_path_buf()));
        }

        Ok(())
    }

    /// Creates an empty staging dir, clearing any previous run's output.
    pub fn prepare(&self, overwrite: Overwrite) -> Result<()> {
        self.ensure_writable(overwrite)?;

        if let Ok(metadata) = fs::symlink_metadata(&self.path) {
            if metadata.is_dir() {
                fs::remove_dir_all(&self.path).map_err(PackageError::export(self.path()))?;
            } else {
                fs::remove_file(&self.path).map_err(PackageError::export(self.path()))?;
            }
        }

        fs::create_dir_all(&self.path).map_err(PackageError::export(self.path()))
    }

    /// Copies `source` from under `root` to the same relative path in the
    /// staging dir and returns the destination.
    pub fn copy_from(&self, root: &Path, source: &Path) -> Result<PathBuf> {
        let relative = source
            .strip_prefix(root)
            .map_err(|_| PackageError::OutsideProject {
                path: source.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        let destination = self.path.join(relative);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(PackageError::export(parent))?;
        }

        let mut reader = File::open(source).map_err(PackageError::export(source))?;
        let mut writer = File::create(&destination).map_err(PackageError::export(&destination))?;
        io::copy(&mut reader, &mut writer).map_err(PackageError::export(&destination))?;

        Ok(destination)
    }
}
