use crate::artifacts::core::error::{PackageError, Result};
use crate::artifacts::options::Overwrite;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Zip file the staging dir is compressed into.
#[derive(Debug)]
pub struct Archive {
    path: Box<Path>,
}

impl Archive {
    pub fn new(path: Box<Path>) -> Self {
        Archive { path }
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

    /// Writes every regular file under `source_dir` into the archive as
    /// `<source_dir name>/<relative path>` and returns the entry names.
    ///
    /// Entries are added in file name order with the zip epoch as their
    /// timestamp, so identical trees give identical archives. A failure
    /// leaves the partially written archive in place.
    pub fn compress(&self, source_dir: &Path) -> Result<Vec<String>> {
        let root_prefix = source_dir
            .file_name()
            .map(|name| format!("{}/", name.to_string_lossy()))
            .unwrap_or_default();

        let file = File::create(&self.path).map_err(PackageError::archive(self.path()))?;
        let mut writer = ZipWriter::new(file);

        let mut entries = Vec::new();

        for entry in WalkDir::new(source_dir).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(source_dir).to_path_buf();
                PackageError::archive(path)(io::Error::from(err))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(source_dir)
                .map_err(|err| PackageError::archive(entry.path())(io::Error::other(err)))?;
            let name = format!("{}{}", root_prefix, entry_name(relative));
            let size = entry
                .metadata()
                .map_err(|err| PackageError::archive(entry.path())(io::Error::from(err)))?
                .len();

            writer
                .start_file(name.as_str(), entry_options(size))
                .map_err(PackageError::archive(entry.path()))?;
            let mut reader = File::open(entry.path()).map_err(PackageError::archive(entry.path()))?;
            io::copy(&mut reader, &mut writer).map_err(PackageError::archive(entry.path()))?;

            entries.push(name);
        }

        writer.finish().map_err(PackageError::archive(self.path()))?;

        Ok(entries)
    }
}

fn entry_options(size: u64) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .large_file(size >= u64::from(u32::MAX))
}

// zip entry names always use '/' regardless of platform
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
