use crate::areas::package::Package;
use colored::Colorize;
use std::io::Write;

impl Package {
    /// Zips the staging dir into `<outDir>/<version>.zip`.
    pub fn compress(&self) -> anyhow::Result<usize> {
        let entries = self.archive().compress(self.staging().path())?;

        for entry in &entries {
            self.debug(format_args!("archived {}", entry))?;
        }

        writeln!(
            self.writer(),
            "{} {}",
            "Compress successful. Saved in:".green(),
            self.archive().path().display()
        )?;

        Ok(entries.len())
    }
}
