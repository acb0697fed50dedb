use crate::areas::package::Package;
use crate::artifacts::diff::change_set::ChangeSet;
use colored::Colorize;
use std::io::Write;

impl Package {
    /// Copies every file of the change set into a fresh staging dir.
    pub fn export(&self, change_set: &ChangeSet) -> anyhow::Result<usize> {
        let staging = self.staging();

        staging.prepare(self.options().overwrite)?;

        for source in change_set.absolute_paths() {
            let destination = staging.copy_from(change_set.root(), &source)?;

            self.debug(format_args!(
                "{} => {}",
                source
                    .file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_default(),
                destination.display()
            ))?;
        }

        writeln!(
            self.writer(),
            "{} {}",
            "Export successful. Saved in:".green(),
            staging.path().display()
        )?;

        Ok(change_set.len())
    }
}
