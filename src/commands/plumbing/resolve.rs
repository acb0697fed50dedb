use crate::areas::package::Package;
use crate::artifacts::core::error::PackageError;
use crate::artifacts::diff::DiffFilter;
use crate::artifacts::diff::change_set::ChangeSet;
use colored::Colorize;
use std::io::Write;

impl Package {
    /// Lists the files that still exist in the newer revision and differ
    /// from the older one.
    pub fn resolve(&self) -> anyhow::Result<ChangeSet> {
        let revisions = &self.options().revisions;
        let args = self
            .project()
            .diff_args(revisions, DiffFilter::existing_files());

        self.debug(format_args!(
            "git args: {} {}",
            self.project().git_program(),
            args.join(" ")
        ))?;

        let output = self.project().git(&args)?;

        self.debug(format_args!("git output:\n{}", output.trim_end()))?;

        let change_set = ChangeSet::parse(&output, self.project().path())?;

        for path in change_set.absolute_paths() {
            self.debug(format_args!("resolved {}", path.display()))?;
        }

        if change_set.is_empty() {
            return Err(PackageError::EmptyChangeSet {
                last: revisions.last.clone(),
                current: revisions.current.clone(),
            }
            .into());
        }

        writeln!(
            self.writer(),
            "{}",
            format!(
                "Resolved {} changed files between {} and {}",
                change_set.len(),
                revisions.last,
                revisions.current
            )
            .green()
        )?;

        Ok(change_set)
    }
}
