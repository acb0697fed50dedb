use crate::areas::archive::Archive;
use crate::areas::project::Project;
use crate::areas::staging::Staging;
use crate::artifacts::core::error::Result;
use crate::artifacts::options::{Layout, PackageOptions};
use colored::Colorize;
use std::cell::{RefCell, RefMut};
use std::fmt::Display;
use std::io::Write;

/// One packaging run: the project, its outputs and where progress is reported.
pub struct Package {
    options: PackageOptions,
    layout: Layout,
    writer: RefCell<Box<dyn Write>>,
    project: Project,
    staging: Staging,
    archive: Archive,
}

impl Package {
    pub fn new(options: PackageOptions, writer: Box<dyn Write>) -> Result<Self> {
        let layout = options.validate()?;

        let project = Project::new(
            layout.project_root.clone().into_boxed_path(),
            options.git_program.clone(),
        );
        let staging = Staging::new(layout.staging_dir.clone().into_boxed_path());
        let archive = Archive::new(layout.archive_path.clone().into_boxed_path());

        Ok(Package {
            options,
            layout,
            writer: RefCell::new(writer),
            project,
            staging,
            archive,
        })
    }

    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub(crate) fn debug(&self, message: impl Display) -> anyhow::Result<()> {
        if self.options.verbosity.is_debug() {
            writeln!(self.writer(), "{} {}", "[debug]".dimmed(), message)?;
        }

        Ok(())
    }
}
