use crate::areas::package::Package;

impl Package {
    /// Builds the incremental release: resolve, export, compress.
    ///
    /// The no-clobber checks run first and resolution runs before the
    /// staging dir is created, so both kinds of failure leave the output
    /// dir untouched.
    pub fn release(&self) -> anyhow::Result<()> {
        let overwrite = self.options().overwrite;
        self.staging().ensure_writable(overwrite)?;
        self.archive().ensure_writable(overwrite)?;

        let change_set = self.resolve()?;
        self.export(&change_set)?;
        self.compress()?;

        Ok(())
    }
}
