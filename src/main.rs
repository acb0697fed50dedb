use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use relpack::areas::package::Package;
use relpack::artifacts::core::error::PackageError;
use relpack::artifacts::options::{
    DEFAULT_CURRENT_REVISION, DEFAULT_GIT_PROGRAM, DEFAULT_LAST_REVISION, Overwrite,
    PackageOptions, RevisionRange,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "relpack",
    author = "Sami Barbut-Dica",
    about = "Build an incremental release package from a git diff",
    long_about = "Copies the files changed between two revisions into <outDir>/<version> \
    and compresses that directory into <outDir>/<version>.zip. \
    Deleted files are never included.",
    disable_version_flag = true,
    help_template = r"
{name} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, help = "Print debug info")]
    debug: bool,
    #[arg(long, default_value = ".", help = "Your program dir")]
    dir: PathBuf,
    #[arg(
        long = "outDir",
        visible_alias = "out-dir",
        default_value = ".",
        help = "Output dir, default current dir"
    )]
    out_dir: PathBuf,
    #[arg(
        long = "version",
        visible_alias = "release",
        default_value = "release",
        help = "Your version like app_1.0.0"
    )]
    release: String,
    #[arg(
        long = "currentId",
        visible_alias = "current-id",
        default_value = DEFAULT_CURRENT_REVISION,
        help = "Current commit id"
    )]
    current_id: String,
    #[arg(
        long = "lastId",
        visible_alias = "last-id",
        default_value = DEFAULT_LAST_REVISION,
        help = "Last version commit id"
    )]
    last_id: String,
    #[arg(
        long = "no-clobber",
        help = "Fail instead of overwriting an existing staging dir or archive"
    )]
    no_clobber: bool,
    #[arg(
        long,
        env = "RELPACK_GIT",
        default_value = DEFAULT_GIT_PROGRAM,
        help = "The git executable to run"
    )]
    git: String,
}

impl From<Cli> for PackageOptions {
    fn from(cli: Cli) -> Self {
        let overwrite = if cli.no_clobber {
            Overwrite::Refuse
        } else {
            Overwrite::Replace
        };

        PackageOptions::new(
            cli.dir,
            cli.out_dir,
            cli.release,
            RevisionRange::new(cli.last_id, cli.current_id),
            cli.debug.into(),
            overwrite,
            cli.git,
        )
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let package = Package::new(cli.into(), Box::new(std::io::stdout()))
        .context("invalid configuration")?;

    package.release().with_context(|| {
        format!(
            "failed to package {}",
            package.options().revisions.current
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);

            let code = err
                .downcast_ref::<PackageError>()
                .map_or(1, PackageError::exit_code);
            ExitCode::from(code)
        }
    }
}
