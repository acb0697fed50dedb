use crate::common::command::{out_dir, package_command, two_commit_project};
use crate::common::file::read_archive;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn no_clobber_refuses_existing_staging_dir(
    two_commit_project: TempDir,
    out_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = two_commit_project;

    package_command(project.path(), out_dir.path(), "app_2.0.0", &[])
        .assert()
        .success();
    let first_archive = read_archive(&out_dir.path().join("app_2.0.0.zip"));
    out_dir.child("app_2.0.0/marker.txt").write_str("untouched")?;

    package_command(project.path(), out_dir.path(), "app_2.0.0", &["--no-clobber"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    out_dir.child("app_2.0.0/marker.txt").assert("untouched");
    pretty_assertions::assert_eq!(
        read_archive(&out_dir.path().join("app_2.0.0.zip")),
        first_archive
    );

    Ok(())
}

#[rstest]
fn no_clobber_refuses_existing_archive(
    two_commit_project: TempDir,
    out_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    out_dir.child("app_2.0.0.zip").write_str("not a zip")?;

    package_command(
        two_commit_project.path(),
        out_dir.path(),
        "app_2.0.0",
        &["--no-clobber"],
    )
    .assert()
    .code(2);

    out_dir.child("app_2.0.0.zip").assert("not a zip");
    out_dir.child("app_2.0.0").assert(predicate::path::missing());

    Ok(())
}
