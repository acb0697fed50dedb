use crate::common::command::{out_dir, package_command, two_commit_project};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn changed_file_missing_from_working_tree_fails_with_export_exit_code(
    two_commit_project: TempDir,
    out_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = two_commit_project;

    // git still reports a.txt as changed between the two commits
    delete_path(project.path().join("a.txt").as_path());

    package_command(project.path(), out_dir.path(), "app_1.0.7", &[])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to export"))
        .stderr(predicate::str::contains("a.txt"));

    out_dir
        .child("app_1.0.7.zip")
        .assert(predicate::path::missing());

    Ok(())
}

#[rstest]
fn archive_path_taken_by_a_directory_fails_with_archive_exit_code(
    two_commit_project: TempDir,
    out_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    out_dir.child("app_1.0.7.zip").create_dir_all()?;

    package_command(two_commit_project.path(), out_dir.path(), "app_1.0.7", &[])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("failed to archive"))
        .stderr(predicate::str::contains("app_1.0.7.zip"));

    out_dir.child("app_1.0.7/a.txt").assert("one, modified");
    out_dir.child("app_1.0.7.zip").assert(predicate::path::is_dir());

    Ok(())
}
