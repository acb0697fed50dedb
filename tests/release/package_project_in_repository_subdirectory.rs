use crate::common::command::{git_commit_all, out_dir, package_command, project_dir, run_git_command};
use crate::common::file::{FileSpec, read_tree, write_file};
use assert_fs::TempDir;
use rstest::rstest;
use std::collections::BTreeMap;

#[rstest]
fn package_project_in_repository_subdirectory(
    project_dir: TempDir,
    out_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = project_dir;
    run_git_command(repository.path(), &["init", "-q"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository.path().join("web").join("index.php"),
        "v1".to_string(),
    ));
    write_file(FileSpec::new(
        repository.path().join("docs").join("readme.md"),
        "v1".to_string(),
    ));
    git_commit_all(repository.path(), "Initial commit")
        .assert()
        .success();

    write_file(FileSpec::new(
        repository.path().join("web").join("index.php"),
        "v2".to_string(),
    ));
    write_file(FileSpec::new(
        repository.path().join("docs").join("readme.md"),
        "v2".to_string(),
    ));
    git_commit_all(repository.path(), "Second commit")
        .assert()
        .success();

    package_command(
        &repository.path().join("web"),
        out_dir.path(),
        "web_1.0.1",
        &[],
    )
    .assert()
    .success();

    // only files under the project dir, relative to it
    let expected = BTreeMap::from([("index.php".to_string(), b"v2".to_vec())]);
    pretty_assertions::assert_eq!(read_tree(&out_dir.path().join("web_1.0.1")), expected);

    Ok(())
}
