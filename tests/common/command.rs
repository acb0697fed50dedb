use crate::common::file::{FileSpec, delete_path, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn project_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn out_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// HEAD~1 holds `a.txt` and `b/c.txt`; HEAD modifies `a.txt`, adds
/// `b/d.txt` and deletes `b/c.txt`.
#[fixture]
pub fn two_commit_project(project_dir: TempDir) -> TempDir {
    run_git_command(project_dir.path(), &["init", "-q"])
        .assert()
        .success();

    write_file(FileSpec::new(
        project_dir.path().join("a.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        project_dir.path().join("b").join("c.txt"),
        "see".to_string(),
    ));
    git_commit_all(project_dir.path(), "Initial commit")
        .assert()
        .success();

    write_file(FileSpec::new(
        project_dir.path().join("a.txt"),
        "one, modified".to_string(),
    ));
    write_file(FileSpec::new(
        project_dir.path().join("b").join("d.txt"),
        "dee".to_string(),
    ));
    delete_path(project_dir.path().join("b").join("c.txt").as_path());
    git_commit_all(project_dir.path(), "Second commit")
        .assert()
        .success();

    project_dir
}

pub fn run_relpack_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("relpack").expect("Failed to find relpack binary");
    cmd.env_remove("RELPACK_GIT");
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs relpack against `project` with its output in `out`.
pub fn package_command(project: &Path, out: &Path, version: &str, args: &[&str]) -> Command {
    let mut cmd = run_relpack_command(project, &[]);
    cmd.arg("--dir")
        .arg(project)
        .arg("--outDir")
        .arg(out)
        .arg("--version")
        .arg(version);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd.args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=master"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit_all(dir: &Path, message: &str) -> Command {
    run_git_command(dir, &["add", "-A"]).assert().success();
    run_git_command(dir, &["commit", "-q", "-m", message])
}

pub fn head_commit_sha(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to run git rev-parse");

    String::from_utf8(output.stdout)
        .expect("git rev-parse printed invalid utf-8")
        .trim()
        .to_string()
}
