#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use rstest::fixture;
use std::path::PathBuf;

pub const COMMIT_DATE: &str = "1700000000";
pub const ROOT_OID: &str = "02efcf571870fcca";

#[fixture]
pub fn script_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Command with a fixed commit date so IDs are reproducible
pub fn run_gitlet_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_script(script: &str) -> Command {
    let mut cmd = run_gitlet_command(&["run"]);
    cmd.write_stdin(script.to_string());
    cmd
}

pub fn write_script(dir: &TempDir, lines: &[String]) -> PathBuf {
    let script = dir.child("session.gitlet");
    script
        .write_str(&(lines.join("\n") + "\n"))
        .expect("Failed to write script");

    script.path().to_path_buf()
}

pub fn random_file_name() -> String {
    format!("{}.txt", Word().fake::<String>())
}

pub fn random_content() -> String {
    Words(3..8).fake::<Vec<String>>().join(" ")
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run gitlet");
    String::from_utf8_lossy(&output.stdout).into_owned()
}
