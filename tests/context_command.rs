// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

fn sitesearch(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitesearch"));
    cmd.current_dir(cwd).env("HOME", cwd).env("NO_COLOR", "1");
    cmd
}

fn context_json(cwd: &Path, args: &[&str]) -> Value {
    let assert = sitesearch(cwd)
        .args(["--format", "json", "--compact", "--base"])
        .arg(cwd)
        .arg("context")
        .args(args)
        .assert()
        .success();
    serde_json::from_slice(&assert.get_output().stdout).expect("json output")
}

#[test]
fn limit_selects_matching_paragraphs_in_order() {
    let dir = TempDir::new().expect("tempdir");
    write_file(
        &dir.path().join("src/7.txt"),
        "alpha beta\n\ngamma keyword delta\n\nepsilon keyword",
    );

    let one = context_json(dir.path(), &["keyword", "7"]);
    assert_eq!(one["found"], true);
    assert_eq!(one["paragraphs"], serde_json::json!(["gamma keyword delta"]));

    let two = context_json(dir.path(), &["KEYWORD", "7", "--limit", "2"]);
    assert_eq!(
        two["paragraphs"],
        serde_json::json!(["gamma keyword delta", "epsilon keyword"])
    );
}

#[test]
fn missing_document_is_unavailable() {
    let dir = TempDir::new().expect("tempdir");

    let json = context_json(dir.path(), &["keyword", "99"]);
    assert_eq!(json["found"], false);
    assert!(json["paragraphs"].as_array().expect("array").is_empty());

    sitesearch(dir.path())
        .arg("--base")
        .arg(dir.path())
        .args(["ctx", "keyword", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document 99 is unavailable"));
}

#[test]
fn configured_limit_applies_without_flag() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("src/a.txt"), "x one\n\nx two\n\nx three");
    write_file(&dir.path().join(".sitesearchrc.toml"), "context_limit = 3\n");

    let json = context_json(dir.path(), &["x", "a"]);
    assert_eq!(json["paragraphs"].as_array().expect("array").len(), 3);
}
