//! Tests for the command-line interface: arguments, exit codes, messages.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("markdown2html"))
}

#[test]
fn test_no_arguments_prints_usage() {
    cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: markdown2html README.md README.html"));
}

#[test]
fn test_one_argument_prints_usage() {
    cmd()
        .arg("README.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.md");
    let output = dir.path().join("out.html");

    cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Missing {}", input.display())));

    assert!(!output.exists());
}

#[test]
fn test_converts_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("README.html");
    fs::write(&input, "# Title\n\n- item\n\n[[Hello]] ((Chicago))\n").unwrap();

    cmd().arg(&input).arg(&output).assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<ul><li>item</li></ul>"));
    assert!(html.contains("8b1a9953c4611296a827abf8c47804d7"));
    assert!(html.contains("hiago"));
}

#[test]
fn test_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.md");
    let output = dir.path().join("empty.html");
    fs::write(&input, "").unwrap();

    cmd().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "**new**").unwrap();
    fs::write(&output, "old content that is longer").unwrap();

    cmd().arg(&input).arg(&output).assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<b>new</b>"));
    assert!(!html.contains("old content"));
}

#[test]
fn test_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("no-such-dir").join("out.html");
    fs::write(&input, "text").unwrap();

    cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read or write files."));
}

#[test]
fn test_directory_as_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.html");

    cmd()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read or write files."));
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "## Sub").unwrap();

    cmd().arg(&input).arg(&output).arg("extra").assert().success();

    assert!(fs::read_to_string(&output).unwrap().contains("<h2>Sub</h2>"));
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT"));
}
