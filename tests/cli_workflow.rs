#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn promptpad(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("promptpad").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn create_list_and_show() {
    let dir = TempDir::new().unwrap();

    promptpad(&dir)
        .args(["create", "Hi", "<p>there</p>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt created (1): Hi"));

    promptpad(&dir)
        .args(["create", "Second", "<p>more <b>text</b></p>"])
        .assert()
        .success();

    // Newest first
    promptpad(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Second"))
        .stdout(predicate::str::contains("2. Hi"))
        .stdout(predicate::str::contains("more text"));

    promptpad(&dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi"))
        .stdout(predicate::str::contains("there"));

    let stored = fs::read_to_string(dir.path().join("prompts-storage.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "Second");
    assert_eq!(entries[1]["content"], "<p>there</p>");
}

#[test]
fn empty_fields_are_rejected() {
    let dir = TempDir::new().unwrap();

    promptpad(&dir)
        .args(["create", "Title", "<p></p>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Título e conteúdo não podem estar vazios.",
        ));

    assert!(!dir.path().join("prompts-storage.json").exists());
}

#[test]
fn search_filters_by_title() {
    let dir = TempDir::new().unwrap();
    promptpad(&dir).args(["create", "Alpha", "a"]).assert().success();
    promptpad(&dir).args(["create", "Beta", "b"]).assert().success();

    promptpad(&dir)
        .args(["list", "--search", "Al"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Beta").not());

    promptpad(&dir)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum prompt encontrado."));
}

#[test]
fn edit_keeps_position() {
    let dir = TempDir::new().unwrap();
    promptpad(&dir).args(["create", "Old", "one"]).assert().success();
    promptpad(&dir).args(["create", "Newer", "two"]).assert().success();

    promptpad(&dir)
        .args(["edit", "2", "--title", "Renamed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt updated (2): Renamed"));

    promptpad(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Renamed"));
}

#[test]
fn remove_and_unknown_index() {
    let dir = TempDir::new().unwrap();
    promptpad(&dir).args(["create", "Doomed", "x"]).assert().success();

    promptpad(&dir)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt removed (1): Doomed"));

    promptpad(&dir)
        .args(["rm", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt not found: 1"));
}

#[test]
fn corrupt_store_loads_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prompts-storage.json"), "{broken").unwrap();

    promptpad(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum prompt encontrado."));
}

#[test]
fn html_output() {
    let dir = TempDir::new().unwrap();
    promptpad(&dir)
        .args(["create", "<b>bold</b> title", "body"])
        .assert()
        .success();

    promptpad(&dir)
        .args(["list", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-action=\"select\""))
        .stdout(predicate::str::contains("&lt;b&gt;bold&lt;"));
}

#[test]
fn config_storage_key() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"storage_key": "work"}"#,
    )
    .unwrap();

    promptpad(&dir).args(["create", "Hi", "there"]).assert().success();

    assert!(dir.path().join("work.json").exists());
    promptpad(&dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("work"));
}
