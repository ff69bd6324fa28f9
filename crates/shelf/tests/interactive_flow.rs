#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shelf_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SHELF_DATA_FILE")
        .env_remove("SHELF_TITLE_CASE")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_ids(path: &Path) -> Vec<u64> {
    let raw = fs::read_to_string(path).unwrap();
    let books: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    books.iter().map(|b| b["id"].as_u64().unwrap()).collect()
}

#[test]
fn test_creates_default_data_file() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add a book"));

    let data = temp.path().join("books_data.json");
    assert_eq!(fs::read_to_string(data).unwrap().trim(), "[]");
}

#[test]
fn test_ids_survive_removal_and_restart() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("catalog.json");

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin(
            "1\n1984\ngeorge orwell\n1949\n1\n\
             1\nanimal farm\ngeorge orwell\n1945\n1\n\
             2\n1\n2\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Book \"Animal Farm\" added with ID 2"))
        .stdout(predicate::str::contains("Book with ID=1 removed: 1984"));

    assert_eq!(stored_ids(&data), vec![2]);

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin("1\ndune\nfrank herbert\n1965\n1\n4\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book \"Dune\" added with ID 3"))
        .stdout(predicate::str::contains("2   Animal Farm"))
        .stdout(predicate::str::contains("3   Dune"));

    assert_eq!(stored_ids(&data), vec![2, 3]);
}

#[test]
fn test_invalid_answers_are_retried() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("catalog.json");

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin("seven\n9\n1\nemma\njane austen\nlast year\n-5\n1815\n3\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error\nEnter a number from 1 to 6"))
        .stdout(predicate::str::contains("Error\nEnter a year from 1 to"))
        .stdout(predicate::str::contains("Error\nEnter a number from 1 to 2"))
        .stdout(predicate::str::contains("Book \"Emma\" added with ID 1"));
}

#[test]
fn test_unknown_id_keeps_catalog() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("catalog.json");
    fs::write(
        &data,
        r#"[{"id": 4, "title": "Emma", "author": "Jane Austen", "year": 1815, "status": "Available"}]"#,
    )
    .unwrap();

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin("2\n99999\n1\n5\n99999\n2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book with ID 99999 not found").count(2));

    assert_eq!(stored_ids(&data), vec![4]);
}

#[test]
fn test_search_by_author() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("catalog.json");
    fs::write(
        &data,
        r#"[
  {"id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "year": 1925, "status": "Available"},
  {"id": 2, "title": "Tender Is the Night", "author": "F. Scott Fitzgerald", "year": 1934, "status": "Issued"},
  {"id": 3, "title": "Moby Dick", "author": "Herman Melville", "year": 1925, "status": "Available"}
]"#,
    )
    .unwrap();

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin("3\n2\nF. SCOTT FITZGERALD\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Books found: 2"))
        .stdout(predicate::str::contains(
            "ID: 2, Title: Tender Is the Night, Author: F. Scott Fitzgerald, Year: 1934, Status: Issued",
        ))
        .stdout(predicate::str::contains("Moby Dick").not());
}

#[test]
fn test_malformed_file_warns_and_is_kept_until_change() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("catalog.json");
    fs::write(&data, "{ not json").unwrap();

    shelf_cmd(temp.path())
        .arg(&data)
        .write_stdin("4\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: could not read"))
        .stdout(predicate::str::contains("No books added yet"))
        .stderr(predicate::str::contains("catalog file is malformed"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "{ not json");
}

#[test]
fn test_config_file_sets_data_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("shelf.toml"),
        "data_file = \"from_config.json\"\ntitle_case = false\n",
    )
    .unwrap();

    shelf_cmd(temp.path())
        .write_stdin("1\nthe road\ncormac mccarthy\n2006\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book \"the road\" added with ID 1"));

    assert_eq!(stored_ids(&temp.path().join("from_config.json")), vec![1]);
    assert!(!temp.path().join("books_data.json").exists());
}

#[test]
fn test_non_utf8_input_is_retried() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .write_stdin(&b"\xff\xfe\n6\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error\nEnter a number from 1 to 6"));
}

#[test]
fn test_closed_stdin_ends_cleanly() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .write_stdin("1\nhalf a book\n")
        .assert()
        .success();
}
