// ABOUTME: Integration tests for the htmlelements CLI binary.
// ABOUTME: Tests file and stdin input, the three output modes, and query errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>CLI Page</title></head>
<body>
<div id="content">
<p class="para" lang="en">Paragraph 1</p>
<p class="para" lang="fr">Paragraph 2</p>
</div>
</body>
</html>"#;

fn htmlelements_cmd() -> Command {
    Command::cargo_bin("htmlelements").unwrap()
}

fn write_page(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, PAGE).unwrap();
    path
}

#[test]
fn summaries_for_class_query() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir);

    let output = htmlelements_cmd()
        .arg(".para")
        .arg("--html")
        .arg(&path)
        .arg("--compact")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = value.as_array().expect("json array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["tag"], "p");
    assert_eq!(items[0]["text"], "Paragraph 1");
    assert_eq!(items[1]["attributes"][1]["value"], "fr");
}

#[test]
fn attribute_values_for_tag_query() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir);

    htmlelements_cmd()
        .args(["p", "--attr", "lang", "--compact", "--html"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["en","fr"]"#));
}

#[test]
fn inner_text_for_id_query_from_stdin() {
    htmlelements_cmd()
        .args(["#content", "--text", "--drop-whitespace"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout("Paragraph 1Paragraph 2\n");
}

#[test]
fn no_matches_prints_empty_array() {
    htmlelements_cmd()
        .args(["#missing", "--compact", "--fragment"])
        .write_stdin("<p>nothing here</p>")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn invalid_query_fails() {
    htmlelements_cmd()
        .arg("div.para")
        .write_stdin(PAGE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid query"));
}

#[test]
fn missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    htmlelements_cmd()
        .arg("p")
        .arg("--html")
        .arg(temp_dir.path().join("nope.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
