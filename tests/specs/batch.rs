//! Behavioral specs for `--input` batches.

use crate::prelude::*;

#[test]
fn input_evaluates_each_line_in_order() {
    let project = Project::empty();
    project.file("lines.txt", "row 1\nno digits\nrow 22\n");

    project
        .cmd()
        .args(["extract", "-e", "[0-9]+", "--input", "lines.txt"])
        .assert()
        .success()
        .stdout("1\nNULL\n22\n");
}

#[test]
fn input_json_is_an_array_of_results() {
    let project = Project::empty();
    project.file("lines.txt", "abc\nxyz");

    let output = project
        .cmd()
        .args(["contains", "-e", "b", "--input", "lines.txt", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["result"], serde_json::json!([true, false]));
}

#[test]
fn input_may_hold_raw_bytes() {
    let project = Project::empty();
    project.file("lines.bin", b"\xff\xfe\n\xfe\n".as_slice());

    project
        .cmd()
        .args(["replace", "--bytes", "-e", "\\xFE", "-r", "!", "--input", "lines.bin"])
        .assert()
        .success()
        .stdout("\\xff!\n!\n");
}

#[test]
fn empty_input_prints_nothing() {
    let project = Project::empty();
    project.file("empty.txt", "");

    project
        .cmd()
        .args(["match", "-e", "a", "--input", "empty.txt"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_input_file_fails() {
    let project = Project::empty();

    project
        .cmd()
        .args(["match", "-e", "a", "--input", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to read"));
}

#[test]
fn one_failing_line_fails_the_batch() {
    let project = Project::empty();
    project.file("lines.txt", "a\naaaaaaaa\n");

    project
        .cmd()
        .args(["replace", "-e", "a", "-r", "bb", "--max-output-bytes", "4", "--input", "lines.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[resource_exceeded]"));
}

#[test]
fn extract_all_prints_one_list_per_line() {
    let project = Project::empty();
    project.file("lines.txt", "aXbX\nnone\nY\n");

    project
        .cmd()
        .args(["extract-all", "-e", "[A-Z]", "--input", "lines.txt"])
        .assert()
        .success()
        .stdout("[\"X\",\"X\"]\n[]\n[\"Y\"]\n");
}
