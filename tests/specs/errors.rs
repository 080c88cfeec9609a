//! Behavioral specs for error reporting and exit codes.

use crate::prelude::*;

#[test]
fn invalid_pattern_exits_one() {
    sqlre_cmd()
        .args(["contains", "-e", "(", "abc"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("error[invalid_pattern]"));
}

#[test]
fn bytes_pattern_may_not_use_unicode_classes() {
    sqlre_cmd()
        .args(["contains", "--bytes", "-e", "\\p{Cyrillic}", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_pattern]"));
}

#[test]
fn too_many_groups_for_extract() {
    sqlre_cmd()
        .args(["extract", "-e", "(a)(b)", "ab"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_capture_group_count]"));
}

#[test]
fn non_positive_position() {
    sqlre_cmd()
        .args(["extract", "-e", "a", "--position", "0", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_argument]: position must be positive"));
}

#[test]
fn non_positive_occurrence() {
    sqlre_cmd()
        .args(["extract", "-e", "a", "--occurrence", "-3", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("occurrence must be positive"));
}

#[test]
fn backreference_past_last_group() {
    sqlre_cmd()
        .args(["replace", "-e", "(.*)b([^d]*)", "-r", "\\4@\\3", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_backreference]"))
        .stderr(predicates::str::contains("group 4"));
}

#[test]
fn invalid_escape_in_template() {
    sqlre_cmd()
        .args(["replace", "-e", "", "-r", "\\x", ""])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_backreference]"));
}

#[test]
fn output_budget_exceeded() {
    sqlre_cmd()
        .args(["replace", "-e", "a", "-r", "BB", "--max-output-bytes", "5", "aaa"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("error[resource_exceeded]"));
}

#[test]
fn missing_pattern_is_a_usage_error() {
    sqlre_cmd().args(["contains", "abc"]).assert().code(2);
}

#[test]
fn subject_and_input_together_is_a_usage_error() {
    sqlre_cmd()
        .args(["contains", "-e", "a", "--input", "x.txt", "abc"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("cannot be used with"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    sqlre_cmd()
        .args(["-v", "contains", "-e", "a", "abc"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicates::str::contains("evaluating REGEXP_CONTAINS"));
}

#[test]
fn quiet_by_default() {
    sqlre_cmd()
        .args(["contains", "-e", "a", "abc"])
        .assert()
        .success()
        .stderr(predicates::str::contains("evaluating").not());
}
