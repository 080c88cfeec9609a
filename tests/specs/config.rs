//! Behavioral specs for `sqlre.toml`.

use crate::prelude::*;

#[test]
fn discovered_config_bounds_replace_output() {
    let project = Project::empty();
    project.file("sqlre.toml", "version = 1\n\n[replace]\nmax_output_bytes = 4\n");

    project
        .cmd()
        .args(["replace", "-e", "a", "-r", "bb", "aaa"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("exceeds the maximum of 4 bytes"));
}

#[test]
fn config_is_found_from_a_subdirectory() {
    let project = Project::empty();
    project.file("sqlre.toml", "[replace]\nmax_output_bytes = 4\n");
    project.file("nested/dir/.keep", "");

    sqlre_cmd()
        .current_dir(project.path().join("nested/dir"))
        .args(["replace", "-e", "a", "-r", "bb", "aaa"])
        .assert()
        .code(1);
}

#[test]
fn flag_overrides_config_budget() {
    let project = Project::empty();
    project.file("sqlre.toml", "[replace]\nmax_output_bytes = 4\n");

    project
        .cmd()
        .args(["replace", "-e", "a", "-r", "bb", "--max-output-bytes", "6", "aaa"])
        .assert()
        .success()
        .stdout("bbbbbb\n");
}

#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("custom.toml", "[replace]\nmax_output_bytes = 2\n");

    project
        .cmd()
        .args(["-C", "custom.toml", "replace", "-e", "a", "-r", "bb", "aa"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[resource_exceeded]"));
}

#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("custom.toml", "[replace]\nmax_output_bytes = 2\n");

    project
        .cmd()
        .env("SQLRE_CONFIG", project.path().join("custom.toml"))
        .args(["replace", "-e", "a", "-r", "bb", "aa"])
        .assert()
        .code(1);
}

#[test]
fn pattern_size_limit_rejects_large_programs() {
    let project = Project::empty();
    project.file("sqlre.toml", "[pattern]\nsize_limit = 100\n");

    project
        .cmd()
        .args(["contains", "-e", "\\w{100}", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error[invalid_pattern]"));
}

#[test]
fn unsupported_version_fails() {
    let project = Project::empty();
    project.file("sqlre.toml", "version = 9\n");

    project
        .cmd()
        .args(["contains", "-e", "a", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

#[test]
fn unknown_keys_fail() {
    let project = Project::empty();
    project.file("sqlre.toml", "[replace]\nlimit = 1\n");

    project
        .cmd()
        .args(["contains", "-e", "a", "abc"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
}
