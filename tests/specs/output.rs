//! Behavioral specs for JSON output.

use crate::prelude::*;

fn json_of(args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.extend(["-o", "json"]);
    serde_json::from_str(&stdout_of(&full)).expect("stdout should be JSON")
}

#[test]
fn json_names_the_function() {
    let doc = json_of(&["contains", "-e", "a", "abc"]);
    assert_eq!(doc, serde_json::json!({ "function": "REGEXP_CONTAINS", "result": true }));
}

#[test]
fn json_null_for_missing_extract() {
    let doc = json_of(&["extract", "-e", "(abc)?", ""]);
    assert_eq!(doc["function"], "REGEXP_EXTRACT");
    assert!(doc["result"].is_null());
}

#[test]
fn json_array_for_extract_all() {
    let doc = json_of(&["extract-all", "-e", "ц*", "щццф"]);
    assert_eq!(doc["result"], serde_json::json!(["", "цц", ""]));
}

#[test]
fn json_empty_array_when_nothing_matches() {
    let doc = json_of(&["extract-all", "-e", "x", "abc"]);
    assert_eq!(doc["result"], serde_json::json!([]));
}

#[test]
fn json_bytes_are_escaped() {
    let doc = json_of(&["replace", "--bytes", "-e", "ц", "-r", "", "щцф"]);
    assert_eq!(doc["function"], "REGEXP_REPLACE");
    assert_eq!(doc["result"], "\\xd1\\x89\\xd1\\x84");
}
