use crate::common::{Workspace, bin};
use std::path::Path;

fn json_output(files: &[&Path]) -> serde_json::Value {
    let output = bin().args(["--format", "json"]).args(files).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn json_report_for_one_file() {
    let ws = Workspace::new();
    let path = ws.file("pal.txt", "level up\nnoon at NOON\n");

    let value = json_output(&[path.as_path()]);
    let file = &value["files"][0];
    assert_eq!(file["lines"], 2);
    assert_eq!(file["words"], 5);
    assert_eq!(file["palindromes"], serde_json::json!(["level", "noon"]));
    assert_eq!(file["word_frequency"]["noon"], 2);
    assert_eq!(file["shortest_line"], "level up");
    assert!(value["comparison"].is_null());
}

#[test]
fn json_report_for_empty_file_uses_null() {
    let ws = Workspace::new();
    let path = ws.file("empty.txt", "");

    let value = json_output(&[path.as_path()]);
    let file = &value["files"][0];
    assert_eq!(file["lines"], 0);
    assert!(file["average_line_length"].is_null());
    assert!(file["longest_line"].is_null());
    assert!(file["first_long_word"]["word"].is_null());
}

#[test]
fn json_comparison_section() {
    let ws = Workspace::new();
    let a = ws.file("a.txt", "x y z\n");
    let b = ws.file("b.txt", "Z Y w\n");

    let value = json_output(&[a.as_path(), b.as_path()]);
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
    assert_eq!(value["comparison"]["common_words"], serde_json::json!(["y", "z"]));
}
