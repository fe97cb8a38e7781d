//! CLI integration tests
//!
//! These tests run the `dictedit` binary against dictionary files in a
//! scratch directory and check the JSON it prints.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SOURCE: &str = r#"[
  {"key": "A", "value": "alpha", "order": 20, "enabled": 1},
  {"key": "B", "value": "beta", "order": 10, "enabled": 0},
  {"key": "C", "value": "gamma"}
]"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dictedit"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn keys(entries: &serde_json::Value) -> Vec<String> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_query_default_sort_and_envelope() {
    // GIVEN a dictionary file with mixed orders
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);

    // WHEN querying without parameters
    let json = stdout_json(&run(&["query", file.to_str().unwrap()]));

    // THEN entries come back ascending by order, absent order last
    assert_eq!(json["success"], true);
    assert_eq!(json["pagination"], false);
    assert_eq!(keys(&json["data"]), vec!["B", "A", "C"]);
}

#[test]
fn test_query_descending_with_enabled_filter() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);

    let json = stdout_json(&run(&[
        "query",
        file.to_str().unwrap(),
        "--sort",
        "-value",
        "--enabled",
        "1",
    ]));

    // B is disabled; C defaults to enabled
    assert_eq!(keys(&json["data"]), vec!["C", "A"]);
    assert_eq!(json["data"][1]["enabled"], true);
}

#[test]
fn test_query_unknown_sort_field_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);

    let output = run(&["query", file.to_str().unwrap(), "--sort", "colour"]);

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "ERR_INVALID_QUERY");
}

#[test]
fn test_edit_script_end_to_end() {
    // GIVEN one entry and a script that adds B, removes A, then resequences
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", r#"[{"key":"A","value":"1","order":5}]"#);
    let script = write_file(
        &dir,
        "script.json",
        r#"[
          {"op":"insert","candidate":{"key":"B","value":"2","order":10,"enabled":false}},
          {"op":"batch_remove","keys":["A"]},
          {"op":"resequence"}
        ]"#,
    );

    // WHEN running the script with confirmations accepted
    let json = stdout_json(&run(&[
        "edit",
        file.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
        "--yes",
    ]));

    // THEN only B remains, renumbered to 5 and still disabled
    assert_eq!(keys(&json), vec!["B"]);
    assert_eq!(json[0]["order"], 5.0);
    assert_eq!(json[0]["enabled"], false);

    // AND the source file is untouched
    let on_disk = fs::read_to_string(&file).unwrap();
    assert!(on_disk.contains("\"A\""));
}

#[test]
fn test_edit_without_yes_declines_removal() {
    // stdin is closed, so the prompt reads no answer
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);
    let script = write_file(&dir, "script.json", r#"[{"op":"remove","key":"A"}]"#);

    let output = run(&[
        "edit",
        file.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
    ]);

    let json = stdout_json(&output);
    assert_eq!(keys(&json), vec!["A", "B", "C"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Delete \"alpha\"?"));
}

#[test]
fn test_edit_validation_failure_reports_code() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);
    let script = write_file(
        &dir,
        "script.json",
        r#"[{"op":"insert","candidate":{"key":"A","value":"again"}}]"#,
    );

    let output = run(&[
        "edit",
        file.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
        "--yes",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_DUPLICATE_KEY"), "stderr: {}", stderr);
    assert!(stderr.contains("script step 1"));
}

#[test]
fn test_edit_read_only_rejects_script() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);
    let script = write_file(&dir, "script.json", r#"[{"op":"resequence"}]"#);

    let output = run(&[
        "edit",
        file.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
        "--read-only",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_READ_ONLY"));
}

#[test]
fn test_resequence_command_with_custom_step() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);

    let json = stdout_json(&run(&[
        "resequence",
        file.to_str().unwrap(),
        "--order-step",
        "10",
    ]));

    assert_eq!(keys(&json), vec!["B", "A", "C"]);
    let orders: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["order"].as_f64().unwrap())
        .collect();
    assert_eq!(orders, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_missing_file_fails() {
    let output = run(&["query", "/nonexistent/dict.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_unusable_order_step_rejected_by_cli() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);
    let script = write_file(&dir, "script.json", r#"[{"op":"resequence"}]"#);

    for step in ["inf", "-5", "0"] {
        let flag = format!("--order-step={}", step);

        let resequenced = run(&["resequence", file.to_str().unwrap(), &flag]);
        let edited = run(&[
            "edit",
            file.to_str().unwrap(),
            "--script",
            script.to_str().unwrap(),
            &flag,
        ]);

        for output in [resequenced, edited] {
            assert!(!output.status.success(), "step {} accepted", step);
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("Order step"), "stderr: {}", stderr);
        }
    }
}

#[test]
fn test_edit_failure_names_cycle() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "dict.json", SOURCE);
    let script = write_file(
        &dir,
        "script.json",
        r#"[{"op":"replace","original_key":"Z","candidate":{"key":"Z","value":"z"}}]"#,
    );

    let output = run(&[
        "edit",
        file.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
    assert!(stderr.contains("(cycle: "), "stderr: {}", stderr);
}
