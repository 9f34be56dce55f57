//! Integration tests for queryless CLI

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE_QUERY: &str = r#"{
  "selections": [
    {"logical_column": {"id": "PAID", "data_type": "boolean",
      "name": {"strings": {"en_US": "Paid"}}}},
    {"logical_column": {"id": "ORDER_DATE", "data_type": "date",
      "name": {"strings": {"en_US": "Order Date", "de": "Bestelldatum"}}}},
    {"logical_column": {"id": "PRICE", "data_type": "numeric",
      "name": {"strings": {"en_US": "Price"}}}},
    {"logical_column": {"id": "CUSTOMER", "data_type": "string",
      "name": {"strings": {"en_US": "Customer", "de": "Kunde"}}}}
  ]
}"#;

fn run_queryless(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "queryless", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_queryless(&["--help"]);

    assert!(success);
    assert!(stdout.contains("queryless"));
    assert!(stdout.contains("preview"));
}

#[test]
fn test_preview_help() {
    let (stdout, _, success) = run_queryless(&["preview", "--help"]);

    assert!(success);
    assert!(stdout.contains("--locale"));
    assert!(stdout.contains("--messages"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--reference-date"));
}

#[test]
fn test_table_output() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let (stdout, _, success) = run_queryless(&["preview", &query]);

    assert!(success);
    assert!(stdout.contains("PAID (Boolean)"));
    assert!(stdout.contains("ORDER_DATE (Date)"));
    assert!(stdout.contains("PRICE (Float)"));
    assert!(stdout.contains("CUSTOMER (String)"));
    assert!(stdout.contains("2023-12-31"));
    assert!(stdout.contains("2024-01-01"));
    assert!(stdout.contains("123.45"));
    assert!(stdout.contains("124.45"));
    assert!(stdout.contains("Sample Value 3-1"));
    assert!(stdout.contains("Sample Value 3-2"));
    assert!(stdout.contains("formatting:label=Price"));
    assert!(stdout.contains("numeric:precision=2147483647"));
}

#[test]
fn test_text_output_has_no_styles() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let (stdout, _, success) = run_queryless(&["preview", &query, "--output", "text"]);

    assert!(success);
    assert!(stdout.contains("PAID (Boolean)"));
    assert!(stdout.contains("  PRICE: formatting:label=Price"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let (stdout, _, success) = run_queryless(&["preview", &query, "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let columns = parsed["columns"].as_array().unwrap();
    let rows = parsed["rows"].as_array().unwrap();

    assert_eq!(columns.len(), 4);
    assert_eq!(rows.len(), 2);
    assert_eq!(columns[0]["name"], "PAID");
    assert_eq!(columns[2]["class"], "Float");
    assert_eq!(rows[0][0], 0);
    assert_eq!(rows[1][0], 1);
    assert_eq!(rows[0][1], "2023-12-31");
    assert_eq!(rows[1][2], 124.45);

    let numeric = columns[2]["attributes"]
        .as_object()
        .unwrap()
        .iter()
        .find(|(ns, _)| ns.ends_with("numeric"))
        .map(|(_, attrs)| attrs.clone())
        .unwrap();
    assert_eq!(numeric["scale"], 0);
    assert_eq!(numeric["signed"], false);
    assert_eq!(numeric["currency"], false);
}

#[test]
fn test_locale_and_messages() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let messages = write_fixture(
        &dir,
        "messages_de.properties",
        "# German placeholders\n\
         QuerylessTableModel.DEFAULT_STRING_VALUE_ROW_0=Beispiel f\\u00fcr {0}-A\n\
         QuerylessTableModel.DEFAULT_STRING_VALUE_ROW_1=Kunde''s Beispiel {0}-B\n",
    );
    let (stdout, _, success) = run_queryless(&[
        "preview",
        &query,
        "--locale",
        "de_DE",
        "--messages",
        &messages,
    ]);

    assert!(success);
    assert!(stdout.contains("formatting:label=Kunde"));
    assert!(stdout.contains("formatting:label=Bestelldatum"));
    // No German label for PRICE: falls back to en_US
    assert!(stdout.contains("formatting:label=Price"));
    assert!(stdout.contains("Beispiel f\u{fc}r 3-A"));
    assert!(stdout.contains("Kunde's Beispiel 3-B"));
}

#[test]
fn test_reference_date() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let (stdout, _, success) =
        run_queryless(&["preview", &query, "--reference-date", "2024-03-20"]);

    assert!(success);
    assert!(stdout.contains("2024-02-29"));
    assert!(stdout.contains("2024-03-01"));
}

#[test]
fn test_empty_query() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "empty.json", r#"{"selections": []}"#);
    let (stdout, _, success) = run_queryless(&["preview", &query]);

    assert!(success);
    assert!(stdout.contains("2 placeholder rows, no columns"));
}

#[test]
fn test_missing_query_file() {
    let (_, stderr, success) = run_queryless(&["preview", "/nonexistent/query.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to read query"));
}

#[test]
fn test_invalid_query_json() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "broken.json", "{ not json");
    let (_, stderr, success) = run_queryless(&["preview", &query]);

    assert!(!success);
    assert!(stderr.contains("invalid query descriptor"));
}

#[test]
fn test_malformed_message_escape() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let messages = write_fixture(&dir, "broken.properties", "row=bad \\u00zz\n");
    let (_, stderr, success) = run_queryless(&["preview", &query, "--messages", &messages]);

    assert!(!success);
    assert!(stderr.contains("invalid message bundle"));
    assert!(stderr.contains("line 1"));
}

#[test]
fn test_invalid_reference_date() {
    let dir = TempDir::new().unwrap();
    let query = write_fixture(&dir, "query.json", SAMPLE_QUERY);
    let (_, stderr, success) =
        run_queryless(&["preview", &query, "--reference-date", "15/01/2024"]);

    assert!(!success);
    assert!(stderr.contains("invalid reference date"));
}
