//! CLI tests: run the `primer` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

use primer_structures::cli::commands::{GraphDemo, StackVariant};
use primer_structures::cli::{exit_code, EXIT_INVALID_ARGUMENT, EXIT_LOOKUP_MISS};
use primer_structures::{HashTable, LinkedStack, PrimerError};

// ==================== CLI Helpers ====================

/// Locate the `primer` binary built alongside test binaries.
fn primer_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("primer");
    path
}

/// Run the `primer` CLI with the given arguments and return the output.
fn run_primer(args: &[&str]) -> Output {
    Command::new(primer_bin())
        .args(args)
        .output()
        .expect("Failed to run primer")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "primer failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ==================== Graph Tests ====================

#[test]
fn test_cli_graph_all_text() {
    let output = run_primer(&["graph", "--kind", "all"]);
    assert_success(&output);
    let out = stdout_str(&output);

    assert!(out.contains("Undirected graph:"));
    assert!(out.contains("D: [B, C, E]"));
    assert!(out.contains("Neighbors of D: [B, C, E]"));

    assert!(out.contains("Directed graph:"));
    assert!(out.contains("1: [2, 3]"));
    assert!(out.contains("3: [2]"));
    assert!(out.contains("4: []"));

    assert!(out.contains("Weighted graph:"));
    assert!(out.contains("A: [(B, 5), (C, 3)]"));
    assert!(out.contains("  (A, B, 5)"));
    assert!(out.contains("After removing edge (A, B) and vertex C:"));
    assert!(out.trim_end().ends_with("A: []\nB: [(D, 6)]\nD: [(B, 6)]"));
}

#[test]
fn test_cli_graph_directed_json() {
    let output = run_primer(&["--format", "json", "graph", "--kind", "directed"]);
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let reports = parsed.as_array().unwrap();
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_eq!(report["name"], "directed");
    assert_eq!(report["directed"], true);
    assert_eq!(report["vertices"], serde_json::json!([1, 2, 3, 4]));

    let edges: Vec<(i64, i64)> = report["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            // Unweighted edges carry no weight field at all.
            assert!(e.get("weight").is_none());
            (e["source"].as_i64().unwrap(), e["target"].as_i64().unwrap())
        })
        .collect();
    assert_eq!(edges, vec![(1, 2), (1, 3), (2, 4), (3, 2)]);
}

#[test]
fn test_cli_graph_weighted_json_keeps_weights() {
    let output = run_primer(&["--format", "json", "graph", "--kind", "weighted"]);
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let reports = parsed.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["edges"].as_array().unwrap().len(), 5);
    assert_eq!(reports[0]["edges"][0]["weight"], 5.0);

    let after = &reports[1];
    assert_eq!(after["name"], "weighted_after_removal");
    assert_eq!(after["vertices"], serde_json::json!(["A", "B", "D"]));
    assert_eq!(
        after["edges"],
        serde_json::json!([{ "source": "B", "target": "D", "weight": 6.0 }])
    );
}

#[test]
fn test_cli_graph_invalid_kind_exits_3() {
    let output = run_primer(&["graph", "--kind", "bogus"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_str(&output).contains("Invalid graph kind: bogus"));
}

// ==================== Collection Tests ====================

#[test]
fn test_cli_array() {
    let output = run_primer(&["array"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("'banana' found at index: 1"));
    assert!(out.contains("'grape' found at index: -1"));
    assert!(out.contains("Deleted element: banana"));
    assert!(out.contains("Popped element: date"));
    assert!(out.contains("Array: [apple, blueberry, cherry] (length 3)"));
}

#[test]
fn test_cli_hash_table_reports_missing_key() {
    let output = run_primer(&["--format", "json", "hash-table", "--buckets", "3"]);
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parsed["buckets"], 3);
    assert_eq!(parsed["age"], "26");
    assert_eq!(parsed["contains_name"], true);
    assert_eq!(parsed["contains_email"], false);
    assert_eq!(parsed["missing_key_error"], "Key \"address\" not found");
    assert!(parsed["entries"].get("city").is_none());
    assert_eq!(parsed["entries"].as_object().unwrap().len(), 4);
}

#[test]
fn test_cli_hash_table_zero_buckets_exits_3() {
    let output = run_primer(&["hash-table", "--buckets", "0"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_str(&output).contains("Error: Invalid bucket count: 0"));
    assert!(stdout_str(&output).is_empty());
}

#[test]
fn test_cli_linked_list() {
    let output = run_primer(&["linked-list"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Element at index 1: apple"));
    assert!(out.contains("Index of 'banana': 3"));
    assert!(out.contains("Index of 'mango': -1"));
    assert!(out.contains("Popped from end: banana"));
    assert!(out.contains("Popped from beginning: orange"));
    assert!(out.contains("Reversed: [grape, apple]"));
    assert!(out.contains("After extending: [grape, apple, cherry, date, elderberry]"));
    assert!(out.contains("(empty: true)"));
}

// ==================== Stack Tests ====================

#[test]
fn test_cli_stack_linked() {
    let output = run_primer(&["stack", "--variant", "linked"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Stack after pushing: TOP -> 30 -> 20 -> 10 -> None"));
    assert!(out.contains("Top element (peek): 30"));
    assert!(out.contains("Popped in order: 30, 20, 10"));
    assert!(out.contains("Is stack empty? true"));
}

#[test]
fn test_cli_stack_variants_agree() {
    let array = run_primer(&["stack", "--variant", "array"]);
    let linked = run_primer(&["stack", "--variant", "linked"]);
    assert_success(&array);
    assert_success(&linked);
    assert_eq!(stdout_str(&array), stdout_str(&linked));
}

#[test]
fn test_cli_stack_invalid_variant_exits_3() {
    let output = run_primer(&["stack", "--variant", "queue"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_str(&output).contains("Invalid stack variant: queue"));
}

// ==================== Exit Code Tests ====================

#[test]
fn test_exit_code_per_error_kind() {
    assert_eq!(exit_code(&PrimerError::InvalidBucketCount(0)), EXIT_INVALID_ARGUMENT);
    assert_eq!(
        exit_code(&PrimerError::InvalidPosition { index: 9, len: 2 }),
        EXIT_INVALID_ARGUMENT
    );
    assert_eq!(exit_code(&PrimerError::Empty("Stack")), EXIT_LOOKUP_MISS);
    assert_eq!(
        exit_code(&PrimerError::IndexOutOfBounds { index: 4, len: 4 }),
        EXIT_LOOKUP_MISS
    );
    assert_eq!(EXIT_INVALID_ARGUMENT, 3);
    assert_eq!(EXIT_LOOKUP_MISS, 4);
}

#[test]
fn test_exit_code_for_library_failures() {
    let table: HashTable<&str, u32> = HashTable::new();
    let miss = table.get(&"address").unwrap_err();
    assert_eq!(exit_code(&miss), 4);

    let mut stack: LinkedStack<u32> = LinkedStack::new();
    assert_eq!(exit_code(&stack.pop().unwrap_err()), 4);

    let err = HashTable::<&str, u32>::with_buckets(0).unwrap_err();
    assert_eq!(exit_code(&err), 3);
}

#[test]
fn test_demo_name_parsing() {
    assert_eq!(GraphDemo::from_name("Weighted"), Some(GraphDemo::Weighted));
    assert_eq!(GraphDemo::from_name("all"), Some(GraphDemo::All));
    assert_eq!(GraphDemo::from_name("bogus"), None);
    assert_eq!(StackVariant::from_name("linked_list"), Some(StackVariant::Linked));
    assert_eq!(StackVariant::from_name("ARRAY"), Some(StackVariant::Array));
    assert_eq!(StackVariant::from_name("queue"), None);
}
