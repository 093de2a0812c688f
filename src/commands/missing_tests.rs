use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::commands::test_support::{parse_with_root, share, touch};

fn run(root: &str, args: &[&str]) -> Result<CommandOutput> {
    let mut full = vec!["missing"];
    full.extend_from_slice(args);
    let cli = parse_with_root(root, &full);
    let Commands::Missing(missing) = &cli.command else {
        panic!("Expected Missing command");
    };
    run_missing_impl(missing, &cli)
}

fn shipment_tree(temp: &TempDir) -> String {
    let root = share(temp);
    touch(Path::new(&root), "2025/June-2025/EXP-10/CIPL/doc1.pdf");
    touch(Path::new(&root), "2025/June-2025/EXP-10/BL/doc2.pdf");
    touch(Path::new(&root), "2025/June-2025/EXP-11/POD/pod.pdf");
    root
}

#[test]
fn missing_report_uses_external_field_names() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);

    let output = run(&root, &["exp10", "11", "abc", "--format", "json"]).unwrap();

    assert!(output.has_results);
    let json: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["results"][0]["code"], "EXP-10");
    assert_eq!(json["results"][0]["missing"], serde_json::json!(["POD"]));
    assert_eq!(json["results"][1]["code"], "EXP-11");
    assert_eq!(json["results"][1]["found"], serde_json::json!(["POD"]));
    assert_eq!(json["summary"]["missing_counts"]["CIPL"], 1);
    assert_eq!(json["summary"]["missing_counts"]["POD"], 1);
    assert_eq!(json["invalid"], serde_json::json!(["abc"]));
    assert_eq!(json["limit"], 50);
}

#[test]
fn codes_are_read_from_file() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);
    let list = temp.path().join("codes.txt");
    std::fs::write(&list, "EXP-10;\nEXP-11, EXP-10\n").unwrap();
    let list = list.to_string_lossy().into_owned();

    let output = run(&root, &["--file", list.as_str(), "--format", "json"]).unwrap();

    let json: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn comma_separated_argument_is_split() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);

    let output = run(&root, &["EXP-10,EXP-11", "--format", "json"]).unwrap();

    let json: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn limit_truncates_and_is_reported() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);

    let output = run(&root, &["EXP-10", "EXP-11", "--limit", "1", "--format", "json"]).unwrap();

    let json: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["limit"], 1);
}

#[test]
fn no_codes_is_rejected() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);

    let err = run(&root, &[]).unwrap_err();

    assert!(matches!(err, DocFinderError::InvalidArgument(_)));
}

#[test]
fn unreadable_code_file_is_file_access_error() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);
    let absent = temp.path().join("absent.txt").to_string_lossy().into_owned();

    let err = run(&root, &["--file", absent.as_str()]).unwrap_err();

    assert!(matches!(err, DocFinderError::FileAccess { .. }));
}

#[test]
fn codes_with_nothing_found_have_no_results() {
    let temp = TempDir::new().unwrap();
    let root = shipment_tree(&temp);

    let output = run(&root, &["EXP-77"]).unwrap();

    assert!(!output.has_results);
}
