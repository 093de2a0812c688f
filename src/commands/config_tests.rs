use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::DocFinderError;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["docfinder"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

fn write_config(temp: &TempDir, content: &str) -> String {
    let path = temp.path().join("docfinder.toml");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn validate_accepts_good_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "roots = [\"/data\"]\n");
    let cli = parse(&["--config", path.as_str(), "config", "validate"]);

    let output = run_config_validate_impl(&cli).unwrap();

    assert!(output.starts_with("Configuration is valid: "));
}

#[test]
fn validate_rejects_duplicate_categories() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "parent_order = [\"BL\", \"bl\"]\n");
    let cli = parse(&["--config", path.as_str(), "config", "validate"]);

    let err = run_config_validate_impl(&cli).unwrap_err();

    assert!(matches!(err, DocFinderError::Config(_)));
}

#[test]
fn validate_rejects_bad_toml() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "roots = [\n");
    let cli = parse(&["--config", path.as_str(), "config", "validate"]);

    let err = run_config_validate_impl(&cli).unwrap_err();

    assert!(matches!(err, DocFinderError::TomlParse(_)));
}

#[test]
fn validate_with_no_config_is_a_no_op() {
    let cli = parse(&["--no-config", "config", "validate"]);
    let output = run_config_validate_impl(&cli).unwrap();
    assert!(output.contains("--no-config"));
}

#[test]
fn show_json_includes_root_overrides() {
    let cli = parse(&["--no-config", "--root", "/data", "config", "show"]);

    let output = run_config_show_impl(OutputFormat::Json, &cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["roots"], serde_json::json!(["/data"]));
    assert_eq!(json["parent_order"], serde_json::json!(["CIPL", "BL", "POD"]));
    assert_eq!(json["search"]["max_page_size"], 200);
}

#[test]
fn format_config_text_lists_sections() {
    let config = Config {
        roots: vec![PathBuf::from("/data")],
        ..Config::default()
    };

    let text = format_config_text(&config);

    assert!(text.contains("\"/data\","));
    assert!(text.contains(r#"parent_order = ["CIPL", "BL", "POD"]"#));
    assert!(text.contains("[search]\n  default_page_size = 50"));
    assert!(text.contains("[report]\n  max_items_per_parent = 20"));
}

#[test]
fn format_config_text_flags_missing_roots() {
    let text = format_config_text(&Config::default());
    assert!(text.contains("# none configured"));
}
