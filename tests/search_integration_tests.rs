//! Integration tests for the `search` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;
use serde_json::Value;

fn search_json(fixture: &TestFixture, args: &[&str]) -> Value {
    let output = docfinder!()
        .args(["--no-config", "--root", &fixture.share_arg(), "search"])
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn search_finds_matching_file() {
    let fixture = TestFixture::with_shipments();

    docfinder!()
        .args(["--no-config", "--color", "never", "--root", &fixture.share_arg()])
        .args(["search", "doc1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doc1.pdf"))
        .stdout(predicate::str::contains("Found 1 matches"));
}

#[test]
fn search_without_matches_exits_one() {
    let fixture = TestFixture::with_shipments();

    docfinder!()
        .args(["--no-config", "--root", &fixture.share_arg()])
        .args(["search", "nothing-like-this"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 0 matches"));
}

#[test]
fn search_json_lists_folders_before_files() {
    let fixture = TestFixture::with_shipments();

    let json = search_json(&fixture, &["exp-1"]);

    assert_eq!(json["count"], 3);
    assert_eq!(json["items"][0]["kind"], "folder");
    assert_eq!(json["items"][0]["file_name"], "EXP-10");
    assert_eq!(json["items"][1]["file_name"], "EXP-11");
    assert_eq!(json["items"][2]["kind"], "file");
    assert_eq!(json["items"][2]["file_name"], "pod-exp-11.pdf");
    assert_eq!(json["items"][2]["parent_folder"], "POD");
}

#[test]
fn search_pages_are_contiguous() {
    let fixture = TestFixture::new();
    for i in 0..5 {
        fixture.create_doc(&format!("2025/invoice-{i}.pdf"));
    }

    let first = search_json(&fixture, &["invoice", "--page-size", "2"]);
    let last = search_json(&fixture, &["invoice", "--page-size", "2", "--page", "3"]);
    let beyond = search_json(&fixture, &["invoice", "--page-size", "2", "--page", "4"]);

    assert_eq!(first["total_pages"], 3);
    assert_eq!(first["items"][0]["file_name"], "invoice-0.pdf");
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert_eq!(last["items"][0]["file_name"], "invoice-4.pdf");
    assert_eq!(beyond["items"].as_array().unwrap().len(), 0);
}

#[test]
fn search_month_scope_uses_month_folders() {
    let fixture = TestFixture::new();
    fixture.create_doc("2025/6. June-2025/a-bl.pdf");
    fixture.create_doc("2025/7. July-2025/b-bl.pdf");

    let json = search_json(&fixture, &["bl", "--year", "2025", "--month", "june"]);

    assert_eq!(json["count"], 1);
    assert_eq!(json["items"][0]["file_name"], "a-bl.pdf");
}

#[test]
fn search_company_filter_matches_path() {
    let fixture = TestFixture::new();
    fixture.create_doc("2025/Acme Corp/EXP-1/invoice.pdf");
    fixture.create_doc("2025/Globex/EXP-2/invoice.pdf");

    let json = search_json(&fixture, &["invoice", "--company", "acme"]);

    assert_eq!(json["count"], 1);
    assert!(json["items"][0]["full_path"].as_str().unwrap().contains("Acme Corp"));
}

#[test]
fn search_rejects_oversized_page() {
    let fixture = TestFixture::new();

    docfinder!()
        .args(["--no-config", "--root", &fixture.share_arg()])
        .args(["search", "x", "--page-size", "201"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("page_size must be between 1 and 200"));
}

#[test]
fn search_without_roots_is_an_error() {
    docfinder!()
        .args(["--no-config", "search", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no roots configured"));
}

#[test]
fn search_uses_roots_from_local_config() {
    let fixture = TestFixture::with_shipments();
    fixture.create_share_config();

    docfinder!()
        .current_dir(fixture.path())
        .args(["search", "doc2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doc2.pdf"));
}
