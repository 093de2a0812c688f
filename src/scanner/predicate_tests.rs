use super::*;
use crate::scanner::filter::Month;

const DOC: &str = "/data/2025/6. June-2025/EXP-10/CIPL/EXP-10 invoice.pdf";

#[test]
fn file_query_matches_name_only() {
    let filter = SearchFilter::new("invoice");
    assert!(file_matches("EXP-10 invoice.pdf", DOC, &filter));

    let filter = SearchFilter::new("CIPL");
    assert!(!file_matches("EXP-10 invoice.pdf", DOC, &filter));
}

#[test]
fn empty_query_matches_everything() {
    let filter = SearchFilter::new("");
    assert!(file_matches("anything.pdf", DOC, &filter));
    assert!(folder_matches("CIPL", "/data/CIPL", &filter));
}

#[test]
fn query_is_case_insensitive() {
    let filter = SearchFilter::new("exp-10");
    assert!(file_matches("EXP-10 invoice.pdf", DOC, &filter));
}

#[test]
fn company_matches_anywhere_in_path() {
    let path = "/data/Acme Corp/2025/bl.pdf";
    assert!(file_matches("bl.pdf", path, &SearchFilter::new("").with_company(Some("acme"))));
    assert!(!file_matches("bl.pdf", path, &SearchFilter::new("").with_company(Some("globex"))));
}

#[test]
fn year_matches_anywhere_in_path_without_month() {
    let filter = SearchFilter::new("").with_year(Some("2025"));
    assert!(file_matches("x.pdf", DOC, &filter));

    let filter = SearchFilter::new("").with_year(Some("2024"));
    assert!(!file_matches("x.pdf", DOC, &filter));
}

#[test]
fn year_is_not_enforced_when_month_is_set() {
    let filter = SearchFilter::new("")
        .with_year(Some("2019"))
        .with_month(Some("June"));
    assert!(file_matches("EXP-10 invoice.pdf", DOC, &filter));
}

#[test]
fn month_is_a_substring_test_on_directory_segments() {
    let june = SearchFilter::new("").with_month(Some("june"));
    let march = SearchFilter::new("").with_month(Some("march"));

    assert!(file_matches("x.pdf", DOC, &june));
    assert!(!file_matches("x.pdf", DOC, &march));
}

#[test]
fn numeric_month_never_matches_as_month() {
    let filter = SearchFilter::new("").with_month(Some("6"));
    assert_eq!(filter.month, None);
    // With no month filter the file passes on the other criteria only.
    assert!(file_matches("x.pdf", DOC, &filter));
}

#[test]
fn file_month_test_excludes_the_file_name() {
    let filter = SearchFilter {
        month: Some(Month::June),
        ..SearchFilter::default()
    };
    assert!(!file_matches("june report.pdf", "/data/2025/reports/june report.pdf", &filter));
}

#[test]
fn folder_month_test_includes_the_folder_itself() {
    let filter = SearchFilter::new("").with_month(Some("June"));
    assert!(folder_matches("June-2025", "/data/2025/June-2025", &filter));
    assert!(!folder_matches("May-2025", "/data/2025/May-2025", &filter));
}

#[test]
fn folder_query_matches_folder_name() {
    let filter = SearchFilter::new("EXP-10");
    assert!(folder_matches("EXP-10", "/data/2025/June-2025/EXP-10", &filter));
    assert!(!folder_matches("CIPL", "/data/2025/June-2025/EXP-10/CIPL", &filter));
}

#[test]
fn subtree_file_match_accepts_code_in_parent_folder() {
    let filter = SearchFilter::new("EXP-10");
    assert!(!file_matches("doc1.pdf", "/data/EXP-10/CIPL/doc1.pdf", &filter));
    assert!(file_matches_in_subtree("doc1.pdf", "/data/EXP-10/CIPL/doc1.pdf", &filter));
    assert!(!file_matches_in_subtree("doc1.pdf", "/data/EXP-11/CIPL/doc1.pdf", &filter));
}

#[test]
fn segments_split_on_both_separator_styles() {
    assert_eq!(
        path_segments(r"S:\Export Logistics/2025\June"),
        vec!["S:", "Export Logistics", "2025", "June"]
    );
    assert_eq!(directory_segments("/a/b/c.pdf"), vec!["a", "b"]);
}
