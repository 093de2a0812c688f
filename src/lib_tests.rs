use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_NO_RESULTS);
    assert_ne!(EXIT_SUCCESS, EXIT_ERROR);
    assert_ne!(EXIT_NO_RESULTS, EXIT_ERROR);
}

#[test]
fn exit_codes_match_documented_values() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_NO_RESULTS, 1);
    assert_eq!(EXIT_ERROR, 2);
}
