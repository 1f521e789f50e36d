use super::*;

// =============================================================
// Stored-value normalization
// =============================================================

#[test]
fn empty_stored_value_is_no_token() {
    assert!(normalize(String::new()).is_none());
}

#[test]
fn non_empty_stored_value_passes_through() {
    assert_eq!(normalize("T1".to_owned()).as_deref(), Some("T1"));
}

#[test]
fn read_outside_the_browser_sees_no_token() {
    assert!(read().is_none());
}
