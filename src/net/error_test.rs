use super::*;

// =============================================================
// ErrField normalization
// =============================================================

#[test]
fn bare_string_err_normalizes_to_one_message() {
    let err: ErrField = serde_json::from_str("\"wrong password\"").expect("err field");
    assert_eq!(err.into_messages(), ["wrong password"]);
}

#[test]
fn field_array_err_preserves_order() {
    let err: ErrField = serde_json::from_str(
        r#"[{"message":"email is required"},{"message":"password too short"},{"message":"name is required"}]"#,
    )
    .expect("err field");

    assert_eq!(
        err.into_messages(),
        ["email is required", "password too short", "name is required"]
    );
}

#[test]
fn empty_field_array_normalizes_to_no_messages() {
    let err: ErrField = serde_json::from_str("[]").expect("err field");
    assert!(err.into_messages().is_empty());
}

// =============================================================
// ApiError display strings
// =============================================================

#[test]
fn server_error_messages_pass_through() {
    let err = ApiError::Server(vec!["first".to_owned(), "second".to_owned()]);
    assert_eq!(err.messages(), ["first", "second"]);
}

#[test]
fn transport_error_yields_single_message() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.messages(), ["network error: connection refused"]);
}

#[test]
fn timeout_error_yields_single_message() {
    assert_eq!(ApiError::Timeout.messages().len(), 1);
}
