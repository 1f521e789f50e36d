use super::*;

// =============================================================
// Token header
// =============================================================

#[test]
fn token_header_prefixes_app_namespace() {
    assert_eq!(token_header("T1"), "ArabianOdyssey__T1");
}

// =============================================================
// Signin envelope
// =============================================================

#[test]
fn signin_success_returns_token_verbatim() {
    let body = r#"{"message":"success","token":"T1"}"#;
    assert_eq!(parse_signin_body(body).expect("token"), "T1");
}

#[test]
fn signin_bare_string_err_is_one_server_message() {
    let body = r#"{"err":"user already exist"}"#;
    let err = parse_signin_body(body).expect_err("server error");
    assert_eq!(err, ApiError::Server(vec!["user already exist".to_owned()]));
    assert_eq!(err.messages(), ["user already exist"]);
}

#[test]
fn signin_field_array_err_preserves_order() {
    let body = r#"{"err":[{"message":"email is required"},{"message":"password too short"}]}"#;
    let err = parse_signin_body(body).expect_err("server error");
    assert_eq!(err.messages(), ["email is required", "password too short"]);
}

#[test]
fn signin_err_wins_over_success_message() {
    // A response carrying both fields is treated as an error.
    let body = r#"{"message":"success","token":"T1","err":"expired"}"#;
    assert!(parse_signin_body(body).is_err());
}

#[test]
fn signin_success_without_token_is_malformed() {
    let body = r#"{"message":"success"}"#;
    assert!(matches!(parse_signin_body(body), Err(ApiError::Malformed(_))));
}

#[test]
fn signin_non_json_body_is_malformed() {
    assert!(matches!(
        parse_signin_body("<html>502 Bad Gateway</html>"),
        Err(ApiError::Malformed(_))
    ));
}

#[test]
fn signin_unrecognized_message_is_malformed() {
    let body = r#"{"message":"pending"}"#;
    assert!(matches!(parse_signin_body(body), Err(ApiError::Malformed(_))));
}

// =============================================================
// Profile envelope
// =============================================================

#[test]
fn profile_success_returns_user_from_payload() {
    let body = r#"{
        "message": "success",
        "user": {
            "id": "u-1",
            "name": "Layla",
            "email": "layla@example.com",
            "phone": "+971500000000",
            "image": null
        }
    }"#;

    let user = parse_profile_body(body).expect("user");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.name, "Layla");
    assert_eq!(user.email, "layla@example.com");
    assert_eq!(user.phone.as_deref(), Some("+971500000000"));
    assert!(user.image.is_none());
}

#[test]
fn profile_success_without_user_is_malformed() {
    let body = r#"{"message":"success"}"#;
    assert!(matches!(parse_profile_body(body), Err(ApiError::Malformed(_))));
}

#[test]
fn profile_err_surfaces_as_server_error() {
    let body = r#"{"err":"invalid token"}"#;
    let err = parse_profile_body(body).expect_err("server error");
    assert_eq!(err.messages(), ["invalid token"]);
}

// =============================================================
// Ack envelope (signup)
// =============================================================

#[test]
fn ack_success_is_ok() {
    assert!(parse_ack_body(r#"{"message":"success"}"#).is_ok());
}

#[test]
fn ack_err_surfaces_messages() {
    let err = parse_ack_body(r#"{"err":"user already exist"}"#).expect_err("server error");
    assert_eq!(err.messages(), ["user already exist"]);
}

// =============================================================
// Category envelopes
// =============================================================

#[test]
fn categories_success_returns_list() {
    let body = r#"{
        "message": "success",
        "categories": [
            {"id": "c-1", "name": "deserts", "image": null},
            {"id": "c-2", "name": "museums", "image": "https://img.example/m.jpg"}
        ]
    }"#;

    let categories = parse_categories_body(body).expect("categories");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "deserts");
    assert_eq!(categories[1].image.as_deref(), Some("https://img.example/m.jpg"));
}

#[test]
fn categories_success_with_missing_list_is_empty() {
    let categories = parse_categories_body(r#"{"message":"success"}"#).expect("categories");
    assert!(categories.is_empty());
}

#[test]
fn attractions_success_returns_list_in_order() {
    let body = r#"{
        "message": "success",
        "attractions": [
            {"id": "a-1", "name": "Rub' al Khali", "description": "Empty Quarter", "image": null},
            {"id": "a-2", "name": "Wadi Rum", "description": null, "image": null}
        ]
    }"#;

    let attractions = parse_attractions_body(body).expect("attractions");
    assert_eq!(attractions.len(), 2);
    assert_eq!(attractions[0].name, "Rub' al Khali");
    assert_eq!(attractions[1].name, "Wadi Rum");
}

#[test]
fn attractions_err_surfaces_as_server_error() {
    let err = parse_attractions_body(r#"{"err":"category not found"}"#).expect_err("server error");
    assert_eq!(err.messages(), ["category not found"]);
}
