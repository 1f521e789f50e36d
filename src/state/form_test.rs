use super::*;

// =============================================================
// Submission state machine
// =============================================================

#[test]
fn submission_default_idle_no_errors() {
    let sub = FormSubmission::default();
    assert_eq!(sub.status, SubmitStatus::Idle);
    assert!(sub.errors.is_empty());
    assert!(!sub.is_submitting());
}

#[test]
fn begin_enters_submitting_and_clears_prior_errors() {
    let mut sub = FormSubmission::default();
    sub.fail(vec!["wrong password".to_owned()]);

    sub.begin();
    assert_eq!(sub.status, SubmitStatus::Submitting);
    assert!(sub.errors.is_empty());
    assert!(sub.is_submitting());
}

#[test]
fn fail_stores_errors_in_order() {
    let mut sub = FormSubmission::default();
    sub.begin();
    sub.fail(vec!["email is required".to_owned(), "password too short".to_owned()]);

    assert_eq!(sub.status, SubmitStatus::Failed);
    assert_eq!(sub.errors, ["email is required", "password too short"]);
}

#[test]
fn fail_overwrites_rather_than_merges() {
    let mut sub = FormSubmission::default();
    sub.fail(vec!["first".to_owned()]);
    sub.fail(vec!["second".to_owned()]);

    assert_eq!(sub.errors, ["second"]);
}

#[test]
fn succeed_clears_errors() {
    let mut sub = FormSubmission::default();
    sub.fail(vec!["wrong password".to_owned()]);

    sub.succeed();
    assert_eq!(sub.status, SubmitStatus::Succeeded);
    assert!(sub.errors.is_empty());
}

// =============================================================
// Special-cased error string
// =============================================================

#[test]
fn existing_account_error_matches_exact_string_only() {
    assert!(is_existing_account_error("user already exist"));
    assert!(!is_existing_account_error("user already exists"));
    assert!(!is_existing_account_error("wrong password"));
}
