use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Layla".to_owned(),
        email: "layla@example.com".to_owned(),
        phone: None,
        image: None,
    }
}

// =============================================================
// TokenState defaults
// =============================================================

#[test]
fn token_state_default_has_no_token() {
    assert!(TokenState::default().token.is_none());
}

// =============================================================
// Resolution terminal branches
// =============================================================

#[test]
fn no_token_clears_user_and_finishes_loading() {
    let mut auth = AuthState {
        user: Some(user()),
        loading: true,
    };

    apply_no_token(&mut auth);
    assert!(auth.user.is_none());
    assert!(!auth.loading);
}

#[test]
fn successful_profile_fetch_sets_user_verbatim() {
    let mut auth = AuthState::default();

    apply_profile(&mut auth, Ok(user()));
    assert_eq!(auth.user, Some(user()));
    assert!(!auth.loading);
}

#[test]
fn failed_profile_fetch_clears_user_and_finishes_loading() {
    let mut auth = AuthState {
        user: Some(user()),
        loading: true,
    };

    apply_profile(&mut auth, Err(ApiError::Transport("connection refused".to_owned())));
    assert!(auth.user.is_none());
    assert!(!auth.loading);
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn newer_generation_supersedes_in_flight_attempt() {
    let mut counter = ResolverGeneration::default();
    let first = counter.begin();
    let second = counter.begin();

    assert!(!counter.is_current(first));
    assert!(counter.is_current(second));
}

#[test]
fn generation_is_current_until_superseded() {
    let mut counter = ResolverGeneration::default();
    let attempt = counter.begin();
    assert!(counter.is_current(attempt));
}
