#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// The stored session token, provided as a shared context alongside
/// [`AuthState`]. Writing a new value (or `None`) retriggers the session
/// resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    pub token: Option<String>,
}

/// Monotonic counter guarding the resolver against stale responses.
///
/// Each resolution attempt takes the next generation number; a response is
/// applied only while its generation is still the latest, so a token change
/// that supersedes an in-flight fetch can never be overwritten by it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverGeneration(u64);

impl ResolverGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Terminal branch for an absent token: no user, no network call.
pub fn apply_no_token(auth: &mut AuthState) {
    auth.user = None;
    auth.loading = false;
}

/// Terminal branch for a completed profile fetch. Both outcomes clear the
/// loading flag; a failed fetch leaves no user rather than a stale one.
pub fn apply_profile(auth: &mut AuthState, result: Result<User, ApiError>) {
    auth.user = result.ok();
    auth.loading = false;
}

/// Reconcile [`AuthState`] with the token whenever it changes, including
/// the initial value read from storage on mount.
#[cfg(feature = "csr")]
pub fn spawn_session_resolver(
    token: leptos::prelude::RwSignal<TokenState>,
    auth: leptos::prelude::RwSignal<AuthState>,
) {
    use leptos::prelude::{Effect, Get, GetValue, SetValue, StoredValue, Update};

    let generation = StoredValue::new(ResolverGeneration::default());

    Effect::new(move || {
        let current = token.get().token;
        let attempt = {
            let mut counter = generation.get_value();
            let attempt = counter.begin();
            generation.set_value(counter);
            attempt
        };

        match current {
            None => auth.update(apply_no_token),
            Some(stored) => {
                auth.update(|a| a.loading = true);
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_profile(&stored).await;
                    if !generation.get_value().is_current(attempt) {
                        // Superseded by a newer token change.
                        return;
                    }
                    if let Err(err) = &result {
                        leptos::logging::warn!("profile fetch failed: {err}");
                    }
                    auth.update(|a| apply_profile(a, result));
                });
            }
        }
    });
}
