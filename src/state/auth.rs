#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `user` is only ever written by the session resolver (and by the
/// settings/profile pages after a confirmed server-side update); every
/// other consumer reads it through the shared context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Loading starts `true` and stays up until the first resolution attempt
/// completes, so route gating never flashes an unauthenticated view while
/// a stored token is still being exchanged for a profile.
impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}
