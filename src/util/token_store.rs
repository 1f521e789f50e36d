//! Session token persistence backed by `localStorage`.
//!
//! The raw token string lives under a single origin-scoped key with no
//! expiry metadata; the server decides on next use whether it is still
//! valid. Requires a browser environment; native builds see no token.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "arabian_odyssey_token";

/// Read the persisted session token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?.and_then(normalize)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the token immediately. Last write wins.
pub fn write(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Treat an empty stored value as no token at all.
pub fn normalize(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
