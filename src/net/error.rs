#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures an API call can produce.
///
/// Server-reported errors keep their ordered display strings; transport,
/// timeout, and malformed-body failures carry a single description. All of
/// them surface to the submitting form via [`ApiError::messages`] — nothing
/// is swallowed into the console alone.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("the server took too long to respond")]
    Timeout,
    #[error("unexpected response from the server: {0}")]
    Malformed(String),
    #[error("{}", .0.join(", "))]
    Server(Vec<String>),
}

impl ApiError {
    /// Ordered display strings for inline form rendering.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Server(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    #[cfg(not(feature = "csr"))]
    pub(crate) fn unavailable() -> Self {
        Self::Transport("not available outside the browser".to_owned())
    }
}

/// The `err` field of an error response: either a bare string or an
/// ordered list of field validation objects.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum ErrField {
    Single(String),
    Fields(Vec<FieldError>),
}

/// One element of the array form of `err`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FieldError {
    pub message: String,
}

impl ErrField {
    /// Normalize to an ordered sequence of display strings: a bare string
    /// becomes a one-element sequence, an array maps to its `message`s.
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Single(message) => vec![message],
            Self::Fields(fields) => fields.into_iter().map(|f| f.message).collect(),
        }
    }
}
