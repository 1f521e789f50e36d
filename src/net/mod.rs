//! HTTP layer: endpoint wrappers, response envelopes, and error types.
//!
//! Transport (`gloo-net`, browser only) is kept separate from parsing so
//! the response handling runs natively under `cargo test`.

pub mod api;
pub mod error;
pub mod types;
