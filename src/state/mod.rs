//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `form`) so pages depend on
//! small focused models. Each model is a plain struct held in an `RwSignal`
//! context; the structs themselves carry no reactivity and test natively.

pub mod auth;
pub mod form;
pub mod session;
