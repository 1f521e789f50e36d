//! Browser utility helpers.

pub mod token_store;
