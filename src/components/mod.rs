//! Reusable view components shared across pages.

pub mod error_alert;
pub mod input;
pub mod layout;
pub mod loading;
pub mod submit_button;
