//! Page components, one per route.

pub mod category;
pub mod confirm_email;
pub mod error;
pub mod home;
pub mod profile;
pub mod settings;
pub mod signin;
pub mod signup;
