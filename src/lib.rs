//! stylemap: bundles a manifest of stylesheets into a generated module
//!
//! Each listed stylesheet is read, stripped of all whitespace and stored under
//! a namespaced key in a single exported mapping that a UI framework can hand
//! to its style-injection call.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::{App, BuildReport};
pub use config::BuildConfig;
pub use error::{AppError, Result};
