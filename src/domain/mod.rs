//! Domain entities for stylemap.
//!
//! This module contains the core build entities:
//! - Manifest: the ordered list of stylesheet files
//! - Stylesheet: logical keys, normalization and the emitted map
//! - Project: the base directory and loaded configuration

mod manifest;
mod project;
mod stylesheet;

pub use manifest::Manifest;
pub use project::Project;
pub use stylesheet::{normalize, LogicalKey, StylesheetEntry, StylesheetMap};
