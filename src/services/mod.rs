//! Build services for stylemap.
//!
//! This module contains:
//! - StylesheetReader: concurrent, order-preserving reads and normalization
//! - MapEmitter: rendering and writing the generated module

mod emitter;
mod reader;

pub use emitter::{MapEmitter, GENERATED_HEADER};
pub use reader::{normalize_file, ReadOutcome, StylesheetReader};
