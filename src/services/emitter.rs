//! Renders the stylesheet map as a generated module and writes it out.

use crate::domain::StylesheetMap;
use crate::error::{EmitError, EmitResult};
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// First line of every generated module
pub const GENERATED_HEADER: &str = "// Generated by stylemap. Do not edit.";

/// Emits `export const <name> = { "key": "content", ... };`
pub struct MapEmitter {
    export_name: String,
}

impl MapEmitter {
    /// Create an emitter for the given export identifier
    pub fn new(export_name: impl Into<String>) -> Self {
        Self {
            export_name: export_name.into(),
        }
    }

    /// Render the module source. Entries keep map order.
    pub fn render(&self, map: &StylesheetMap) -> EmitResult<String> {
        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        out.push('\n');

        if map.is_empty() {
            writeln!(out, "export const {} = {{}};", self.export_name)?;
            return Ok(out);
        }

        writeln!(out, "export const {} = {{", self.export_name)?;
        for entry in map.iter() {
            // JSON string literals are valid string literals in the module
            let key = serde_json::to_string(entry.key.as_str())?;
            let content = serde_json::to_string(&entry.content)?;
            writeln!(out, "  {}: {},", key, content)?;
        }
        out.push_str("};\n");

        Ok(out)
    }

    /// Render and write the module to `path`, replacing any existing file.
    ///
    /// The module is written to a sibling temporary file and renamed into
    /// place, so `path` never holds a partially written module.
    pub fn write(&self, map: &StylesheetMap, path: &Path) -> EmitResult<()> {
        let source = self.render(map)?;
        let write_error = |source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(write_error)?;

        let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
        staged.write_all(source.as_bytes()).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged.persist(path).map_err(|e| write_error(e.error))?;

        tracing::debug!("Wrote {} entries to {}", map.len(), path.display());
        Ok(())
    }
}
