//! Stylesheet manifest: the ordered list of files to bundle.

use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Ordered stylesheet file names, relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Create a manifest from file names, keeping their order
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Load the list stored under `field` of the document at `path`.
    ///
    /// The format is picked from the file extension (`module.json`,
    /// `styles.toml`, ...). `field` may be a dotted path into nested tables.
    pub fn load(path: &Path, field: &str) -> ConfigResult<Self> {
        use config::{Config, File, ValueKind};

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let document = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        let values = match document.get_array(field) {
            Ok(values) => values,
            Err(config::ConfigError::NotFound(_)) => {
                return Err(ConfigError::Invalid(format!(
                    "{} has no `{}` field",
                    path.display(),
                    field
                )))
            }
            Err(e) => {
                return Err(ConfigError::Invalid(format!(
                    "`{}` in {} is not a list of file names: {}",
                    field,
                    path.display(),
                    e
                )))
            }
        };

        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value.kind {
                ValueKind::String(name) => Ok(name),
                other => Err(ConfigError::Invalid(format!(
                    "`{}[{}]` in {} is not a file name: {:?}",
                    field,
                    index,
                    path.display(),
                    other
                ))),
            })
            .collect::<ConfigResult<Vec<String>>>()?;

        tracing::debug!(
            "Loaded {} stylesheet names from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries })
    }

    /// File names in manifest order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
