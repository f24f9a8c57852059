//! Configuration management for stylemap.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Name of the project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = ".stylemap.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub read: ReadConfig,
}

impl BuildConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.stylemap.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/stylemap/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "stylemap", "stylemap") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (STYLEMAP__*)
        builder = builder.add_source(
            Environment::with_prefix("STYLEMAP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the emitter or reader cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.output.export_name) {
            return Err(ConfigError::Invalid(format!(
                "export name `{}` is not a valid identifier",
                self.output.export_name
            )));
        }
        if self.output.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output file is empty".to_string()));
        }
        if self.manifest.field.trim().is_empty() {
            return Err(ConfigError::Invalid("manifest field is empty".to_string()));
        }
        if self.read.max_open_files == 0 {
            return Err(ConfigError::Invalid(
                "read.max_open_files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap())
        .is_match(name)
}

/// Where the stylesheet manifest lives and which field lists the files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Manifest document (relative to project root)
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
    /// Field holding the ordered list of stylesheet file names
    #[serde(default = "default_manifest_field")]
    pub field: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            field: default_manifest_field(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("module.json")
}

fn default_manifest_field() -> String {
    "resources".to_string()
}

/// Logical key configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Prefix prepended to every file name
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "ui/".to_string()
}

/// Generated module configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Generated file (relative to project root)
    #[serde(default = "default_output_file")]
    pub file: PathBuf,
    /// Identifier the mapping is exported under
    #[serde(default = "default_export_name")]
    pub export_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            export_name: default_export_name(),
        }
    }
}

fn default_output_file() -> PathBuf {
    PathBuf::from("stylesheets.js")
}

fn default_export_name() -> String {
    "stylesheets".to_string()
}

/// Stylesheet read configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadConfig {
    /// Upper bound on files open at once
    #[serde(default = "default_max_open_files")]
    pub max_open_files: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_open_files: default_max_open_files(),
        }
    }
}

fn default_max_open_files() -> usize {
    16
}
