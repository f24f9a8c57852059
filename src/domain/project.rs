//! Project context: the base directory a build resolves paths against.

use crate::config::{BuildConfig, PROJECT_CONFIG_FILE};
use std::path::PathBuf;

/// Resolved paths and settings for one build
#[derive(Debug, Clone)]
pub struct Project {
    /// Base directory stylesheet names are relative to
    pub root_path: PathBuf,
    /// Manifest document (absolute path)
    pub manifest_path: PathBuf,
    /// Generated module (absolute path)
    pub output_path: PathBuf,
    /// Loaded configuration
    pub config: BuildConfig,
}

impl Project {
    /// Create a new Project from a root path and configuration
    pub fn new(root_path: PathBuf, config: BuildConfig) -> Self {
        let manifest_path = root_path.join(&config.manifest.path);
        let output_path = root_path.join(&config.output.file);

        Self {
            root_path,
            manifest_path,
            output_path,
            config,
        }
    }

    /// Discover the project root by walking up to the first `.stylemap.toml`
    pub fn discover(start_path: Option<PathBuf>) -> Option<PathBuf> {
        let start = start_path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let mut current = start.as_path();
        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current.to_path_buf());
            }

            // Move up to parent
            match current.parent() {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_new() {
        let config = BuildConfig::default();
        let project = Project::new(PathBuf::from("/tmp/test-project"), config);

        assert_eq!(project.root_path, PathBuf::from("/tmp/test-project"));
        assert_eq!(
            project.manifest_path,
            PathBuf::from("/tmp/test-project/module.json")
        );
        assert_eq!(
            project.output_path,
            PathBuf::from("/tmp/test-project/stylesheets.js")
        );
    }

    #[test]
    fn test_discover_walks_up() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        std::fs::write(root.join(PROJECT_CONFIG_FILE), "").unwrap();
        let nested = root.join("front_end").join("hello_world");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Project::discover(Some(nested)), Some(root));
    }
}
