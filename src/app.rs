//! Build pipeline: manifest → normalized stylesheets → generated module.

use crate::config::BuildConfig;
use crate::domain::{Manifest, Project};
use crate::error::{FileReadError, Result};
use crate::services::{MapEmitter, StylesheetReader};
use std::path::PathBuf;

/// Summary of a finished build
#[derive(Debug)]
pub struct BuildReport {
    /// Where the module was written
    pub output_path: PathBuf,
    /// Number of entries in the emitted map
    pub written: usize,
    /// Manifest entries left out because they could not be read
    pub skipped: Vec<FileReadError>,
}

impl BuildReport {
    /// True when every manifest entry made it into the map
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// One build invocation over a project
pub struct App {
    project: Project,
}

impl App {
    /// Create a new application instance, loading layered configuration
    pub fn new(project_root: PathBuf) -> Result<Self> {
        let config = BuildConfig::load(Some(&project_root))?;
        Ok(Self::with_config(project_root, config))
    }

    /// Create an application instance from an explicit configuration
    pub fn with_config(project_root: PathBuf, config: BuildConfig) -> Self {
        Self {
            project: Project::new(project_root, config),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Run the build once.
    ///
    /// A manifest or output failure is returned as an error and nothing is
    /// written for a manifest failure. Unreadable stylesheets only end up in
    /// [`BuildReport::skipped`].
    pub async fn run(&self) -> Result<BuildReport> {
        let config = &self.project.config;
        config.validate()?;

        let manifest = Manifest::load(&self.project.manifest_path, &config.manifest.field)?;
        tracing::info!(
            "Bundling {} stylesheets listed in {}",
            manifest.len(),
            self.project.manifest_path.display()
        );

        let reader = StylesheetReader::new(
            self.project.root_path.clone(),
            config.keys.namespace.clone(),
            config.read.max_open_files,
        );
        let outcome = reader.read_all(&manifest).await;

        let emitter = MapEmitter::new(config.output.export_name.clone());
        emitter.write(&outcome.map, &self.project.output_path)?;

        let report = BuildReport {
            output_path: self.project.output_path.clone(),
            written: outcome.map.len(),
            skipped: outcome.failures,
        };

        if report.is_complete() {
            tracing::info!(
                "Wrote {} stylesheets to {}",
                report.written,
                report.output_path.display()
            );
        } else {
            tracing::warn!(
                "Wrote {} stylesheets to {} ({} skipped)",
                report.written,
                report.output_path.display(),
                report.skipped.len()
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ConfigError, EmitError};
    use crate::services::GENERATED_HEADER;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_project(resources: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        fs::write(
            root.join("module.json"),
            format!(r#"{{"dependencies": ["ui"], "resources": {resources}}}"#),
        )
        .unwrap();
        fs::write(root.join("a.css"), "body {\n  color: red;\n}").unwrap();
        fs::write(root.join("b.css"), "div{margin:0}").unwrap();

        (temp, root)
    }

    #[tokio::test]
    async fn test_build_skips_missing_file() {
        let (_temp, root) = create_test_project(r#"["a.css", "missing.css", "b.css"]"#);
        let app = App::with_config(root.clone(), BuildConfig::default());

        let report = app.run().await.unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file_name, "missing.css");
        assert!(!report.is_complete());

        let module = fs::read_to_string(root.join("stylesheets.js")).unwrap();
        assert_eq!(
            module,
            format!(
                "{GENERATED_HEADER}\n\
                 export const stylesheets = {{\n  \
                 \"ui/a.css\": \"body{{color:red;}}\",\n  \
                 \"ui/b.css\": \"div{{margin:0}}\",\n\
                 }};\n"
            )
        );
    }

    #[tokio::test]
    async fn test_build_empty_manifest_writes_empty_map() {
        let (_temp, root) = create_test_project("[]");
        let app = App::with_config(root.clone(), BuildConfig::default());

        let report = app.run().await.unwrap();
        assert_eq!(report.written, 0);
        assert!(report.is_complete());

        let module = fs::read_to_string(root.join("stylesheets.js")).unwrap();
        assert!(module.ends_with("export const stylesheets = {};\n"));
    }

    #[tokio::test]
    async fn test_missing_manifest_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        fs::write(root.join("stylesheets.js"), "previous build").unwrap();

        let app = App::with_config(root.clone(), BuildConfig::default());
        let err = app.run().await.unwrap_err();

        assert!(matches!(err, AppError::Config(ConfigError::NotFound(_))));
        assert_eq!(
            fs::read_to_string(root.join("stylesheets.js")).unwrap(),
            "previous build"
        );
    }

    #[tokio::test]
    async fn test_missing_manifest_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        let app = App::with_config(root.clone(), BuildConfig::default());
        assert!(app.run().await.is_err());
        assert!(!root.join("stylesheets.js").exists());
    }

    #[tokio::test]
    async fn test_invalid_export_name_fails_before_writing() {
        let (_temp, root) = create_test_project(r#"["a.css"]"#);
        let mut config = BuildConfig::default();
        config.output.export_name = "style-sheets".to_string();

        let app = App::with_config(root.clone(), config);
        let err = app.run().await.unwrap_err();

        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
        assert!(!root.join("stylesheets.js").exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_is_reported() {
        let (_temp, root) = create_test_project(r#"["a.css"]"#);
        fs::write(root.join("gen"), "a file, not a directory").unwrap();
        let mut config = BuildConfig::default();
        config.output.file = PathBuf::from("gen/stylesheets.js");

        let app = App::with_config(root, config);
        let err = app.run().await.unwrap_err();

        assert!(matches!(err, AppError::Emit(EmitError::Write { .. })));
    }

    #[tokio::test]
    async fn test_custom_namespace_and_export() {
        let (_temp, root) = create_test_project(r#"["b.css", "a.css"]"#);
        let mut config = BuildConfig::default();
        config.keys.namespace = "hello_world/".to_string();
        config.output.export_name = "helloWorldStyles".to_string();

        let app = App::with_config(root.clone(), config);
        app.run().await.unwrap();

        let module = fs::read_to_string(root.join("stylesheets.js")).unwrap();
        let body: Vec<&str> = module.lines().skip(1).collect();
        assert_eq!(
            body,
            vec![
                "export const helloWorldStyles = {",
                r#"  "hello_world/b.css": "div{margin:0}","#,
                r#"  "hello_world/a.css": "body{color:red;}","#,
                "};",
            ]
        );
    }
}
