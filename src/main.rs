//! stylemap: generate the stylesheet module for the current project
//!
//! Takes no arguments. Exits non-zero when the manifest cannot be loaded or the
//! module cannot be written; unreadable stylesheets are only warned about.

use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stylemap::{App, BuildReport};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // Find project root
    let project_root = stylemap::domain::Project::discover(None)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    tracing::info!("Starting stylemap in {:?}", project_root);

    build(project_root).await?;

    Ok(())
}

/// Load configuration and run one build
async fn build(project_root: PathBuf) -> Result<BuildReport> {
    let app = App::new(project_root).context("failed to load configuration")?;
    app.run().await.context("stylesheet build failed")
}
