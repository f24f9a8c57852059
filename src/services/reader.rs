//! Stylesheet reading and normalization.
//!
//! Files are read concurrently but collected strictly in manifest order.

use crate::domain::{normalize, LogicalKey, Manifest, StylesheetEntry, StylesheetMap};
use crate::error::FileReadError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Read a stylesheet and strip its whitespace.
///
/// A leading UTF-8 byte order mark is dropped with the rest of the encoding.
pub async fn normalize_file(path: &Path) -> io::Result<String> {
    let text = tokio::fs::read_to_string(path).await?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(normalize(text))
}

/// Result of reading every manifest entry
#[derive(Debug, Default)]
pub struct ReadOutcome {
    /// Entries that were read, in manifest order
    pub map: StylesheetMap,
    /// Entries that were skipped, in manifest order
    pub failures: Vec<FileReadError>,
}

/// Reads manifest entries relative to a root directory
pub struct StylesheetReader {
    root: PathBuf,
    namespace: String,
    open_files: Arc<Semaphore>,
}

impl StylesheetReader {
    /// Create a reader; at most `max_open_files` files are open at once
    pub fn new(root: PathBuf, namespace: impl Into<String>, max_open_files: usize) -> Self {
        Self {
            root,
            namespace: namespace.into(),
            open_files: Arc::new(Semaphore::new(max_open_files.max(1))),
        }
    }

    /// Read and normalize every entry of the manifest.
    ///
    /// A file that cannot be read is logged and left out; it never fails the
    /// whole pass.
    pub async fn read_all(&self, manifest: &Manifest) -> ReadOutcome {
        let pending: Vec<(&String, PathBuf, JoinHandle<io::Result<String>>)> = manifest
            .entries()
            .iter()
            .map(|file_name| {
                let path = self.root.join(file_name);
                let handle = self.spawn_read(path.clone());
                (file_name, path, handle)
            })
            .collect();

        let mut outcome = ReadOutcome::default();
        for (file_name, path, handle) in pending {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(io::Error::other(e)),
            };

            match result {
                Ok(content) => {
                    tracing::debug!("Normalized {} ({} bytes)", path.display(), content.len());
                    outcome.map.insert(StylesheetEntry {
                        key: LogicalKey::new(&self.namespace, file_name),
                        content,
                    });
                }
                Err(source) => {
                    let err = FileReadError {
                        file_name: file_name.clone(),
                        path,
                        source,
                    };
                    // Log error but continue with other stylesheets
                    tracing::warn!("{}", err);
                    outcome.failures.push(err);
                }
            }
        }

        outcome
    }

    fn spawn_read(&self, path: PathBuf) -> JoinHandle<io::Result<String>> {
        let open_files = Arc::clone(&self.open_files);
        tokio::spawn(async move {
            let _permit = open_files.acquire_owned().await.map_err(io::Error::other)?;
            normalize_file(&path).await
        })
    }
}
