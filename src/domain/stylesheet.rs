//! Stylesheet entries and the ordered map that gets emitted.

use regex::Regex;
use std::sync::OnceLock;

/// Namespaced identifier a stylesheet is stored under.
/// Format: "{namespace}{file_name}" (e.g., "ui/helloWorld.css")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalKey(String);

impl LogicalKey {
    /// Create a key by prefixing the file name with the namespace
    pub fn new(namespace: &str, file_name: &str) -> Self {
        Self(format!("{}{}", namespace, file_name))
    }

    /// Get the full key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LogicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Remove every run of whitespace from stylesheet text.
///
/// Runs are dropped, not collapsed to a single space, so tokens that relied
/// on a separating space get joined (`a b` becomes `ab`).
pub fn normalize(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE
        .get_or_init(|| Regex::new(r"\s+").unwrap())
        .replace_all(text, "")
        .into_owned()
}

/// A stylesheet ready to be embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetEntry {
    pub key: LogicalKey,
    /// Whitespace-stripped content
    pub content: String,
}

impl StylesheetEntry {
    /// Build an entry from raw file text
    pub fn from_source(namespace: &str, file_name: &str, text: &str) -> Self {
        Self {
            key: LogicalKey::new(namespace, file_name),
            content: normalize(text),
        }
    }
}

/// Logical key → normalized content, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetMap {
    entries: Vec<StylesheetEntry>,
}

impl StylesheetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated key keeps its first position and takes
    /// the new content.
    pub fn insert(&mut self, entry: StylesheetEntry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => {
                tracing::debug!("Stylesheet {} listed twice, keeping last content", entry.key);
                existing.content = entry.content;
            }
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key.as_str() == key)
            .map(|e| e.content.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylesheetEntry> {
        self.entries.iter()
    }

    /// Keys in emission order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<StylesheetEntry> for StylesheetMap {
    fn from_iter<I: IntoIterator<Item = StylesheetEntry>>(iter: I) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.insert(entry);
        }
        map
    }
}
