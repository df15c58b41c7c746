//! Document store: discovery and deserialization of data files.
//!
//! Documents live under a data directory, one object per file, in RON, JSON,
//! or TOML (detected by extension). Discovery is recursive and returns
//! documents sorted by identity so every reload processes them in the same
//! order.

use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while reading documents.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Document discovery
// ===========================================================================

/// Identifies one document: its path relative to the scanned directory, with
/// `/` separators and the extension stripped (e.g. `weapons/iron_sword`).
/// Tables keyed by document identity use this as the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discovered document, not yet parsed.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub path: PathBuf,
}

/// Recursively scan `dir` for data files in a supported format.
///
/// Returns documents sorted by identity (load order is document order). A
/// missing directory yields no documents rather than an error: hosts are free
/// to ship none.
///
/// Files differing only by extension collapse to one identity; the first by
/// path order is kept and the rest are skipped with a diagnostic, so a
/// conflict never produces duplicate table keys or a double merge.
pub fn scan_documents(dir: &Path) -> Result<Vec<Document>, DataLoadError> {
    let mut documents = Vec::new();
    if dir.is_dir() {
        collect_documents(dir, dir, &mut documents)?;
    }
    documents.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.path.cmp(&b.path)));
    documents.dedup_by(|shadowed, kept| {
        let conflict = shadowed.id == kept.id;
        if conflict {
            log::error!(
                "conflicting formats for document {}: {} is shadowed by {}",
                kept.id,
                shadowed.path.display(),
                kept.path.display()
            );
        }
        conflict
    });
    Ok(documents)
}

fn collect_documents(
    root: &Path,
    dir: &Path,
    out: &mut Vec<Document>,
) -> Result<(), DataLoadError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_documents(root, &path, out)?;
        } else if detect_format(&path).is_ok() {
            out.push(Document {
                id: document_id(root, &path),
                path,
            });
        }
        // Files in unsupported formats are not documents; ignore them.
    }
    Ok(())
}

fn document_id(root: &Path, path: &Path) -> DocumentId {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    let id = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    DocumentId(id)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

// ===========================================================================
// Load summary
// ===========================================================================

/// Per-table counters for one reload pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Documents that contributed to the published table.
    pub processed: usize,
    /// Documents skipped (unparseable, missing fields, or empty after
    /// filtering).
    pub skipped: usize,
}

// ===========================================================================
// Tests
// ===========================================================================
