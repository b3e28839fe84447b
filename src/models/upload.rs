//! Transient records for files dropped on the classifier.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

/// Local handle used to render a dropped file's thumbnail.
#[derive(Debug, Clone)]
pub enum PreviewRef {
    /// File on disk, rendered through a `file://` URI.
    Path(PathBuf),
    /// In-memory contents under a synthetic URI.
    Bytes { uri: String, bytes: Arc<[u8]> },
    /// Nothing to render (drop carried neither a path nor bytes).
    Unavailable,
}

impl PreviewRef {
    /// URI the image loaders resolve, if there is one.
    pub fn uri(&self) -> Option<String> {
        match self {
            PreviewRef::Path(path) => Some(format!("file://{}", path.display())),
            PreviewRef::Bytes { uri, .. } => Some(uri.clone()),
            PreviewRef::Unavailable => None,
        }
    }
}

/// Process-wide sequence for in-memory preview URIs. egui caches images by
/// URI for the lifetime of the context, so URIs are never reused.
static NEXT_BYTES_URI: AtomicU64 = AtomicU64::new(0);

/// A file accepted by the classifier. Held in memory only.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub preview: PreviewRef,
    pub dropped_at: DateTime<Local>,
}

impl UploadedFile {
    /// Create a record for a file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            preview: PreviewRef::Path(path),
            dropped_at: Local::now(),
        }
    }

    /// Create a record for in-memory contents under a fresh URI.
    pub fn from_bytes(name: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        let name = name.into();
        let seq = NEXT_BYTES_URI.fetch_add(1, Ordering::Relaxed);
        Self {
            preview: PreviewRef::Bytes {
                uri: format!("bytes://{seq}/{name}"),
                bytes,
            },
            name,
            dropped_at: Local::now(),
        }
    }

    /// Create a record with a name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preview: PreviewRef::Unavailable,
            dropped_at: Local::now(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
