use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What kind of archive entry a card represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Folder,
    Document,
}

/// One entry in the card grid: a folder or a document at the archive root.
///
/// Metadata beyond `title`/`kind` is best-effort: a document whose file
/// vanished between scan and render simply shows blanks.
#[derive(Debug, Clone)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub path: PathBuf,
    /// File size in bytes (documents only)
    pub size: Option<u64>,
    /// Last modification time (documents only)
    pub modified: Option<DateTime<Utc>>,
    /// First few lines of a text document, for the preview popover
    pub snippet: Option<String>,
    /// Number of notes in the sidecar file
    pub note_count: usize,
}

impl Card {
    pub fn folder(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Card {
            kind: CardKind::Folder,
            title: title.into(),
            path: path.into(),
            size: None,
            modified: None,
            snippet: None,
            note_count: 0,
        }
    }

    pub fn document(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Card {
            kind: CardKind::Document,
            title: title.into(),
            path: path.into(),
            size: None,
            modified: None,
            snippet: None,
            note_count: 0,
        }
    }

    /// Human-readable size, e.g. "1.2 KB"
    pub fn size_display(&self) -> Option<String> {
        let size = self.size?;
        Some(format_size(size))
    }
}

/// Format a byte count with a binary-ish unit ladder (KB = 1024)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
