use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::io::config_io::load_config;
use crate::model::card::Card;
use crate::model::config::ArchiveConfig;

/// Maximum bytes read from a document when building its preview snippet
const SNIPPET_READ_LIMIT: u64 = 4096;
/// Maximum characters kept in a snippet
const SNIPPET_MAX_CHARS: usize = 280;

pub const CONFIG_FILE: &str = "docket.toml";
pub const NOTES_SUFFIX: &str = ".notes";

/// Error type for archive I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("not an archive: {} is not a directory", .0.display())]
    NotAnArchive(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse docket.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// An archive root loaded into memory: its config and one level of cards.
#[derive(Debug, Clone)]
pub struct Archive {
    pub root: PathBuf,
    pub config: ArchiveConfig,
    pub cards: Vec<Card>,
}

impl Archive {
    /// Display name: configured name, or the directory's file name.
    pub fn name(&self) -> String {
        if let Some(name) = &self.config.archive.name {
            return name.clone();
        }
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

/// Load an archive: parse the optional docket.toml and scan one directory
/// level into cards. Folders sort first, then documents newest-first.
pub fn load_archive(root: &Path) -> Result<Archive, ArchiveError> {
    if !root.is_dir() {
        return Err(ArchiveError::NotAnArchive(root.to_path_buf()));
    }
    let config = load_config(root)?;
    let cards = scan_cards(root)?;
    Ok(Archive {
        root: root.to_path_buf(),
        config,
        cards,
    })
}

/// Scan one level of the archive directory into cards.
///
/// Hidden entries, the config file and note sidecars are not cards; sidecars
/// feed the note count of the document they annotate instead.
pub fn scan_cards(root: &Path) -> Result<Vec<Card>, ArchiveError> {
    let mut folders = Vec::new();
    let mut documents = Vec::new();

    let entries = fs::read_dir(root).map_err(|e| ArchiveError::ReadError {
        path: root.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || name == CONFIG_FILE || name.ends_with(NOTES_SUFFIX) {
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            folders.push(Card::folder(name, path));
        } else if file_type.is_file() {
            documents.push(read_document_card(&path, name));
        }
        // Symlinks and other entry types are skipped
    }

    folders.sort_by(|a, b| a.title.cmp(&b.title));
    // Newest first, undated documents last
    documents.sort_by(|a, b| b.modified.cmp(&a.modified).then(a.title.cmp(&b.title)));

    folders.extend(documents);
    Ok(folders)
}

/// Build a document card with best-effort metadata. A file that disappears
/// mid-scan still yields a card, just without size/date/snippet.
fn read_document_card(path: &Path, name: String) -> Card {
    let mut card = Card::document(name, path);

    if let Ok(meta) = fs::metadata(path) {
        card.size = Some(meta.len());
        card.modified = meta
            .modified()
            .ok()
            .map(|t| DateTime::<Utc>::from(t));
    }
    card.snippet = read_snippet(path);
    card.note_count = count_notes(path);
    card
}

/// First lines of a text document, trimmed to the snippet budget.
/// Returns None for binary-looking content.
fn read_snippet(path: &Path) -> Option<String> {
    use std::io::Read;

    let file = fs::File::open(path).ok()?;
    let mut buf = String::new();
    file.take(SNIPPET_READ_LIMIT).read_to_string(&mut buf).ok()?;

    let text: String = buf.chars().take(SNIPPET_MAX_CHARS).collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Count notes in the `<name>.notes` sidecar: one note per non-empty line.
fn count_notes(doc_path: &Path) -> usize {
    let mut sidecar = doc_path.as_os_str().to_owned();
    sidecar.push(NOTES_SUFFIX);
    match fs::read_to_string(Path::new(&sidecar)) {
        Ok(text) => text.lines().filter(|l| !l.trim().is_empty()).count(),
        Err(_) => 0,
    }
}
