use crate::model::config::ArchiveConfig;

/// The closed set of boolean display/feature flags the views consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingFlag {
    /// Thumbnail glyphs render with fg/bg swapped (dark-mode inversion)
    ThumbInverted,
    /// Document notes are shown in listings and previews
    NotesEnabled,
}

/// Read-only flag source shared by the card views.
///
/// Flag values are copied from the archive config when the app starts; views
/// consult this at render time but nothing in the TUI writes to it.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    thumb_inverted: bool,
    notes_enabled: bool,
}

impl Settings {
    pub fn from_config(config: &ArchiveConfig) -> Self {
        Settings {
            thumb_inverted: config.ui.thumb_inverted,
            notes_enabled: config.features.notes,
        }
    }

    pub fn get(&self, flag: SettingFlag) -> bool {
        match flag {
            SettingFlag::ThumbInverted => self.thumb_inverted,
            SettingFlag::NotesEnabled => self.notes_enabled,
        }
    }

    pub fn is_thumb_inverted(&self) -> bool {
        self.get(SettingFlag::ThumbInverted)
    }

    pub fn is_notes_enabled(&self) -> bool {
        self.get(SettingFlag::NotesEnabled)
    }
}
