use serde::{Deserialize, Serialize};

/// Configuration from docket.toml (all sections optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub archive: ArchiveInfo,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub features: FeatureConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveInfo {
    /// Display name; defaults to the archive directory name
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex colors like "#FB4196"; unset entries use the built-in theme
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub dim: Option<String>,
    /// Render thumbnail glyphs with foreground/background swapped
    #[serde(default)]
    pub thumb_inverted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Show document notes in listings and previews
    #[serde(default = "default_true")]
    pub notes: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig { notes: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ArchiveConfig = toml::from_str("").unwrap();
        assert!(config.features.notes);
        assert!(!config.ui.thumb_inverted);
        assert!(config.archive.name.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: ArchiveConfig = toml::from_str(
            r##"[archive]
name = "Tax papers"

[ui]
highlight = "#FB4196"
thumb_inverted = true

[features]
notes = false
"##,
        )
        .unwrap();
        assert_eq!(config.archive.name.as_deref(), Some("Tax papers"));
        assert_eq!(config.ui.highlight.as_deref(), Some("#FB4196"));
        assert!(config.ui.thumb_inverted);
        assert!(!config.features.notes);
    }
}
