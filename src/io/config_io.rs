use std::fs;
use std::path::Path;

use crate::io::archive::{ArchiveError, CONFIG_FILE};
use crate::model::config::ArchiveConfig;

/// Read docket.toml from the archive root. A missing file is not an error;
/// it means full defaults.
pub fn load_config(root: &Path) -> Result<ArchiveConfig, ArchiveError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ArchiveConfig::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| ArchiveError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: ArchiveConfig = toml::from_str(&config_text)?;
    Ok(config)
}
