//! Tool configuration (`config.json`).
//!
//! Only used to find the folder holding the tile type definition files. Every
//! failure here degrades to "no tile type folder" with a warning.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "TileTypeFolderPath", default)]
    pub tile_type_folder: Option<PathBuf>,
}

impl Config {
    /// Load from `explicit` if given, otherwise from the first default location that exists.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_locations().into_iter().find(|p| p.is_file()) {
                Some(p) => p,
                None => {
                    tracing::warn!(
                        "Cannot determine names of custom Tile Types because {} does not exist",
                        CONFIG_FILE_NAME
                    );
                    return Self::default();
                }
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Cannot determine names of custom Tile Types because config cannot be read: {}", e);
                return Self::default();
            }
        };
        if text.trim().is_empty() {
            tracing::warn!(path = %path.display(), "Cannot determine names of custom Tile Types because config is empty");
            return Self::default();
        }
        let config: Self = match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Cannot determine names of custom Tile Types because of error while parsing config: {}", e);
                return Self::default();
            }
        };
        if config.tile_type_folder.is_none() {
            tracing::warn!(path = %path.display(), "Cannot determine names of custom Tile Types because config does not have TileTypeFolderPath");
        }
        config
    }

    /// The tile type folder, if configured and present on disk.
    pub fn existing_tile_type_folder(&self) -> Option<&Path> {
        let folder = self.tile_type_folder.as_deref()?;
        if folder.as_os_str().is_empty() || !folder.is_dir() {
            tracing::warn!(folder = %folder.display(), "Cannot determine names of custom Tile Types because folder does not exist");
            return None;
        }
        Some(folder)
    }
}

/// Next to the executable first, then the per-user config directory.
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        locations.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("area-map-tiles-textconv").join(CONFIG_FILE_NAME));
    }
    locations
}
