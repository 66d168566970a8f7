use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    AreaMapInfo, ExitPointDescriptor, GridGeometry, NameResolver, StartingPositionDescriptor,
    TileTypeName,
};
use crate::config::Config;

/// Resolver backed by the tile type folder and an `*.AreaMap.txt` sidecar.
#[derive(Debug, Clone, Default)]
pub struct SidecarFiles {
    tile_type_folder: Option<PathBuf>,
    area_map: Option<AreaMapInfo>,
}

impl SidecarFiles {
    pub fn new(tile_type_folder: Option<PathBuf>, area_map: Option<AreaMapInfo>) -> Self {
        Self { tile_type_folder, area_map }
    }

    /// Build from the tool config and an optional sidecar path.
    pub fn load(config: &Config, area_map_path: Option<&Path>) -> Self {
        let tile_type_folder = config.existing_tile_type_folder().map(Path::to_path_buf);
        let area_map = area_map_path.filter(|p| p.is_file()).and_then(AreaMapInfo::load);
        if area_map.is_none() {
            tracing::debug!("no AreaMap sidecar, exit point and starting position names unavailable");
        }
        Self { tile_type_folder, area_map }
    }
}

impl NameResolver for SidecarFiles {
    fn resolve_tile_type_name(&self, uid: &str) -> TileTypeName {
        let Some(folder) = &self.tile_type_folder else {
            return TileTypeName::Unknown;
        };
        let path = folder.join(format!("{uid}.txt"));
        if !path.is_file() {
            return TileTypeName::FileNotFound;
        }
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read tile type file: {}", e);
                return TileTypeName::ErrorParsing;
            }
        };
        tile_type_name_from_text(&text)
    }

    fn grid_geometry(&self) -> Option<GridGeometry> {
        self.area_map.as_ref()?.grid
    }

    fn exit_point_descriptors(&self) -> Option<Vec<ExitPointDescriptor>> {
        self.area_map.as_ref()?.exit_points.clone()
    }

    fn starting_position_descriptors(&self) -> Option<Vec<StartingPositionDescriptor>> {
        self.area_map.as_ref()?.starting_positions.clone()
    }
}

/// Classify the contents of a tile type definition file.
pub fn tile_type_name_from_text(text: &str) -> TileTypeName {
    if text.trim().is_empty() {
        return TileTypeName::FileEmpty;
    }
    let tile_type: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return TileTypeName::ErrorParsing,
    };
    match tile_type.get("DisplayName") {
        None | Some(Value::Null) => TileTypeName::NoDisplayName,
        Some(Value::String(s)) if s.trim().is_empty() => TileTypeName::Null,
        Some(Value::String(s)) => TileTypeName::Named(s.clone()),
        Some(other) => TileTypeName::Named(other.to_string()),
    }
}
