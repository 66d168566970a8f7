//! Name resolution for table UIDs, backed by sidecar files next to the map.
//!
//! The renderer only talks to [`NameResolver`]; nothing in here can fail a
//! render. Missing or broken sidecar data shows up as placeholder names.

pub mod area_map_info;
pub mod files;

use std::fmt;

pub use area_map_info::{AreaMapInfo, sidecar_path_for};
pub use files::SidecarFiles;

/// Result of looking up the display name of a tile type UID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileTypeName {
    Named(String),
    FileNotFound,
    FileEmpty,
    NoDisplayName,
    /// `DisplayName` present but blank
    Null,
    ErrorParsing,
    /// No tile type folder configured
    Unknown,
}

impl fmt::Display for TileTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::FileNotFound => f.write_str("File not found"),
            Self::FileEmpty => f.write_str("File empty"),
            Self::NoDisplayName => f.write_str("Tile has no DisplayName property"),
            Self::Null => f.write_str("Null"),
            Self::ErrorParsing => f.write_str("Error parsing"),
            Self::Unknown => f.write_str("Unknown Name"),
        }
    }
}

/// Grid geometry from the sidecar. Each field is set only if it parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridGeometry {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub offset_left: Option<i32>,
    pub offset_bottom: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitPointDescriptor {
    pub uid: Option<String>,
    pub in_game_label: Option<String>,
    pub editor_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartingPositionDescriptor {
    pub uid: Option<String>,
    pub name: Option<String>,
}

pub trait NameResolver {
    fn resolve_tile_type_name(&self, uid: &str) -> TileTypeName;

    fn grid_geometry(&self) -> Option<GridGeometry>;

    /// `None` when the sidecar has no exit point list at all.
    fn exit_point_descriptors(&self) -> Option<Vec<ExitPointDescriptor>>;

    fn starting_position_descriptors(&self) -> Option<Vec<StartingPositionDescriptor>>;
}

/// Resolver used when no sidecar data is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSidecar;

impl NameResolver for NoSidecar {
    fn resolve_tile_type_name(&self, _uid: &str) -> TileTypeName {
        TileTypeName::Unknown
    }

    fn grid_geometry(&self) -> Option<GridGeometry> {
        None
    }

    fn exit_point_descriptors(&self) -> Option<Vec<ExitPointDescriptor>> {
        None
    }

    fn starting_position_descriptors(&self) -> Option<Vec<StartingPositionDescriptor>> {
        None
    }
}
