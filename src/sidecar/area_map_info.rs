use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{ExitPointDescriptor, GridGeometry, StartingPositionDescriptor};

/// The parts of an `*.AreaMap.txt` sidecar that the report uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaMapInfo {
    pub grid: Option<GridGeometry>,
    pub exit_points: Option<Vec<ExitPointDescriptor>>,
    pub starting_positions: Option<Vec<StartingPositionDescriptor>>,
}

impl AreaMapInfo {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&root))
    }

    pub fn from_value(root: &Value) -> Self {
        let grid = root.get("Grid").filter(|v| !v.is_null()).map(|grid| GridGeometry {
            width: grid.get("Width").and_then(json_int),
            height: grid.get("Height").and_then(json_int),
            offset_left: grid.get("LeftEdge").and_then(json_int),
            offset_bottom: grid.get("BottomEdge").and_then(json_int),
        });

        let exit_points = json_list(root, "ExitPoints").map(|items| {
            items
                .iter()
                .map(|item| ExitPointDescriptor {
                    uid: item.get("UniqueID").and_then(json_text),
                    in_game_label: item.get("InGameLabel").and_then(json_text),
                    editor_name: item.get("EditorName").and_then(json_text),
                })
                .collect()
        });

        let starting_positions = json_list(root, "StartingPositions").map(|items| {
            items
                .iter()
                .map(|item| StartingPositionDescriptor {
                    uid: item.get("UniqueID").and_then(json_text),
                    name: item.get("Name").and_then(json_text),
                })
                .collect()
        });

        Self { grid, exit_points, starting_positions }
    }

    /// Read and parse a sidecar. Unreadable or malformed files count as absent.
    pub fn load(path: &Path) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read AreaMap sidecar: {}", e);
                return None;
            }
        };
        match Self::parse(&text) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot parse AreaMap sidecar: {}", e);
                None
            }
        }
    }
}

/// `MyMap1.AreaMapTiles.bytes` -> `MyMap1.AreaMap.txt` in the same folder.
/// `None` when the map path has no folder component or does not follow the naming.
pub fn sidecar_path_for(map_path: &Path) -> Option<PathBuf> {
    let folder = map_path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let file_name = map_path.file_name()?.to_string_lossy();
    if !file_name.contains("Tiles.bytes") {
        return None;
    }
    Some(folder.join(file_name.replace("Tiles.bytes", ".txt")))
}

fn json_list<'a>(root: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    match root.get(key)? {
        Value::Array(items) => Some(items),
        Value::Null => None,
        other => {
            tracing::warn!(key, "expected a list in AreaMap sidecar, got {}", other);
            None
        }
    }
}

/// Strings as-is, other scalars in their JSON text form, null as absent.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Integers given either as JSON numbers or as numeric strings.
fn json_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
