use crate::codec::MapDocument;
use crate::sidecar::{ExitPointDescriptor, NameResolver, StartingPositionDescriptor};

pub const DEFAULT_WALKABLE_TILE_TYPE_UID: &str = "COFFEEWALK8899.AreaMapTile";
pub const DEFAULT_WALL_TILE_TYPE_UID: &str = "DEADBEEFIN6969.AreaMapTile";

pub const DEFAULT_WALKABLE_TILE_TYPE_NAME: &str = "Default Walkable Tile";
pub const DEFAULT_WALL_TILE_TYPE_NAME: &str = "Default Wall Tile";

/// Display names per table slot.
///
/// A list can be shorter than its table (empty when no descriptors were
/// available); slots past its end are shown by UID only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names {
    pub tile_types: Vec<String>,
    pub exit_points: Vec<String>,
    pub starting_positions: Vec<String>,
}

pub fn resolve_names(doc: &MapDocument, resolver: &dyn NameResolver) -> Names {
    Names {
        tile_types: tile_type_names(&doc.tile_type_table, resolver),
        exit_points: resolver
            .exit_point_descriptors()
            .map(|descriptors| exit_point_names(&doc.exit_point_table, &descriptors))
            .unwrap_or_default(),
        starting_positions: resolver
            .starting_position_descriptors()
            .map(|descriptors| starting_position_names(&doc.starting_position_table, &descriptors))
            .unwrap_or_default(),
    }
}

pub fn tile_type_names(table: &[Option<String>], resolver: &dyn NameResolver) -> Vec<String> {
    table
        .iter()
        .map(|uid| match uid.as_deref() {
            Some(DEFAULT_WALKABLE_TILE_TYPE_UID) => DEFAULT_WALKABLE_TILE_TYPE_NAME.to_string(),
            Some(DEFAULT_WALL_TILE_TYPE_UID) => DEFAULT_WALL_TILE_TYPE_NAME.to_string(),
            other => resolver.resolve_tile_type_name(other.unwrap_or_default()).to_string(),
        })
        .collect()
}

/// One name per table slot; slots with no matching descriptor get an empty name.
pub fn exit_point_names(table: &[Option<String>], descriptors: &[ExitPointDescriptor]) -> Vec<String> {
    table
        .iter()
        .map(|uid| match find_numbered(uid, descriptors, |d| d.uid.as_deref()) {
            Some((number, exit_point)) => {
                let label = non_blank(&exit_point.in_game_label);
                let editor_name = non_blank(&exit_point.editor_name);
                match (label, editor_name) {
                    (Some(label), Some(editor_name)) => {
                        format!("Exit Point {number}: {label} ({editor_name})")
                    }
                    (Some(one), None) | (None, Some(one)) => format!("Exit Point {number}: {one}"),
                    (None, None) => format!("Exit Point {number}"),
                }
            }
            None => String::new(),
        })
        .collect()
}

pub fn starting_position_names(
    table: &[Option<String>],
    descriptors: &[StartingPositionDescriptor],
) -> Vec<String> {
    table
        .iter()
        .map(|uid| match find_numbered(uid, descriptors, |d| d.uid.as_deref()) {
            Some((number, start)) => match non_blank(&start.name) {
                Some(name) => format!("Starting Position {number}: {name}"),
                None => format!("Starting Position {number}"),
            },
            None => String::new(),
        })
        .collect()
}

/// First descriptor whose UID equals `uid`, with its 1-based position in the list.
fn find_numbered<'d, T>(
    uid: &Option<String>,
    descriptors: &'d [T],
    uid_of: impl Fn(&T) -> Option<&str>,
) -> Option<(usize, &'d T)> {
    let uid = uid.as_deref()?;
    descriptors
        .iter()
        .enumerate()
        .find(|(_, d)| uid_of(d) == Some(uid))
        .map(|(i, d)| (i + 1, d))
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidecar::{NoSidecar, SidecarFiles};

    fn uid(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn exit(uid_: &str, label: &str, editor: &str) -> ExitPointDescriptor {
        ExitPointDescriptor {
            uid: uid(uid_),
            in_game_label: uid(label),
            editor_name: uid(editor),
        }
    }

    #[test]
    fn test_default_tile_types_skip_resolver() {
        let table = vec![
            uid(DEFAULT_WALKABLE_TILE_TYPE_UID),
            uid(DEFAULT_WALL_TILE_TYPE_UID),
            uid("LAVA.AreaMapTile"),
            None,
        ];
        let names = tile_type_names(&table, &NoSidecar);
        assert_eq!(names, vec!["Default Walkable Tile", "Default Wall Tile", "Unknown Name", "Unknown Name"]);
    }

    #[test]
    fn test_custom_tile_type_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EMPTY.txt"), "").unwrap();
        std::fs::write(dir.path().join("BAD.txt"), "{").unwrap();

        let resolver = SidecarFiles::new(Some(dir.path().to_path_buf()), None);
        let names = tile_type_names(&[uid("EMPTY"), uid("BAD"), uid("GONE")], &resolver);
        assert_eq!(names, vec!["File empty", "Error parsing", "File not found"]);
    }

    #[test]
    fn test_exit_point_labels() {
        let descriptors = vec![
            exit("A", "Town", "exit_town"),
            exit("B", "Cave", " "),
            exit("C", "", "exit_c"),
            exit("D", "", ""),
        ];
        let table = vec![None, uid("D"), uid("C"), uid("B"), uid("A"), uid("Z")];

        let names = exit_point_names(&table, &descriptors);
        assert_eq!(
            names,
            vec![
                "",
                "Exit Point 4",
                "Exit Point 3: exit_c",
                "Exit Point 2: Cave",
                "Exit Point 1: Town (exit_town)",
                "",
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let descriptors = vec![exit("A", "First", ""), exit("A", "Second", "")];
        let names = exit_point_names(&[None, uid("A")], &descriptors);
        assert_eq!(names[1], "Exit Point 1: First");
    }

    #[test]
    fn test_starting_position_labels() {
        let descriptors = vec![
            StartingPositionDescriptor { uid: uid("S1"), name: None },
            StartingPositionDescriptor { uid: uid("S2"), name: uid("Spawn") },
        ];
        let names = starting_position_names(&[None, uid("S2"), uid("S1")], &descriptors);
        assert_eq!(names, vec!["", "Starting Position 2: Spawn", "Starting Position 1"]);
    }

    #[test]
    fn test_absent_descriptor_lists_leave_names_empty() {
        let doc = MapDocument {
            exit_point_table: vec![None, uid("A")],
            starting_position_table: vec![None, uid("S")],
            ..Default::default()
        };
        let names = resolve_names(&doc, &NoSidecar);
        assert!(names.exit_points.is_empty());
        assert!(names.starting_positions.is_empty());
    }
}
