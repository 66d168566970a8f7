use crate::codec::MapDocument;
use crate::sidecar::NameResolver;

/// Width the fallback search starts from.
pub const FALLBACK_START_WIDTH: usize = 50;

/// One geometry value and whether it came from an authoritative source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryField {
    pub value: i32,
    pub confirmed: bool,
}

impl GeometryField {
    fn confirmed(value: i32) -> Self {
        Self { value, confirmed: true }
    }

    fn from_option(value: Option<i32>, otherwise: i32) -> Self {
        match value {
            Some(v) => Self::confirmed(v),
            None => Self { value: otherwise, confirmed: false },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub width: GeometryField,
    pub height: GeometryField,
    pub offset_left: GeometryField,
    pub offset_bottom: GeometryField,
}

impl Geometry {
    /// Width usable for addressing (never negative).
    pub fn columns(&self) -> usize {
        self.width.value.max(0) as usize
    }

    pub fn rows(&self) -> usize {
        self.height.value.max(0) as usize
    }

    /// The part of the grid worth drawing when the flat arrays hold `cells` entries.
    ///
    /// Rows above the last one that addresses a cell are left out, and a single
    /// row is cut down to the cells it can reach. Header values are unaffected.
    pub fn extent(&self, cells: usize) -> Extent {
        let stride = self.columns();
        let rows = match stride {
            0 => cells,
            w => cells.div_ceil(w),
        };
        Extent {
            stride,
            columns: stride.min(cells.max(FALLBACK_START_WIDTH)),
            rows: rows.min(self.rows()),
        }
    }
}

/// Drawn area of a grid. `stride` is the row length used for addressing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub stride: usize,
    pub columns: usize,
    pub rows: usize,
}

/// Work out the grid dimensions.
///
/// The file's own geometry wins when both dimensions are positive. Otherwise the
/// sidecar is asked, and if either dimension is still missing both are inferred
/// from the tile count. Confirmation flags record where each value came from.
pub fn resolve_geometry(doc: &MapDocument, resolver: &dyn NameResolver) -> Geometry {
    if doc.width > 0 && doc.height > 0 {
        return Geometry {
            width: GeometryField::confirmed(doc.width),
            height: GeometryField::confirmed(doc.height),
            offset_left: GeometryField::confirmed(doc.offset_left),
            offset_bottom: GeometryField::confirmed(doc.offset_bottom),
        };
    }

    let grid = resolver.grid_geometry().unwrap_or_default();
    let mut geometry = Geometry {
        width: GeometryField::from_option(grid.width, 0),
        height: GeometryField::from_option(grid.height, 0),
        offset_left: GeometryField::from_option(grid.offset_left, doc.offset_left),
        offset_bottom: GeometryField::from_option(grid.offset_bottom, doc.offset_bottom),
    };

    if !geometry.width.confirmed || !geometry.height.confirmed {
        let len = doc.tile_types.len();
        let width = fallback_width(len);
        let height = len / width;
        tracing::debug!(len, width, height, "inferring grid size from tile count");
        geometry.width.value = saturating_i32(width);
        geometry.height.value = saturating_i32(height);
    }
    geometry
}

/// Find a width that divides `len` evenly, searching outward from 50.
///
/// Counts of 50 or more search upward, smaller counts search downward (ending
/// at 1 at the latest). An empty map keeps the starting width.
pub fn fallback_width(len: usize) -> usize {
    let mut width = FALLBACK_START_WIDTH;
    if len >= FALLBACK_START_WIDTH {
        while len % width != 0 {
            width += 1;
        }
    } else {
        while len % width != 0 {
            width -= 1;
        }
    }
    width
}

fn saturating_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidecar::{ExitPointDescriptor, GridGeometry, NoSidecar, StartingPositionDescriptor, TileTypeName};

    struct GridOnly(GridGeometry);

    impl NameResolver for GridOnly {
        fn resolve_tile_type_name(&self, _uid: &str) -> TileTypeName {
            TileTypeName::Unknown
        }
        fn grid_geometry(&self) -> Option<GridGeometry> {
            Some(self.0)
        }
        fn exit_point_descriptors(&self) -> Option<Vec<ExitPointDescriptor>> {
            None
        }
        fn starting_position_descriptors(&self) -> Option<Vec<StartingPositionDescriptor>> {
            None
        }
    }

    fn doc_with_tiles(len: usize) -> MapDocument {
        MapDocument { version: 1, tile_types: vec![0; len], ..Default::default() }
    }

    #[test]
    fn test_fallback_width_search() {
        assert_eq!(fallback_width(17), 17);
        assert_eq!(fallback_width(100), 50);
        assert_eq!(fallback_width(50), 50);
        assert_eq!(fallback_width(4), 4);
        assert_eq!(fallback_width(53), 53);
        assert_eq!(fallback_width(120), 60);
        assert_eq!(fallback_width(49), 49);
        assert_eq!(fallback_width(48), 48);
        assert_eq!(fallback_width(0), 50);
    }

    #[test]
    fn test_file_geometry_wins() {
        let doc = MapDocument {
            version: 2,
            width: 3,
            height: 2,
            offset_left: 4,
            tile_types: vec![0; 6],
            ..Default::default()
        };
        let sidecar = GridOnly(GridGeometry { width: Some(6), height: Some(1), ..Default::default() });

        let geometry = resolve_geometry(&doc, &sidecar);
        assert_eq!(geometry.width, GeometryField::confirmed(3));
        assert_eq!(geometry.height, GeometryField::confirmed(2));
        assert_eq!(geometry.offset_left.value, 4);
    }

    #[test]
    fn test_sidecar_geometry() {
        let sidecar = GridOnly(GridGeometry {
            width: Some(2),
            height: Some(3),
            offset_left: Some(-1),
            offset_bottom: None,
        });

        let geometry = resolve_geometry(&doc_with_tiles(6), &sidecar);
        assert_eq!(geometry.width, GeometryField::confirmed(2));
        assert_eq!(geometry.height, GeometryField::confirmed(3));
        assert_eq!(geometry.offset_left, GeometryField::confirmed(-1));
        assert!(!geometry.offset_bottom.confirmed);
    }

    #[test]
    fn test_partial_sidecar_falls_back_for_both() {
        let sidecar = GridOnly(GridGeometry { width: Some(2), ..Default::default() });

        let geometry = resolve_geometry(&doc_with_tiles(17), &sidecar);
        assert_eq!(geometry.width.value, 17);
        assert_eq!(geometry.height.value, 1);
        assert!(geometry.width.confirmed);
        assert!(!geometry.height.confirmed);
    }

    #[test]
    fn test_no_sidecar_infers_everything() {
        let geometry = resolve_geometry(&doc_with_tiles(100), &NoSidecar);
        assert_eq!((geometry.width.value, geometry.height.value), (50, 2));
        assert!(!geometry.width.confirmed);
        assert!(!geometry.height.confirmed);
        assert!(!geometry.offset_left.confirmed);
        assert!(!geometry.offset_bottom.confirmed);

        let empty = resolve_geometry(&doc_with_tiles(0), &NoSidecar);
        assert_eq!((empty.columns(), empty.rows()), (50, 0));
    }

    #[test]
    fn test_extent_stops_at_covered_cells() {
        let declared = |width, height| Geometry {
            width: GeometryField::confirmed(width),
            height: GeometryField::confirmed(height),
            ..Default::default()
        };

        let full = declared(3, 2).extent(6);
        assert_eq!(full, Extent { stride: 3, columns: 3, rows: 2 });

        let partial = declared(3, 10).extent(7);
        assert_eq!(partial, Extent { stride: 3, columns: 3, rows: 3 });

        let huge = declared(100_000, 100_000).extent(4);
        assert_eq!(huge, Extent { stride: 100_000, columns: 50, rows: 1 });

        let no_cells = declared(i32::MAX, i32::MAX).extent(0);
        assert_eq!(no_cells.rows, 0);

        let zero_width = declared(0, 1_000_000).extent(5);
        assert_eq!((zero_width.columns, zero_width.rows), (0, 5));
    }
}
