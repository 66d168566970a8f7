use std::io::{self, Write};

use super::geometry::{resolve_geometry, Extent, Geometry, GeometryField};
use super::names::{resolve_names, Names};
use crate::codec::symbols::{symbol_for, Facing, MISSING_CELL_SYMBOL, OUT_OF_RANGE_SYMBOL};
use crate::codec::MapDocument;
use crate::sidecar::NameResolver;

pub const DIVIDER: &str = "=-=-=-=-============================================-=-=-=-=";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FacingStyle {
    /// `N n E e S s W w`
    #[default]
    Letters,
    /// `↑ ↗ → ↘ ↓ ↙ ← ↖`
    Arrows,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub facing_style: FacingStyle,
}

/// The text rendering of one map, as lines without terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    pub fn build(doc: &MapDocument, resolver: &dyn NameResolver, options: RenderOptions) -> Self {
        let geometry = resolve_geometry(doc, resolver);
        let names = resolve_names(doc, resolver);
        Self::from_parts(doc, &geometry, &names, options)
    }

    pub fn from_parts(doc: &MapDocument, geometry: &Geometry, names: &Names, options: RenderOptions) -> Self {
        let mut report = Self::default();
        let extent = geometry.extent(covered_cells(doc));

        report.divider();
        report.header(doc, geometry);
        report.divider();

        report.legend(&doc.tile_type_table, &names.tile_types, None);
        report.divider();
        report.ruler(&extent);
        report.grid(&extent, |i| cell_symbol(&doc.tile_types, i));
        report.divider();

        report.legend(&doc.exit_point_table, &names.exit_points, Some("No Exit Point"));
        report.divider();
        report.ruler(&extent);
        report.grid(&extent, |i| cell_symbol(&doc.exit_points, i));
        report.divider();

        report.legend(&doc.starting_position_table, &names.starting_positions, Some("No Starting Position"));
        report.divider();
        report.ruler(&extent);
        report.grid(&extent, |i| cell_symbol(&doc.starting_positions, i));
        report.divider();

        report.grid(&extent, |i| facing_symbol(doc, i, options.facing_style));
        report.divider();

        report
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn divider(&mut self) {
        self.lines.push(DIVIDER.to_string());
    }

    fn header(&mut self, doc: &MapDocument, geometry: &Geometry) {
        if doc.is_recognized_version() {
            self.lines.push(format!("Version = {}", doc.version));
        } else {
            self.lines.push(format!("Version = {} (unrecognized)", doc.version));
        }

        // only version 1 files can carry inferred geometry
        let marked = doc.version <= 1;
        let field = |name: &str, value: GeometryField| {
            let marker = if marked && !value.confirmed { "?" } else { "" };
            format!("{name} = {}{marker}", value.value)
        };
        self.lines.push(field("Width", geometry.width));
        self.lines.push(field("Height", geometry.height));
        self.lines.push(field("OffsetLeft", geometry.offset_left));
        self.lines.push(field("OffsetBottom", geometry.offset_bottom));
    }

    /// `{symbol} = {uid} = {name}`, or `{symbol} = {uid}` past the end of `names`.
    /// `slot_zero` replaces the whole entry for index 0.
    fn legend(&mut self, table: &[Option<String>], names: &[String], slot_zero: Option<&str>) {
        for (n, uid) in table.iter().enumerate() {
            let symbol = symbol_for(n);
            let uid = uid.as_deref().unwrap_or_default();
            let line = match (n, slot_zero, names.get(n)) {
                (0, Some(label), _) => format!("{symbol} = {label}"),
                (_, _, Some(name)) => format!("{symbol} = {uid} = {name}"),
                (_, _, None) => format!("{symbol} = {uid}"),
            };
            self.lines.push(line);
        }
    }

    fn ruler(&mut self, extent: &Extent) {
        let mut line = String::from("  ");
        line.extend((0..extent.columns).map(|x| digit(x % 10)));
        self.lines.push(line);
    }

    /// Rows from the top down to 0, cells addressed row-major.
    fn grid(&mut self, extent: &Extent, cell: impl Fn(usize) -> char) {
        for y in (0..extent.rows).rev() {
            let mut line = String::with_capacity(extent.columns + 2);
            line.push(digit(y % 10));
            line.push(':');
            line.extend((0..extent.columns).map(|x| cell(y * extent.stride + x)));
            self.lines.push(line);
        }
    }
}

/// Resolve names and geometry, then write the report.
pub fn render(
    doc: &MapDocument,
    resolver: &dyn NameResolver,
    options: RenderOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    Report::build(doc, resolver, options).write_to(out)
}

/// Length of the longest flat array; grid rows past it would be blank.
fn covered_cells(doc: &MapDocument) -> usize {
    [
        doc.tile_types.len(),
        doc.exit_points.len(),
        doc.starting_positions.len(),
        doc.starting_position_facings.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

fn digit(d: usize) -> char {
    char::from_digit(d as u32, 10).unwrap_or('?')
}

fn cell_symbol(cells: &[u8], index: usize) -> char {
    match cells.get(index) {
        Some(&v) => symbol_for(v as usize),
        None => MISSING_CELL_SYMBOL,
    }
}

fn facing_symbol(doc: &MapDocument, index: usize, style: FacingStyle) -> char {
    match doc.starting_positions.get(index) {
        None | Some(0) => ' ',
        Some(_) => match doc.starting_position_facings.get(index).copied() {
            None => MISSING_CELL_SYMBOL,
            Some(v) => match (Facing::from_u8(v), style) {
                (Some(facing), FacingStyle::Letters) => facing.symbol(),
                (Some(facing), FacingStyle::Arrows) => facing.arrow(),
                (None, _) => OUT_OF_RANGE_SYMBOL,
            },
        },
    }
}
