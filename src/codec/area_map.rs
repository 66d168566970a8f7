use std::path::Path;

use super::{BinaryReader, BinaryWriter};
use crate::error::{Error, Result};

/// Identifier string every AreaMapTiles file starts with
pub const FILE_ID: &str = "AreaMapTiles";

/// Version 1: initial format.
/// Version 2: adds width, height and the left/bottom offsets after the version.
pub const LAST_KNOWN_HIGHEST_VERSION: i32 = 2;

/// Decoded contents of one AreaMapTiles file.
///
/// Flat arrays are row-major from the bottom-left corner of the map and hold
/// indices into their table. Geometry is zero when the version does not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapDocument {
    pub version: i32,
    pub width: i32,
    pub height: i32,
    /// Where the left edge of the map is, relative to the world origin
    pub offset_left: i32,
    /// Where the bottom edge of the map is, relative to the world origin
    pub offset_bottom: i32,
    pub tile_type_table: Vec<Option<String>>,
    pub tile_types: Vec<u8>,
    pub exit_point_table: Vec<Option<String>>,
    pub exit_points: Vec<u8>,
    pub starting_position_table: Vec<Option<String>>,
    pub starting_positions: Vec<u8>,
    pub starting_position_facings: Vec<u8>,
}

impl MapDocument {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let file_id = reader.read_string()?;
        if file_id != FILE_ID {
            return Err(Error::InvalidFormat { found: file_id });
        }

        let version = reader.read_i32_le()?;
        let (width, height, offset_left, offset_bottom) = if version >= 2 {
            (
                reader.read_i32_le()?,
                reader.read_i32_le()?,
                reader.read_i32_le()?,
                reader.read_i32_le()?,
            )
        } else {
            // version 1 leaves the geometry to the AreaMap sidecar
            (0, 0, 0, 0)
        };
        tracing::debug!(version, width, height, "decoded AreaMapTiles header");

        let tile_type_table = read_uid_table(&mut reader)?;
        let tile_types = reader.read_byte_array()?;
        let exit_point_table = read_uid_table(&mut reader)?;
        let exit_points = reader.read_byte_array()?;
        let starting_position_table = read_uid_table(&mut reader)?;
        let starting_positions = reader.read_byte_array()?;
        let starting_position_facings = reader.read_byte_array()?;

        if !reader.is_empty() {
            tracing::debug!(trailing = reader.remaining(), "ignoring trailing bytes");
        }

        let doc = Self {
            version,
            width,
            height,
            offset_left,
            offset_bottom,
            tile_type_table,
            tile_types,
            exit_point_table,
            exit_points,
            starting_position_table,
            starting_positions,
            starting_position_facings,
        };
        if !doc.is_recognized_version() {
            tracing::warn!(
                version,
                highest_known = LAST_KNOWN_HIGHEST_VERSION,
                "unrecognized AreaMapTiles version"
            );
        }
        Ok(doc)
    }

    /// Encode in the on-disk layout. Absent UIDs are written as empty strings.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(64 + self.tile_types.len() * 3);
        writer.write_string(FILE_ID);
        writer.write_i32_le(self.version);
        if self.version >= 2 {
            writer.write_i32_le(self.width);
            writer.write_i32_le(self.height);
            writer.write_i32_le(self.offset_left);
            writer.write_i32_le(self.offset_bottom);
        }

        write_uid_table(&mut writer, &self.tile_type_table);
        writer.write_byte_array(&self.tile_types);
        write_uid_table(&mut writer, &self.exit_point_table);
        writer.write_byte_array(&self.exit_points);
        write_uid_table(&mut writer, &self.starting_position_table);
        writer.write_byte_array(&self.starting_positions);
        writer.write_byte_array(&self.starting_position_facings);
        writer.into_vec()
    }

    pub fn is_recognized_version(&self) -> bool {
        (1..=LAST_KNOWN_HIGHEST_VERSION).contains(&self.version)
    }
}

fn read_uid_table(reader: &mut BinaryReader) -> Result<Vec<Option<String>>> {
    let len = reader.read_i32_le()?.max(0) as usize;
    // every entry needs at least its length byte
    let mut table = Vec::with_capacity(len.min(reader.remaining()));
    for _ in 0..len {
        let uid = reader.read_string()?;
        table.push(if uid.trim().is_empty() { None } else { Some(uid) });
    }
    Ok(table)
}

fn write_uid_table(writer: &mut BinaryWriter, table: &[Option<String>]) {
    writer.write_i32_le(table.len() as i32);
    for uid in table {
        writer.write_string(uid.as_deref().unwrap_or(""));
    }
}

/// True when there is nothing but zero bytes (or nothing at all).
pub fn is_all_null(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}

/// Read and decode a file, rejecting missing and zero-filled files up front.
pub fn load_file(path: &Path) -> Result<MapDocument> {
    if !path.is_file() {
        return Err(Error::FileNotFound { path: path.to_path_buf() });
    }
    let bytes = std::fs::read(path)?;
    if is_all_null(&bytes) {
        return Err(Error::EmptyFile { path: path.to_path_buf() });
    }
    tracing::debug!(path = %path.display(), size = bytes.len(), "loaded AreaMapTiles file");
    MapDocument::decode(&bytes)
}
