pub mod reader;
pub mod writer;
pub mod symbols;
pub mod area_map;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;
pub use symbols::{Facing, TILE_SYMBOLS, symbol_for, index_of_symbol};
pub use area_map::{MapDocument, FILE_ID, LAST_KNOWN_HIGHEST_VERSION, is_all_null, load_file};
