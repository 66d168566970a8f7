//! AreaMapTiles text conversion
//!
//! Decodes binary AreaMapTiles map files and renders them as plain text,
//! so that two versions of a map can be compared with a line-based diff.

pub mod codec;
pub mod config;
pub mod convert;
pub mod diff;
pub mod error;
pub mod renderer;
pub mod sidecar;

pub use error::{Error, Result};
pub use codec::{MapDocument, Facing, load_file, is_all_null};
pub use config::Config;
pub use convert::Converter;
pub use diff::{DiffRunner, GitDiff};
pub use renderer::{render, FacingStyle, RenderOptions, Report};
pub use sidecar::{NameResolver, NoSidecar, SidecarFiles, TileTypeName};
