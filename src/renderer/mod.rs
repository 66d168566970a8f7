//! Text rendering of decoded maps.
//!
//! The output is meant for line-based diffing, so everything here is
//! deterministic: the same document and sidecar data always give the same lines.

pub mod geometry;
pub mod names;
pub mod report;

pub use geometry::{fallback_width, resolve_geometry, Extent, Geometry, GeometryField};
pub use names::{resolve_names, Names};
pub use report::{render, FacingStyle, RenderOptions, Report, DIVIDER};
