//! Tile-sheet conversion: BMP in, PNG with a derived alpha channel out.


mod convert;
mod types;

pub use convert::{convert_tileset, derive_alpha, parse_terrain_rects, resolve_transparent};
pub use types::{TerrainRect, TransparentSpec};
