/// Axis-aligned bounding box for a terrain region of the tile sheet.
///
/// Terrain pixels are always fully opaque in the output, whatever their
/// color. Corners are kept as signed values so that out-of-bounds input
/// can be reported rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainRect {
    /// Lower corner, inclusive.
    pub lx: i64,
    pub ly: i64,
    /// Upper corner, exclusive.
    pub ux: i64,
    pub uy: i64,
}

impl TerrainRect {
    /// Whether a pixel position falls inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        x >= self.lx && x < self.ux && y >= self.ly && y < self.uy
    }
}

/// How the transparent reference color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparentSpec {
    /// An explicit RGB triple.
    Rgb([u8; 3]),
    /// Sample the pixel at this position in the source image.
    Sample { x: i64, y: i64 },
}
