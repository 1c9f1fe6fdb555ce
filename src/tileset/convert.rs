use std::path::Path;

use anyhow::{Context, Result, bail};
use image::{Rgba, RgbaImage, RgbImage};
use log::{debug, info};

use super::types::{TerrainRect, TransparentSpec};

/// Group a flat coordinate list into terrain rectangles.
///
/// Rectangles arrive as `lx ly ux uy` quadruples; anything else is
/// rejected. Bounds checking against the image happens separately in
/// [`validate_rects`].
pub fn parse_terrain_rects(values: &[i64]) -> Result<Vec<TerrainRect>> {
    if values.len() % 4 != 0 {
        bail!("Need four values for each bounding box");
    }
    Ok(values
        .chunks_exact(4)
        .map(|quad| TerrainRect { lx: quad[0], ly: quad[1], ux: quad[2], uy: quad[3] })
        .collect())
}

/// Check every rectangle for corner ordering and image bounds.
pub fn validate_rects(rects: &[TerrainRect], width: u32, height: u32) -> Result<()> {
    for rect in rects {
        if rect.lx > rect.ux || rect.ly > rect.uy {
            bail!("Lower bounding box coordinate exceeds the upper one: {:?}", rect);
        }
        if rect.lx < 0
            || rect.ux > i64::from(width)
            || rect.ly < 0
            || rect.uy > i64::from(height)
        {
            bail!("Bounding box outside of image bounds: {:?}", rect);
        }
    }
    Ok(())
}

/// Resolve the transparent reference color against the source image.
///
/// An explicit RGB triple passes through; a sample position is bounds
/// checked and then read from the image.
pub fn resolve_transparent(img: &RgbImage, spec: &TransparentSpec) -> Result<[u8; 3]> {
    match *spec {
        TransparentSpec::Rgb(rgb) => Ok(rgb),
        TransparentSpec::Sample { x, y } => {
            if x < 0 || x >= i64::from(img.width()) || y < 0 || y >= i64::from(img.height()) {
                bail!("Coordinates for transparent pixel are out of bounds: ({}, {})", x, y);
            }
            Ok(img.get_pixel(x as u32, y as u32).0)
        }
    }
}

/// Build the RGBA output: RGB copied from the source, alpha 0 exactly for
/// non-terrain pixels matching the transparent color.
pub fn derive_alpha(img: &RgbImage, rects: &[TerrainRect], transparent: [u8; 3]) -> RgbaImage {
    let mut out = RgbaImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let terrain = rects.iter().any(|rect| rect.contains(x, y));
        let alpha = if !terrain && pixel.0 == transparent { 0 } else { 255 };
        out.put_pixel(x, y, Rgba([pixel.0[0], pixel.0[1], pixel.0[2], alpha]));
    }
    out
}

/// Run the whole conversion: load, validate, transform, save.
///
/// All validation happens before any output is written; once it passes,
/// the pixel transform itself cannot fail.
pub fn convert_tileset(
    input: &Path,
    output: &Path,
    spec: &TransparentSpec,
    terrain: &[i64],
) -> Result<()> {
    let img = image::open(input)
        .with_context(|| format!("Failed to open tile sheet: {}", input.display()))?
        .to_rgb8();
    debug!("Loaded {}x{} tile sheet from {}", img.width(), img.height(), input.display());

    let rects = parse_terrain_rects(terrain)?;
    validate_rects(&rects, img.width(), img.height())?;
    let transparent = resolve_transparent(&img, spec)?;
    debug!("Transparent color: {:?}, {} terrain boxes", transparent, rects.len());

    let out = derive_alpha(&img, &rects, transparent);
    out.save(output)
        .with_context(|| format!("Failed to save converted tile sheet: {}", output.display()))?;

    info!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}
