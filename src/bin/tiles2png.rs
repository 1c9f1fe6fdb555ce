use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use edit_tools::{TransparentSpec, convert_tileset};

/// Convert a BMP tile sheet to a PNG with a derived alpha channel.
///
/// Non-terrain pixels matching the transparent color become fully
/// transparent; everything inside a terrain bounding box stays opaque.
#[derive(Parser, Debug)]
#[command(name = "tiles2png")]
struct Args {
    /// Path to the input tile sheet
    input_file: PathBuf,

    /// Path for the converted tile sheet
    output_file: PathBuf,

    /// Position to be read for the transparent color
    #[arg(
        long,
        num_args = 2,
        value_names = ["HCOORD", "VCOORD"],
        default_values_t = [0i64, 0],
        allow_negative_numbers = true
    )]
    tcoord: Vec<i64>,

    /// Bounding box coordinates for terrain tiles, lx ly ux uy per box
    #[arg(
        long,
        num_args = 1..,
        default_values_t = [0i64, 0, 496, 16, 192, 192, 224, 208],
        allow_negative_numbers = true
    )]
    terrain: Vec<i64>,

    /// RGB value to be treated as transparent, overrides --tcoord
    #[arg(long, num_args = 3, value_names = ["RED", "GREEN", "BLUE"])]
    transparent: Option<Vec<u8>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spec = match &args.transparent {
        Some(rgb) => TransparentSpec::Rgb([rgb[0], rgb[1], rgb[2]]),
        None => TransparentSpec::Sample { x: args.tcoord[0], y: args.tcoord[1] },
    };

    convert_tileset(&args.input_file, &args.output_file, &spec, &args.terrain)
}
