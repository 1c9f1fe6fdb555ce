use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use edit_tools::{collect_ability_users, parse_ability_defs, write_annotated};

/// Annotate the ability listing with the houses using each ability.
#[derive(Parser, Debug)]
#[command(name = "align-abilities")]
struct Args {
    /// Path to the house file
    #[arg(default_value = "house.txt")]
    house_file: PathBuf,

    /// Path to the commented ability-definitions file
    #[arg(default_value = "actual_abilities_commented.txt")]
    ability_file: PathBuf,

    /// Path for the annotated output listing
    #[arg(default_value = "actual_abilities_with_heroes_final.txt")]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let users = collect_ability_users(&args.house_file)?;
    let defs = parse_ability_defs(&args.ability_file)?;
    write_annotated(&defs, &users, &args.output_file)?;

    info!("Annotated {} abilities into {}", defs.len(), args.output_file.display());
    Ok(())
}
