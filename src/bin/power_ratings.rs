use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use edit_tools::{compute_scores, parse_houses, parse_races, render_table, write_json_report};

/// Compute power ratings for houses from the edit files.
#[derive(Parser, Debug)]
#[command(name = "power-ratings")]
struct Args {
    /// Path to the house file
    #[arg(default_value = "house.txt")]
    house_file: PathBuf,

    /// Path to the race file
    #[arg(default_value = "race.txt")]
    race_file: PathBuf,

    /// Also write the score table as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Exit without waiting for a keypress
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let houses = parse_houses(&args.house_file)?;
    let races = parse_races(&args.race_file)?;
    info!("Rating {} houses against {} races", houses.len(), races.len());

    let rows = compute_scores(&houses, &races);
    print!("{}", render_table(&rows));

    if let Some(path) = &args.json {
        write_json_report(&rows, path)?;
    }

    if !args.no_pause {
        print!("\nDone - press Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
