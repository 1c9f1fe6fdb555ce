use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::is_ignored_line;
use super::types::Race;
use super::{parse_stat_block, split_flag_list};

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Parse a race file into a list of race records.
///
/// The tag set matches the house file minus `U:`; `C:` lines are free-form
/// text from which every digit run is taken as a member house identifier.
/// Unlike houses, every race record is committed, placeholder or not.
pub fn parse_races(path: &Path) -> Result<Vec<Race>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read race file: {}", path.display()))?;

    let races = parse_race_records(&content)
        .with_context(|| format!("Failed to parse race file: {}", path.display()))?;

    debug!("Parsed {} races from {}", races.len(), path.display());
    Ok(races)
}

fn parse_race_records(content: &str) -> Result<Vec<Race>> {
    let mut races = Vec::new();
    let mut current: Option<Race> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if is_ignored_line(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("N:") {
            if let Some(race) = current.take() {
                races.push(race);
            }
            let (num, name) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("Malformed record header: {}", line))?;
            let num = num
                .parse()
                .with_context(|| format!("Invalid race identifier: {}", line))?;
            current = Some(Race::new(num, name.trim().to_string()));
        } else if let Some(race) = current.as_mut() {
            if let Some(rest) = line.strip_prefix("S:") {
                race.stats = parse_stat_block(rest)
                    .with_context(|| format!("Invalid stat line: {}", line))?;
            } else if let Some(rest) = line.strip_prefix("F:") {
                race.flags = split_flag_list(rest);
            } else if line.starts_with("C:") {
                race.members = member_ids(line)?;
            }
        }
    }

    if let Some(race) = current.take() {
        races.push(race);
    }
    Ok(races)
}

/// Extract every digit run on a membership line as a house identifier.
fn member_ids(line: &str) -> Result<Vec<i32>> {
    DIGIT_RUNS
        .find_iter(line)
        .map(|m| {
            m.as_str()
                .parse()
                .with_context(|| format!("Member identifier out of range: {}", m.as_str()))
        })
        .collect()
}
