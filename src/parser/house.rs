use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::debug;

use super::is_ignored_line;
use super::types::{House, StatBlock};

/// Parse a house file into a list of house records.
///
/// Each record starts at an `N:<id>:<name>` line; `S:`, `F:`, `U:` and `C:`
/// lines contribute to the record opened by the most recent `N:`. A record
/// is committed at the next `N:` line or at end of input, and records with
/// identifier 0 are placeholders that get dropped at commit.
pub fn parse_houses(path: &Path) -> Result<Vec<House>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read house file: {}", path.display()))?;

    let houses = parse_house_records(&content)
        .with_context(|| format!("Failed to parse house file: {}", path.display()))?;

    debug!("Parsed {} houses from {}", houses.len(), path.display());
    Ok(houses)
}

fn parse_house_records(content: &str) -> Result<Vec<House>> {
    let mut houses = Vec::new();
    let mut current: Option<House> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if is_ignored_line(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("N:") {
            commit_house(&mut houses, current.take());
            let (num, name) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("Malformed record header: {}", line))?;
            let num = num
                .parse()
                .with_context(|| format!("Invalid house identifier: {}", line))?;
            current = Some(House::new(num, name.trim().to_string()));
        } else if let Some(house) = current.as_mut() {
            if let Some(rest) = line.strip_prefix("S:") {
                house.stats = parse_stat_block(rest)
                    .with_context(|| format!("Invalid stat line: {}", line))?;
            } else if let Some(rest) = line.strip_prefix("F:") {
                house.flags = split_flag_list(rest);
            } else if let Some(rest) = line.strip_prefix("U:") {
                house.uniques = split_flag_list(rest);
            } else if let Some(rest) = line.strip_prefix("C:") {
                house.abilities.extend(ability_pairs(rest));
            }
        }
    }

    commit_house(&mut houses, current.take());
    Ok(houses)
}

fn commit_house(houses: &mut Vec<House>, house: Option<House>) {
    if let Some(house) = house {
        if house.num != 0 {
            houses.push(house);
        } else {
            debug!("Dropping placeholder house record: {}", house.name);
        }
    }
}

/// Parse the remainder of an `S:` line into a stat block.
///
/// Exactly four integer fields are required; any fields beyond the fourth
/// are ignored.
pub(crate) fn parse_stat_block(rest: &str) -> Result<StatBlock> {
    let mut stats = [0i32; 4];
    let mut fields = rest.split(':');
    for (i, slot) in stats.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| anyhow!("Stat line has {} of 4 required values", i))?;
        *slot = field
            .trim()
            .parse()
            .with_context(|| format!("Invalid stat value: {:?}", field.trim()))?;
    }
    Ok(stats)
}

/// Split a pipe-separated `F:` or `U:` list into trimmed, non-empty tokens.
pub(crate) fn split_flag_list(rest: &str) -> Vec<String> {
    rest.split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Decode the remainder of a house `C:` line as `(code, value)` pairs.
///
/// Anything after a `#` is a comment and is dropped, the rest is split on
/// `:` and consumed pairwise. A trailing unpaired entry is discarded.
///
/// The annotator reads the same lines as positional coordinate pairs
/// instead; see [`crate::annotate::ability_coords`]. The two readings are
/// intentionally separate functions.
fn ability_pairs(rest: &str) -> Vec<(String, String)> {
    let content = rest.split('#').next().unwrap_or("").trim();
    let parts: Vec<&str> = content.split(':').collect();

    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 1 < parts.len() {
        pairs.push((parts[i].trim().to_string(), parts[i + 1].trim().to_string()));
        i += 2;
    }
    pairs
}
