//! Annotated ability listing: which houses use which ability coordinate.
//!
//! This module rereads house `C:` lines as positional `(row, col)`
//! coordinate pairs, a deliberately different decoding from the
//! `(code, value)` pairs the rating tool extracts from the same lines.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::debug;

use crate::parser::AbilityDef;

/// Ability coordinate to the ordered list of house names using it.
pub type AbilityUsers = HashMap<(i32, i32), Vec<String>>;

/// Scan a house file and collect, per ability coordinate, the houses that
/// reference it.
///
/// Only `N:` and `C:` lines matter here; `C:` lines before the first `N:`
/// are skipped. House names are taken verbatim from the `N:` line, with no
/// placeholder filtering.
pub fn collect_ability_users(path: &Path) -> Result<AbilityUsers> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read house file: {}", path.display()))?;

    let mut users = AbilityUsers::new();
    let mut current_house: Option<String> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("N:") {
            let (_, name) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("Malformed record header: {}", line))?;
            current_house = Some(name.to_string());
        } else if line.starts_with("C:") {
            if let Some(house) = &current_house {
                for coord in ability_coords(line)? {
                    users.entry(coord).or_default().push(house.clone());
                }
            }
        }
    }

    debug!("Collected users for {} coordinates from {}", users.len(), path.display());
    Ok(users)
}

/// Decode a house `C:` line as positional `(row, col)` coordinate pairs.
///
/// Colons become separators, only all-digit tokens count, and the numbers
/// pair up in reading order. A trailing unpaired number is discarded.
pub fn ability_coords(line: &str) -> Result<Vec<(i32, i32)>> {
    let spaced = line[2..].replace(':', " ");
    let nums: Vec<i32> = spaced
        .split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .map(|token| {
            token
                .parse()
                .with_context(|| format!("Coordinate out of range: {}", token))
        })
        .collect::<Result<_>>()?;

    Ok(nums.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Write the annotated ability listing.
///
/// One line per known ability, sorted by coordinate: the code field
/// left-justified to 6 columns, the name to 25, then the comma-joined
/// house names. Abilities nobody uses end at the colon.
pub fn write_annotated(
    defs: &BTreeMap<(i32, i32), AbilityDef>,
    users: &AbilityUsers,
    path: &Path,
) -> Result<()> {
    let mut out = String::new();
    for (coord, def) in defs {
        match users.get(coord) {
            Some(houses) if !houses.is_empty() => {
                let _ = writeln!(out, "{:<6}  # {:<25}: {}", def.code, def.name, houses.join(", "));
            }
            _ => {
                let _ = writeln!(out, "{:<6}  # {:<25}:", def.code, def.name);
            }
        }
    }

    fs::write(path, &out)
        .with_context(|| format!("Failed to write annotated listing: {}", path.display()))?;
    debug!("Wrote {} annotated abilities to {}", defs.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn coords_ignore_non_numeric_tokens() -> Result<()> {
        let coords = ability_coords("C:1:2:3:4  # Weaponsmith")?;
        assert_eq!(coords, vec![(1, 2), (3, 4)]);
        Ok(())
    }

    #[test]
    fn trailing_unpaired_number_is_dropped() -> Result<()> {
        let coords = ability_coords("C:1:2:3")?;
        assert_eq!(coords, vec![(1, 2)]);
        Ok(())
    }

    #[test]
    fn mixed_tokens_keep_only_digit_runs() -> Result<()> {
        // Tokens with any non-digit character do not count as coordinates.
        let coords = ability_coords("C:MEL1:1:2:2")?;
        assert_eq!(coords, vec![(1, 2)]);
        Ok(())
    }

    #[test]
    fn collect_users_tracks_current_house() -> Result<()> {
        let dir = tempdir()?;
        let house_path = dir.path().join("house.txt");
        fs::write(
            &house_path,
            "N:1:Feanor\nC:1:1:2:3\nN:2:Fingolfin\nC:1:1\n",
        )?;

        let users = collect_ability_users(&house_path)?;
        assert_eq!(
            users.get(&(1, 1)),
            Some(&vec!["Feanor".to_string(), "Fingolfin".to_string()])
        );
        assert_eq!(users.get(&(2, 3)), Some(&vec!["Feanor".to_string()]));
        assert_eq!(users.get(&(9, 9)), None);
        Ok(())
    }

    #[test]
    fn annotated_lines_are_aligned_and_sorted() -> Result<()> {
        let dir = tempdir()?;
        let out_path = dir.path().join("out.txt");

        let mut defs = BTreeMap::new();
        defs.insert(
            (2, 1),
            AbilityDef { name: "Finesse".to_string(), code: "C:2:1".to_string() },
        );
        defs.insert(
            (1, 1),
            AbilityDef { name: "Power".to_string(), code: "C:1:1".to_string() },
        );

        let mut users = AbilityUsers::new();
        users.insert((1, 1), vec!["Feanor".to_string(), "Maeglin".to_string()]);

        write_annotated(&defs, &users, &out_path)?;
        let written = fs::read_to_string(&out_path)?;
        assert_eq!(
            written,
            "C:1:1   # Power                    : Feanor, Maeglin\n\
             C:2:1   # Finesse                  :\n"
        );
        Ok(())
    }
}
