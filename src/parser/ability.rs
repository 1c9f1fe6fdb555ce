use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::debug;

use super::types::AbilityDef;

/// Parse an ability-definitions file into a coordinate-ordered map.
///
/// Only lines of the form `C:<row>:<col> ... # <name>` are read: the code
/// before the `#` names the coordinate, the comment after it names the
/// ability. Duplicate coordinates keep the last definition seen.
pub fn parse_ability_defs(path: &Path) -> Result<BTreeMap<(i32, i32), AbilityDef>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ability file: {}", path.display()))?;

    let mut defs = BTreeMap::new();
    for raw in content.lines() {
        let line = raw.trim();
        if !line.starts_with("C:") || !line.contains('#') {
            continue;
        }

        let (code, name) = line
            .split_once('#')
            .ok_or_else(|| anyhow!("Malformed ability line: {}", line))?;
        let (row, col) = parse_coordinate(code.trim())
            .with_context(|| format!("Invalid ability code: {}", line))?;

        defs.insert(
            (row, col),
            AbilityDef {
                name: name.trim().to_string(),
                code: format!("C:{}:{}", row, col),
            },
        );
    }

    debug!("Parsed {} ability definitions from {}", defs.len(), path.display());
    Ok(defs)
}

/// Parse a `C:<row>:<col>` code into its coordinate.
fn parse_coordinate(code: &str) -> Result<(i32, i32)> {
    let fields: Vec<&str> = code[2..].split(':').collect();
    let [row, col] = fields.as_slice() else {
        return Err(anyhow!("Expected two coordinate fields, found {}", fields.len()));
    };
    let row = row.parse().with_context(|| format!("Invalid row: {:?}", row))?;
    let col = col.parse().with_context(|| format!("Invalid column: {:?}", col))?;
    Ok((row, col))
}
