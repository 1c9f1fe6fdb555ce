//! Parsers for the line-oriented `lib/edit` data files.
//!
//! All three file formats use two-character tag prefixes. Blank lines,
//! `#` comment lines and `V:` version lines are skipped everywhere; an
//! `N:` line opens a new record and every other tag line contributes to
//! the record opened by the most recent `N:`.

#[cfg(test)]
mod tests;

mod ability;
mod house;
mod race;
mod types;

pub use ability::parse_ability_defs;
pub use house::parse_houses;
pub use race::parse_races;
pub use types::{AbilityDef, House, Race, StatBlock};

pub(crate) use house::{parse_stat_block, split_flag_list};

/// True for lines that carry no record data in any of the edit files.
pub(crate) fn is_ignored_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("V:")
}
