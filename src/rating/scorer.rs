use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::ScoreRow;
use crate::parser::{House, Race, StatBlock};

const RED_DOT: &str = "\u{1f534}";
const GREEN_DOT: &str = "\u{1f7e2}";

const ZERO_STATS: StatBlock = [0; 4];
const NO_FLAGS: &[String] = &[];

/// Build the house-id to owning-race lookup.
///
/// Membership lists may overlap; a later race silently wins for any house
/// id it repeats.
pub fn race_by_member(races: &[Race]) -> HashMap<i32, &Race> {
    let mut lookup = HashMap::new();
    for race in races {
        for &member in &race.members {
            lookup.insert(member, race);
        }
    }
    lookup
}

/// Compute a score row per house and sort by total, then by net dots,
/// both descending. Further ties keep input order.
pub fn compute_scores(houses: &[House], races: &[Race]) -> Vec<ScoreRow> {
    let lookup = race_by_member(races);
    debug!("Race lookup covers {} house ids", lookup.len());

    let mut rows: Vec<ScoreRow> = houses
        .iter()
        .map(|house| score_house(house, lookup.get(&house.num).copied()))
        .collect();

    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.net_dots.cmp(&a.net_dots))
    });
    rows
}

fn score_house(house: &House, race: Option<&Race>) -> ScoreRow {
    let race_stats = race.map_or(ZERO_STATS, |r| r.stats);
    let race_flags = race.map_or(NO_FLAGS, |r| r.flags.as_slice());

    let mut stats = [0i32; 4];
    for (i, slot) in stats.iter_mut().enumerate() {
        *slot = house.stats[i] + race_stats[i];
    }
    let stats_total = stats.iter().sum();

    let affinities = net_affinities(&house.flags) + net_affinities(race_flags);

    let free_count = count_flag(&house.flags, "FREE") + count_flag(race_flags, "FREE");
    let unique = house.uniques.len() as i32 * 2 + free_count * 2;

    let abilities = house.abilities.len() as f64 * 0.5;

    let total = f64::from(stats_total + affinities + unique) + abilities;

    let special: HashSet<&str> = house
        .flags
        .iter()
        .chain(race_flags.iter())
        .map(String::as_str)
        .collect();
    let (red, green) = dot_counts(&special);

    ScoreRow {
        hero: house.name.clone(),
        stats,
        stats_total,
        affinities,
        unique,
        abilities,
        total,
        dots: RED_DOT.repeat(red as usize) + &GREEN_DOT.repeat(green as usize),
        net_dots: green - red,
    }
}

/// Count flags ending in `_AFFINITY` minus flags ending in `_PENALTY`.
fn net_affinities(flags: &[String]) -> i32 {
    let affinities = flags.iter().filter(|f| f.ends_with("_AFFINITY")).count();
    let penalties = flags.iter().filter(|f| f.ends_with("_PENALTY")).count();
    affinities as i32 - penalties as i32
}

/// Count occurrences of a flag token, duplicates included.
fn count_flag(flags: &[String], flag: &str) -> i32 {
    flags.iter().filter(|f| *f == flag).count() as i32
}

/// Red and green indicator counts over the union of house and race flags.
fn dot_counts(special: &HashSet<&str>) -> (i32, i32) {
    let mut red = 0;
    if special.contains("KINSLAYER") {
        red += 2;
    }
    if special.contains("TREACHERY") {
        red += 1;
    }
    if special.contains("CURSE") {
        red += 1;
    }
    if special.contains("MOR_CURSE") {
        red += 1;
    }
    let green = i32::from(special.contains("GIFTERU"));
    (red, green)
}
