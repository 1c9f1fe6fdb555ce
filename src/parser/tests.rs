use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

/// Helper function to get the test data directory
fn get_test_data_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    PathBuf::from(manifest_dir).join("test_data")
}

#[test]
fn parse_houses_from_fixture() -> Result<()> {
    let houses = parse_houses(&get_test_data_dir().join("house.txt"))?;

    assert_eq!(houses.len(), 3, "Placeholder house should be dropped");
    assert_eq!(houses[0].name, "Feanor");
    assert_eq!(houses[0].stats, [1, 4, 1, 3]);
    assert_eq!(houses[0].flags, vec!["SWORD_AFFINITY", "SMITHING_AFFINITY"]);
    assert_eq!(houses[0].uniques, vec!["Curse of Feanor"]);
    assert_eq!(
        houses[0].abilities,
        vec![
            ("1".to_string(), "1".to_string()),
            ("2".to_string(), "3".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn placeholder_house_is_discarded() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "N:0:<No House>\nS:1:1:1:1\nN:5:Hurin\n")?;

    let houses = parse_houses(&path)?;
    assert_eq!(houses.len(), 1, "Only the real house should survive");
    assert_eq!(houses[0].num, 5);
    assert_eq!(houses[0].stats, [0, 0, 0, 0], "Missing S: line leaves the zero block");
    Ok(())
}

#[test]
fn comments_version_lines_and_blanks_are_skipped() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "# header comment\nV:1.5.0\n\nN:1:Beren\nS:1:2:3:4\n")?;

    let houses = parse_houses(&path)?;
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].stats, [1, 2, 3, 4]);
    Ok(())
}

#[test]
fn ability_pairs_truncate_at_comment() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "N:1:Turin\nC:MEL1:1:SNG1:2  # Weaponsmith:Song\n")?;

    let houses = parse_houses(&path)?;
    assert_eq!(
        houses[0].abilities,
        vec![
            ("MEL1".to_string(), "1".to_string()),
            ("SNG1".to_string(), "2".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn odd_ability_entry_is_dropped() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "N:1:Turin\nC:MEL1:1:SNG1\n")?;

    let houses = parse_houses(&path)?;
    assert_eq!(houses[0].abilities, vec![("MEL1".to_string(), "1".to_string())]);
    Ok(())
}

#[test]
fn short_stat_line_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "N:1:Turin\nS:1:2\n")?;

    assert!(parse_houses(&path).is_err(), "Fewer than four stats should fail");
    Ok(())
}

#[test]
fn non_numeric_stat_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("house.txt");
    fs::write(&path, "N:1:Turin\nS:1:x:3:4\n")?;

    assert!(parse_houses(&path).is_err(), "Non-numeric stat should fail");
    Ok(())
}

#[test]
fn missing_house_file_is_an_error() {
    let result = parse_houses(&PathBuf::from("no_such_house_file.txt"));
    assert!(result.is_err(), "Missing input file should fail the run");
}

#[test]
fn parse_races_from_fixture() -> Result<()> {
    let races = parse_races(&get_test_data_dir().join("race.txt"))?;

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].name, "Noldor");
    assert_eq!(races[0].stats, [0, 1, 0, 1]);
    assert_eq!(races[0].flags, vec!["FREE"]);
    assert_eq!(races[0].members, vec![1, 2]);
    Ok(())
}

#[test]
fn race_members_are_every_digit_run() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("race.txt");
    fs::write(&path, "N:1:Edain\nC:houses 12, 7 and 104\n")?;

    let races = parse_races(&path)?;
    assert_eq!(races[0].members, vec![12, 7, 104]);
    Ok(())
}

#[test]
fn races_have_no_placeholder_rule() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("race.txt");
    fs::write(&path, "N:0:<No Race>\nN:1:Sindar\n")?;

    let races = parse_races(&path)?;
    assert_eq!(races.len(), 2, "Race records commit unconditionally");
    Ok(())
}

#[test]
fn parse_ability_defs_from_fixture() -> Result<()> {
    let defs = parse_ability_defs(&get_test_data_dir().join("ability.txt"))?;

    assert_eq!(defs.len(), 3);
    let power = defs.get(&(1, 1)).expect("Should find C:1:1");
    assert_eq!(power.name, "Power");
    assert_eq!(power.code, "C:1:1");

    let coords: Vec<_> = defs.keys().copied().collect();
    assert_eq!(coords, vec![(1, 1), (1, 2), (2, 3)], "Map iterates in coordinate order");
    Ok(())
}

#[test]
fn ability_lines_without_comment_are_skipped() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("ability.txt");
    fs::write(&path, "C:1:1\nC:2:2  # Charge\n")?;

    let defs = parse_ability_defs(&path)?;
    assert_eq!(defs.len(), 1);
    assert!(defs.contains_key(&(2, 2)));
    Ok(())
}

#[test]
fn duplicate_ability_coordinate_keeps_last() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("ability.txt");
    fs::write(&path, "C:1:1  # First\nC:1:1  # Second\n")?;

    let defs = parse_ability_defs(&path)?;
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[&(1, 1)].name, "Second");
    Ok(())
}
