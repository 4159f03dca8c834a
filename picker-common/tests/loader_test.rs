extern crate picker_common;

use picker_common::errors::ErrorKind;
use picker_common::loader;
use picker_common::model::Participant;
use picker_common::roster::{Roster, ShuffleRequest};

const TEAMS_TXT: &'static str = "Alice 4\nBob\nCharlie 2\n";

#[test]
fn test_load_lines()
{
    let mut roster = Roster::new();

    let loaded = loader::load(&mut roster, TEAMS_TXT).unwrap();

    assert_eq!(loaded, vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(roster.participants(), &[Participant::new("Alice", 4), Participant::new("Bob", 3), Participant::new("Charlie", 2)][..]);
}

#[test]
fn test_load_ignores_outer_blank_lines_and_crlf()
{
    let mut roster = Roster::new();

    loader::load(&mut roster, "\n\r\nAlice 4\r\nBob 1\r\n\n").unwrap();

    assert_eq!(roster.participants(), &[Participant::new("Alice", 4), Participant::new("Bob", 1)][..]);
}

#[test]
fn test_load_keeps_lines_before_failure()
{
    let mut roster = Roster::new();

    let error = loader::load(&mut roster, "Alice 4\nBob\n   \nCharlie 2").unwrap_err();

    match error.kind()
    {
        &ErrorKind::InvalidLine(3, _) => {},
        kind => panic!("Expected InvalidLine, got {:?}", kind),
    }
    assert_eq!(roster.len(), 2);
    assert!(roster.contains("Bob"));
    assert!(!roster.contains("Charlie"));
}

#[test]
fn test_load_renames_exact_duplicates()
{
    let mut roster = Roster::new();
    roster.insert("Bob", 5).unwrap();

    let loaded = loader::load(&mut roster, "Alice 4\nAlice 2\nBob 2\nCharlie").unwrap();

    assert_eq!(loaded, vec!["Alice", "Alice(2)", "Bob(2)", "Charlie"]);
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.get("Bob").unwrap().rating, 5);
    assert_eq!(roster.get("Bob(2)").unwrap().rating, 2);
    assert_eq!(roster.get("Alice(2)").unwrap().rating, 2);
}

#[test]
fn test_load_saved_roster_on_top_of_itself()
{
    let mut roster = Roster::new();
    roster.insert("Alice", 4).unwrap();
    roster.insert("Bob", 5).unwrap();

    let saved = loader::save(&roster);
    let loaded = loader::load(&mut roster, &saved).unwrap();

    assert_eq!(loaded, vec!["Alice(2)", "Bob(2)"]);
    assert_eq!(loader::save(&roster), "Alice 4\nBob 5\nAlice(2) 4\nBob(2) 5\n");
}

#[test]
fn test_load_atomic_changes_nothing_on_failure()
{
    let mut roster = Roster::new();
    roster.insert("Zed", 1).unwrap();
    let before = roster.clone();

    assert!(loader::load_atomic(&mut roster, "Alice 4\n \nBob").is_err());
    assert_eq!(roster, before);

    loader::load_atomic(&mut roster, "Alice 4\nBob").unwrap();
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_save_then_load()
{
    let mut roster = Roster::new();
    roster.insert("Alice", 4).unwrap();
    roster.insert("Mary Jane", 2).unwrap();
    roster.insert("Team 7", 3).unwrap();
    roster.insert("Bob", 5).unwrap();

    let saved = loader::save(&roster);
    assert_eq!(saved, "Alice 4\nMary Jane 2\nTeam 7 3\nBob 5\n");

    let mut reloaded = Roster::new();
    loader::load(&mut reloaded, &saved).unwrap();

    assert_eq!(reloaded.participants(), roster.participants());
}

#[test]
fn test_reload_renames_prefix_collisions()
{
    let mut roster = Roster::new();
    roster.insert("Alice", 4).unwrap();
    roster.insert("Al", 2).unwrap();

    let mut reloaded = Roster::new();
    let loaded = loader::load(&mut reloaded, &loader::save(&roster)).unwrap();

    assert_eq!(loaded, vec!["Alice", "Al(2)"]);
    assert_eq!(reloaded.get("Al(2)").unwrap().rating, 2);
}

#[test]
fn test_load_does_not_touch_teams()
{
    let mut roster = Roster::new();
    loader::load(&mut roster, "Alice\nBob").unwrap();
    roster.shuffle(&ShuffleRequest::new(None, Vec::new(), None, Some(2))).unwrap();

    loader::load(&mut roster, "Carol").unwrap();

    assert_eq!(roster.teams().len(), 2);
    assert!(roster.teams().iter().all(|team| !team.contains("Carol")));
}
