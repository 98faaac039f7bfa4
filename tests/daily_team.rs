use chrono::NaiveDate;

use teamday::config::{LeagueRules, Position};
use teamday::daily_team::{PerformanceRecord, compose_daily_team};
use teamday::feed::parse_daily_records;

fn record(id: &str, position: Position, points: f64) -> PerformanceRecord {
    PerformanceRecord {
        id: id.to_string(),
        name: format!("Player {id}"),
        position,
        points,
        save_pct: None,
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 7).expect("valid date")
}

#[test]
fn single_center_fills_the_center_slot() {
    let records = vec![record("1", Position::Center, 10.5)];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());

    let centers = team.slots.get(&Position::Center).expect("center selected");
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0].id, "1");
    assert_eq!(centers[0].points, 10.5);
    assert!(centers[0].grade.is_none());
}

#[test]
fn zero_and_negative_points_never_qualify() {
    let records = vec![
        record("1", Position::Center, 0.0),
        record("2", Position::LeftWing, -1.5),
        record("3", Position::RightWing, 0.1),
    ];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());

    assert!(!team.slots.contains_key(&Position::Center));
    assert!(!team.slots.contains_key(&Position::LeftWing));
    assert_eq!(team.slots[&Position::RightWing].len(), 1);
}

#[test]
fn nan_points_never_qualify() {
    let records = vec![
        record("1", Position::Center, f64::NAN),
        record("2", Position::Center, 3.0),
    ];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());

    let centers = &team.slots[&Position::Center];
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0].id, "2");
    assert_eq!(team.total_points, 3.0);
}

#[test]
fn defense_with_one_candidate_stays_short() {
    let records = vec![record("7", Position::Defense, 4.0)];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());

    // Capacity is two, but a short slate is never padded.
    assert_eq!(team.slots[&Position::Defense].len(), 1);
}

#[test]
fn capacity_truncates_to_the_top_scorers() {
    let records = vec![
        record("1", Position::Defense, 2.0),
        record("2", Position::Defense, 9.0),
        record("3", Position::Defense, 5.5),
        record("4", Position::Goalie, 3.0),
        record("5", Position::Goalie, 7.0),
    ];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());

    let defense = &team.slots[&Position::Defense];
    assert_eq!(defense.len(), 2);
    assert_eq!(defense[0].id, "2");
    assert_eq!(defense[1].id, "3");

    let goalies = &team.slots[&Position::Goalie];
    assert_eq!(goalies.len(), 1);
    assert_eq!(goalies[0].id, "5");
}

#[test]
fn ties_keep_upstream_order() {
    let mut rules = LeagueRules::default();
    rules.capacities.insert(Position::LeftWing, 2);
    let records = vec![
        record("first", Position::LeftWing, 6.0),
        record("second", Position::LeftWing, 6.0),
        record("third", Position::LeftWing, 6.0),
    ];
    let team = compose_daily_team(&records, day(), &rules);

    let wings = &team.slots[&Position::LeftWing];
    assert_eq!(wings[0].id, "first");
    assert_eq!(wings[1].id, "second");
}

#[test]
fn team_total_sums_only_selected_players() {
    let records = vec![
        record("1", Position::Center, 10.0),
        record("2", Position::Center, 4.0),
        record("3", Position::Goalie, 6.0),
    ];
    let team = compose_daily_team(&records, day(), &LeagueRules::default());
    assert_eq!(team.total_points, 16.0);
}

#[test]
fn malformed_raw_entries_are_dropped_individually() {
    let raw = r#"{
        "date": "2024-10-07",
        "players": [
            {"info": {"id": "10", "name": "Good Center", "primary_position": 1},
             "stats": {"total_points": 8.5}},
            {"info": {"id": "11", "primary_position": 2},
             "stats": {"total_points": 5.0}},
            {"info": {"id": "12", "name": "Unknown Slot", "primary_position": 9},
             "stats": {"total_points": 5.0}},
            {"info": {"id": 13, "name": "Numeric Id", "position": "G"},
             "stats": {"total_points": 4.0, "save_pct": 0.933}},
            {"info": {"id": "14", "name": "No Stats", "primary_position": 3}}
        ]
    }"#;

    let records = parse_daily_records(raw).expect("document parses");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "10");
    assert_eq!(records[0].position, Position::Center);
    assert_eq!(records[1].id, "13");
    assert_eq!(records[1].position, Position::Goalie);
    assert_eq!(records[1].save_pct, Some(0.933));
}

#[test]
fn document_without_players_yields_no_records() {
    let records = parse_daily_records(r#"{"date": "2024-10-07"}"#).expect("parses");
    assert!(records.is_empty());
}
