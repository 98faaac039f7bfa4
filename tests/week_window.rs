use chrono::{NaiveDate, NaiveDateTime, Weekday};

use teamday::week_window::{
    WeekWindow, previous_week, scoring_date, week_window, week_window_for_date,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(d: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    d.and_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn early_morning_belongs_to_previous_scoring_day() {
    let ts = at(date(2024, 10, 8), 2, 30);
    assert_eq!(scoring_date(ts, 4), date(2024, 10, 7));
}

#[test]
fn exactly_at_day_start_hour_is_the_current_day() {
    let ts = at(date(2024, 10, 8), 4, 0);
    assert_eq!(scoring_date(ts, 4), date(2024, 10, 8));
}

#[test]
fn window_starts_on_most_recent_week_start() {
    // 2024-10-09 is a Wednesday.
    let window = week_window_for_date(date(2024, 10, 9), Weekday::Mon);
    assert_eq!(window.start, date(2024, 10, 7));
    assert_eq!(window.end, date(2024, 10, 13));
}

#[test]
fn week_start_day_itself_opens_a_new_window() {
    let window = week_window_for_date(date(2024, 10, 7), Weekday::Mon);
    assert_eq!(window.start, date(2024, 10, 7));
}

#[test]
fn day_offset_rolls_the_window_across_a_week_boundary() {
    // Monday 01:00 with a 4am day start is still Sunday's scoring day,
    // so it lands in the week that is just closing.
    let ts = at(date(2024, 10, 14), 1, 0);
    let window = week_window(ts, Weekday::Mon, 4);
    assert_eq!(window.start, date(2024, 10, 7));
    assert_eq!(window.end, date(2024, 10, 13));

    let later = at(date(2024, 10, 14), 9, 0);
    let next = week_window(later, Weekday::Mon, 4);
    assert_eq!(next.start, date(2024, 10, 14));
}

#[test]
fn configurable_week_start_weekday() {
    // 2024-12-16 is a Monday; with a Tuesday-start league it belongs to
    // the window opened on Tuesday 2024-12-10.
    let window = week_window_for_date(date(2024, 12, 16), Weekday::Tue);
    assert_eq!(window.start, date(2024, 12, 10));
    assert_eq!(window.end, date(2024, 12, 16));
}

#[test]
fn previous_week_is_seven_days_back() {
    let ts = at(date(2024, 10, 16), 12, 0);
    let prev = previous_week(ts, Weekday::Mon, 4);
    assert_eq!(prev.start, date(2024, 10, 7));
    assert_eq!(prev.end, date(2024, 10, 13));
}

#[test]
fn week_key_round_trips() {
    let window = week_window_for_date(date(2024, 10, 10), Weekday::Mon);
    assert_eq!(window.key(), "2024-10-07_2024-10-13");
    assert_eq!(WeekWindow::parse_key(&window.key()), Some(window));
}

#[test]
fn parse_key_rejects_a_wrong_span() {
    assert_eq!(WeekWindow::parse_key("2024-10-07_2024-10-12"), None);
    assert_eq!(WeekWindow::parse_key("not_a_key"), None);
}

#[test]
fn contains_is_inclusive_on_both_ends() {
    let window = week_window_for_date(date(2024, 10, 9), Weekday::Mon);
    assert!(window.contains(date(2024, 10, 7)));
    assert!(window.contains(date(2024, 10, 13)));
    assert!(!window.contains(date(2024, 10, 14)));
}
