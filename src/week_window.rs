use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// One scoring week: seven consecutive scoring days, anchored to the
/// league's start weekday. Both the tracker and the weekly aggregator go
/// through these functions so they always agree on boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Storage key, `YYYY-MM-DD_YYYY-MM-DD`.
    pub fn key(&self) -> String {
        format!(
            "{}_{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    pub fn parse_key(raw: &str) -> Option<WeekWindow> {
        let (start, end) = raw.split_once('_')?;
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
        (end == start + Duration::days(6)).then_some(WeekWindow { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Maps a timestamp to its scoring day. A day runs from `day_start_hour`
/// to the same hour the next calendar day; a timestamp exactly at the hour
/// belongs to the current day.
pub fn scoring_date(ts: NaiveDateTime, day_start_hour: u32) -> NaiveDate {
    if ts.hour() < day_start_hour {
        ts.date() - Duration::days(1)
    } else {
        ts.date()
    }
}

pub fn week_window(ts: NaiveDateTime, week_start: Weekday, day_start_hour: u32) -> WeekWindow {
    week_window_for_date(scoring_date(ts, day_start_hour), week_start)
}

/// Window start is the most recent `week_start` at or before `date`.
pub fn week_window_for_date(date: NaiveDate, week_start: Weekday) -> WeekWindow {
    let offset = (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let start = date - Duration::days(i64::from(offset));
    WeekWindow {
        start,
        end: start + Duration::days(6),
    }
}

/// The fully elapsed window before the one containing `ts`. Used when the
/// weekly team is composed right after a week closes.
pub fn previous_week(ts: NaiveDateTime, week_start: Weekday, day_start_hour: u32) -> WeekWindow {
    let current = week_window(ts, week_start, day_start_hour);
    WeekWindow {
        start: current.start - Duration::days(7),
        end: current.end - Duration::days(7),
    }
}
