use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::config::Position;
use crate::daily_team::DailyTeam;
use crate::grade::Grade;
use crate::store::{DailyStat, SeasonStats, StatsStore, WeekMarker, WeeklyPlayerRecord};
use crate::week_window::WeekWindow;

/// One player's entry in a composed daily team, about to be recorded.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub player_id: &'a str,
    pub name: &'a str,
    pub position: Position,
    pub points: f64,
    pub save_pct: Option<f64>,
}

/// Records one selection into the week's bucket and returns the player's
/// grade for that week.
///
/// Idempotent per (player, date): re-running the same date rewrites that
/// date's stat line but leaves the appearance set and grade untouched, so
/// a manual re-run or crash-and-retry cannot inflate anyone's grade.
pub fn record_selection(
    stats: &mut SeasonStats,
    window: WeekWindow,
    date: NaiveDate,
    selection: &Selection<'_>,
) -> Grade {
    roll_week_marker(stats, window);

    let bucket = stats.weeks.entry(window.key()).or_default();
    let record = bucket
        .players
        .entry(selection.player_id.to_string())
        .or_insert_with(|| WeeklyPlayerRecord {
            name: selection.name.to_string(),
            ..WeeklyPlayerRecord::default()
        });

    if !record.positions.contains(&selection.position) {
        record.positions.push(selection.position);
    }

    let date_key = date.format("%Y-%m-%d").to_string();
    let first_time = record.appearance_dates.insert(date_key.clone());
    record.daily_stats.insert(
        date_key,
        DailyStat {
            points: selection.points,
            save_pct: selection.save_pct,
        },
    );
    // Sum over daily_stats rather than incrementing, so duplicate runs
    // cannot double-count.
    record.total_points = record.daily_stats.values().map(|stat| stat.points).sum();

    if first_time {
        record.grade = Grade::from_appearances(record.appearance_dates.len());
        info!(
            "{} now {} ({} days this week)",
            record.name,
            record.grade,
            record.appearance_dates.len()
        );
    }
    record.grade
}

/// Records every slot of a composed daily team and echoes the resulting
/// grade back into each slot for display.
pub fn record_daily_team(stats: &mut SeasonStats, window: WeekWindow, team: &mut DailyTeam) {
    let date = team.date;
    for (position, slots) in &mut team.slots {
        for slot in slots {
            let grade = record_selection(
                stats,
                window,
                date,
                &Selection {
                    player_id: &slot.id,
                    name: &slot.name,
                    position: *position,
                    points: slot.points,
                    save_pct: slot.save_pct,
                },
            );
            slot.grade = Some(grade);
        }
    }
}

/// Load-mutate-save convenience over a store. Only the save can fail; a
/// missing or corrupt file just means starting from an empty season.
pub fn record_and_save<S: StatsStore>(
    store: &S,
    window: WeekWindow,
    team: &mut DailyTeam,
) -> Result<SeasonStats> {
    let mut stats = store.load();
    record_daily_team(&mut stats, window, team);
    store.save(&stats)?;
    Ok(stats)
}

/// Moves the current-week marker when a newer window shows up. Prior week
/// buckets stay under their own keys; grade progress never carries over.
/// Backfilling an older week never moves the marker backwards.
fn roll_week_marker(stats: &mut SeasonStats, window: WeekWindow) {
    let marker = WeekMarker {
        start_date: window.start.format("%Y-%m-%d").to_string(),
        end_date: window.end.format("%Y-%m-%d").to_string(),
    };
    if let Some(current) = &stats.current_week {
        // ISO dates compare lexicographically.
        if marker.start_date <= current.start_date {
            return;
        }
        info!(
            "week rollover: {}..{} -> {}..{}",
            current.start_date, current.end_date, marker.start_date, marker.end_date
        );
    }
    stats.current_week = Some(marker);
}
