use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;

use crate::config::{LeagueRules, Position};
use crate::grade::Grade;
use crate::store::SeasonStats;
use crate::week_window::WeekWindow;

#[derive(Debug, Clone)]
pub struct WeeklyCandidate {
    pub id: String,
    pub name: String,
    pub grade: Grade,
    /// Distinct team-of-the-day days this week.
    pub appearances: usize,
    /// Points summed over the whole week.
    pub total_points: f64,
}

#[derive(Debug, Clone)]
pub struct WeeklyTeam {
    pub window: WeekWindow,
    pub slots: BTreeMap<Position, Vec<WeeklyCandidate>>,
}

/// Ordering policy for the weekly team: grade tier descending, then weekly
/// points descending. The whole policy lives in this one comparator so it
/// can be swapped without touching `compose_weekly_team`.
pub fn grade_then_points(a: &WeeklyCandidate, b: &WeeklyCandidate) -> Ordering {
    b.grade
        .rank()
        .cmp(&a.grade.rank())
        .then_with(|| b.total_points.partial_cmp(&a.total_points).unwrap_or(Ordering::Equal))
}

/// Builds the team of the week from the persisted records of one window.
/// A player is a candidate at every position they were selected at during
/// the week. Capacities are honored exactly as in the daily composer.
pub fn compose_weekly_team(
    stats: &SeasonStats,
    window: WeekWindow,
    rules: &LeagueRules,
) -> WeeklyTeam {
    let mut slots: BTreeMap<Position, Vec<WeeklyCandidate>> = BTreeMap::new();

    if let Some(bucket) = stats.weeks.get(&window.key()) {
        for (id, record) in &bucket.players {
            for position in &record.positions {
                slots.entry(*position).or_default().push(WeeklyCandidate {
                    id: id.clone(),
                    name: record.name.clone(),
                    grade: record.grade,
                    appearances: record.appearance_dates.len(),
                    total_points: record.total_points,
                });
            }
        }
    } else {
        debug!("no recorded week for {}", window.key());
    }

    for (position, candidates) in &mut slots {
        candidates.sort_by(grade_then_points);
        candidates.truncate(rules.capacity(*position));
        for candidate in candidates.iter() {
            debug!(
                "weekly pick {} ({}) grade {} with {} points",
                candidate.name, position, candidate.grade, candidate.total_points
            );
        }
    }
    slots.retain(|_, candidates| !candidates.is_empty());

    WeeklyTeam { window, slots }
}
