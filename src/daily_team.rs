use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::config::{LeagueRules, Position};
use crate::grade::Grade;

/// One player's line for a single scoring day, already deserialized by the
/// data-fetch collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub points: f64,
    /// Save percentage, reported for goalies only.
    pub save_pct: Option<f64>,
}

/// A selected player within a daily or weekly team slot. `grade` is filled
/// in by the tracker once the selection has been recorded.
#[derive(Debug, Clone)]
pub struct TeamSlot {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub save_pct: Option<f64>,
    pub grade: Option<Grade>,
}

#[derive(Debug, Clone)]
pub struct DailyTeam {
    pub date: NaiveDate,
    pub slots: BTreeMap<Position, Vec<TeamSlot>>,
    pub total_points: f64,
}

/// Picks the team of the day: per position, the top scorers up to that
/// position's capacity. Positions short on candidates come out short,
/// never padded. Pure; recording the result is the tracker's job.
pub fn compose_daily_team(
    records: &[PerformanceRecord],
    date: NaiveDate,
    rules: &LeagueRules,
) -> DailyTeam {
    let mut by_position: BTreeMap<Position, Vec<&PerformanceRecord>> = BTreeMap::new();
    for record in records {
        // Only a strictly positive score qualifies for the team of the
        // day; the negated form also drops NaN.
        if !(record.points > 0.0) {
            continue;
        }
        by_position.entry(record.position).or_default().push(record);
    }

    let mut slots: BTreeMap<Position, Vec<TeamSlot>> = BTreeMap::new();
    for (position, mut group) in by_position {
        // Stable sort: equal points keep upstream order, no invented
        // secondary key.
        group.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));
        group.truncate(rules.capacity(position));
        if group.is_empty() {
            continue;
        }
        for record in &group {
            debug!(
                "selected {} ({}) with {} points",
                record.name, position, record.points
            );
        }
        slots.insert(
            position,
            group
                .into_iter()
                .map(|record| TeamSlot {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    points: record.points,
                    save_pct: record.save_pct,
                    grade: None,
                })
                .collect(),
        );
    }

    let total_points = slots.values().flatten().map(|slot| slot.points).sum();
    DailyTeam {
        date,
        slots,
        total_points,
    }
}
