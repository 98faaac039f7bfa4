use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Position;
use crate::daily_team::PerformanceRecord;
use crate::feed::StatsFeed;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Niko", "Erik", "Matvei", "Juho", "Cole", "Dylan", "Leon", "Artur", "Owen", "Elias",
    "Marco",
];

const LAST_NAMES: &[&str] = &[
    "Granlund", "Kovac", "Lindholm", "Petrov", "Saari", "Brennan", "Novak", "Berg", "Olsen",
    "Kask", "Virtanen", "Moreau",
];

/// Deterministic synthetic provider for demos, benches and tests: the same
/// date always produces the same slate.
pub struct SyntheticFeed {
    pub players_per_position: usize,
}

impl SyntheticFeed {
    pub fn new(players_per_position: usize) -> Self {
        Self {
            players_per_position,
        }
    }
}

impl StatsFeed for SyntheticFeed {
    fn daily_records(&self, date: NaiveDate) -> Result<Vec<PerformanceRecord>> {
        Ok(synthetic_day(date, self.players_per_position))
    }
}

pub fn synthetic_day(date: NaiveDate, players_per_position: usize) -> Vec<PerformanceRecord> {
    let mut rng = StdRng::seed_from_u64(date.num_days_from_ce() as u64);
    let mut records = Vec::new();

    for (slot, position) in Position::ALL.iter().enumerate() {
        for index in 0..players_per_position {
            let id = format!("{}", (slot + 1) * 1000 + index);
            let name = format!(
                "{} {}",
                FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
                LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
            );
            // Some players post a blank or negative night; the composer
            // must drop those.
            let points = if rng.gen_bool(0.15) {
                rng.gen_range(-3.0..=0.0)
            } else {
                (rng.gen_range(0.5..18.0_f64) * 10.0).round() / 10.0
            };
            let save_pct = match position {
                Position::Goalie => Some((rng.gen_range(0.82..1.0_f64) * 1000.0).round() / 1000.0),
                _ => None,
            };
            records.push(PerformanceRecord {
                id,
                name,
                position: *position,
                points,
                save_pct,
            });
        }
    }
    records
}
