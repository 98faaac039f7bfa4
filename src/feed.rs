use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde_json::Value;

use crate::config::Position;
use crate::daily_team::PerformanceRecord;

/// Source of one day's already-fetched performance records. Network
/// retrieval, retries and request filtering live entirely behind this
/// seam; the engine only sees deserialized records.
pub trait StatsFeed {
    fn daily_records(&self, date: NaiveDate) -> Result<Vec<PerformanceRecord>>;
}

/// Parses a day's raw stats document. Malformed player entries are dropped
/// one by one; they never abort the day.
pub fn parse_daily_records(raw: &str) -> Result<Vec<PerformanceRecord>> {
    let root: Value = serde_json::from_str(raw).context("parse daily stats json")?;
    let mut records = Vec::new();
    let Some(players) = root.get("players").and_then(Value::as_array) else {
        return Ok(records);
    };
    for entry in players {
        match parse_player_entry(entry) {
            Some(record) => records.push(record),
            None => warn!("skipping malformed player entry"),
        }
    }
    Ok(records)
}

fn parse_player_entry(entry: &Value) -> Option<PerformanceRecord> {
    let info = entry.get("info")?;
    let id = match info.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let name = info.get("name")?.as_str()?.to_string();
    let position = parse_position(info)?;
    let stats = entry.get("stats")?;
    let points = stats.get("total_points")?.as_f64()?;
    let save_pct = stats.get("save_pct").and_then(Value::as_f64);
    Some(PerformanceRecord {
        id,
        name,
        position,
        points,
        save_pct,
    })
}

// Accepts either the short code ("position": "LW") or the provider's
// numeric slot id ("primary_position": 2).
fn parse_position(info: &Value) -> Option<Position> {
    if let Some(code) = info.get("position").and_then(Value::as_str) {
        if let Some(position) = Position::from_code(code) {
            return Some(position);
        }
    }
    info.get("primary_position")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
        .and_then(Position::from_slot_id)
}

/// Reads pre-fetched per-day documents (`stats_<date>.json`) from a
/// directory, the shape the fetch collaborator caches them in.
pub struct JsonFeed {
    dir: PathBuf,
}

impl JsonFeed {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `STATS_CACHE_DIR` env override, default `data/cache`.
    pub fn from_env() -> Self {
        let dir = env::var("STATS_CACHE_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .unwrap_or_else(|| "data/cache".to_string());
        Self::new(dir)
    }

    fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("stats_{}.json", date.format("%Y-%m-%d")))
    }
}

impl StatsFeed for JsonFeed {
    fn daily_records(&self, date: NaiveDate) -> Result<Vec<PerformanceRecord>> {
        let path = self.day_path(date);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read daily stats {}", path.display()))?;
        parse_daily_records(&raw)
    }
}
