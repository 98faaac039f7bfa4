use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Position;
use crate::grade::Grade;

/// The persisted weekly-stats tree: week key -> player id -> record.
/// Old week buckets are kept forever; nothing here is ever merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonStats {
    #[serde(default)]
    pub weeks: BTreeMap<String, WeekBucket>,
    /// Marker for the week the tracker last wrote into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_week: Option<WeekMarker>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekBucket {
    #[serde(default)]
    pub players: BTreeMap<String, WeeklyPlayerRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlayerRecord {
    #[serde(default)]
    pub name: String,
    /// Every position the player was selected at this week, in first-seen
    /// order.
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Distinct ISO dates the player made the team of the day.
    #[serde(default)]
    pub appearance_dates: BTreeSet<String>,
    /// Always recomputed from `daily_stats`, never incremented.
    #[serde(default)]
    pub total_points: f64,
    #[serde(default)]
    pub grade: Grade,
    #[serde(default)]
    pub daily_stats: BTreeMap<String, DailyStat>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DailyStat {
    pub points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekMarker {
    pub start_date: String,
    pub end_date: String,
}

/// Persistence port for the weekly-stats tree. The tracker is the only
/// writer; the weekly aggregator only reads.
pub trait StatsStore {
    /// A missing or corrupt backing file loads as an empty season so the
    /// pipeline can cold-start and rebuild incrementally.
    fn load(&self) -> SeasonStats;
    fn save(&self, stats: &SeasonStats) -> Result<()>;
}

/// JSON-on-disk backend. Writes go through a sibling tmp file and a rename
/// so a crash mid-write leaves the previous snapshot intact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `STATS_FILE` env override, default `data/processed/player_stats.json`.
    pub fn from_env() -> Self {
        let path = env::var("STATS_FILE")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .unwrap_or_else(|| "data/processed/player_stats.json".to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> SeasonStats {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return SeasonStats::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, stats: &SeasonStats) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(stats).context("serialize season stats")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write season stats")?;
        fs::rename(&tmp, &self.path).context("swap season stats")?;
        Ok(())
    }
}

/// In-process backend for tests and benches.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<SeasonStats>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> SeasonStats {
        self.inner.borrow().clone()
    }

    fn save(&self, stats: &SeasonStats) -> Result<()> {
        *self.inner.borrow_mut() = stats.clone();
        Ok(())
    }
}
