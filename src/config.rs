use std::collections::BTreeMap;
use std::env;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Skater/goalie position slots as the upstream provider reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "RW")]
    RightWing,
    #[serde(rename = "D")]
    Defense,
    #[serde(rename = "G")]
    Goalie,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Center,
        Position::LeftWing,
        Position::RightWing,
        Position::Defense,
        Position::Goalie,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
            Position::Defense => "D",
            Position::Goalie => "G",
        }
    }

    pub fn from_code(raw: &str) -> Option<Position> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "C" => Some(Position::Center),
            "LW" => Some(Position::LeftWing),
            "RW" => Some(Position::RightWing),
            "D" => Some(Position::Defense),
            "G" => Some(Position::Goalie),
            _ => None,
        }
    }

    /// Numeric default-position id used by the upstream provider (1..=5).
    pub fn from_slot_id(id: u32) -> Option<Position> {
        match id {
            1 => Some(Position::Center),
            2 => Some(Position::LeftWing),
            3 => Some(Position::RightWing),
            4 => Some(Position::Defense),
            5 => Some(Position::Goalie),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// League rule-set passed explicitly into the composer, tracker and
/// aggregator. One value object instead of scattered constants so a
/// different league layout only needs a different `LeagueRules`.
#[derive(Debug, Clone)]
pub struct LeagueRules {
    pub capacities: BTreeMap<Position, usize>,
    pub week_start: Weekday,
    /// A calendar day before this hour still belongs to the previous
    /// scoring day (late games finish past midnight).
    pub day_start_hour: u32,
}

impl Default for LeagueRules {
    fn default() -> Self {
        let capacities = BTreeMap::from([
            (Position::Center, 1),
            (Position::LeftWing, 1),
            (Position::RightWing, 1),
            (Position::Defense, 2),
            (Position::Goalie, 1),
        ]);
        Self {
            capacities,
            week_start: Weekday::Mon,
            day_start_hour: 4,
        }
    }
}

impl LeagueRules {
    pub fn capacity(&self, position: Position) -> usize {
        self.capacities.get(&position).copied().unwrap_or(0)
    }

    /// Defaults with `DAY_START_HOUR` / `WEEK_START_DAY` env overrides.
    pub fn from_env() -> Self {
        let mut rules = Self::default();
        if let Some(hour) = env::var("DAY_START_HOUR")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
        {
            rules.day_start_hour = hour.min(23);
        }
        if let Some(day) = env::var("WEEK_START_DAY")
            .ok()
            .and_then(|val| val.parse::<Weekday>().ok())
        {
            rules.week_start = day;
        }
        rules
    }
}
