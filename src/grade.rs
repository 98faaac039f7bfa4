use std::fmt;

use serde::{Deserialize, Serialize};

/// Player grade for the current week, derived from the number of distinct
/// days the player made the team of the day. Resets every week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legend,
}

impl Grade {
    /// Tier for a distinct-appearance-day count. Legend is terminal: more
    /// than five days changes nothing.
    pub fn from_appearances(count: usize) -> Grade {
        match count {
            0 | 1 => Grade::Common,
            2 => Grade::Uncommon,
            3 => Grade::Rare,
            4 => Grade::Epic,
            _ => Grade::Legend,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Grade::Common => 1,
            Grade::Uncommon => 2,
            Grade::Rare => 3,
            Grade::Epic => 4,
            Grade::Legend => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Common => "common",
            Grade::Uncommon => "uncommon",
            Grade::Rare => "rare",
            Grade::Epic => "epic",
            Grade::Legend => "legend",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
