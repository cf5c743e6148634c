//! Leaderboard domain models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaderboardStatus {
    EcoWarrior,
}

impl LeaderboardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardStatus::EcoWarrior => "Eco-Warrior",
        }
    }
}

/// One row of the community leaderboard. The rank is stored, not computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub footprint_tonnes: f64,
    pub status: LeaderboardStatus,
}
