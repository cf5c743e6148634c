use super::leaderboard_model::{LeaderboardEntry, LeaderboardStatus};
use super::leaderboard_traits::LeaderboardServiceTrait;

/// Serves the sample leaderboard in its stored order.
pub struct LeaderboardService {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardService {
    pub fn new() -> Self {
        let sample = [
            ("Sarah Johnson", 2.1),
            ("Michael Chen", 2.4),
            ("Emma Wilson", 2.8),
            ("David Kim", 3.2),
            ("Lisa Garcia", 3.5),
        ];
        let entries = sample
            .iter()
            .zip(1u32..)
            .map(|((name, footprint_tonnes), rank)| LeaderboardEntry {
                rank,
                name: name.to_string(),
                footprint_tonnes: *footprint_tonnes,
                status: LeaderboardStatus::EcoWarrior,
            })
            .collect();
        LeaderboardService { entries }
    }
}

impl Default for LeaderboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardServiceTrait for LeaderboardService {
    fn get_entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }
}
