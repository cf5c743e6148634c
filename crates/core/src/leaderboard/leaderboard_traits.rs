use crate::leaderboard::leaderboard_model::LeaderboardEntry;

/// Trait for leaderboard service operations
pub trait LeaderboardServiceTrait: Send + Sync {
    fn get_entries(&self) -> Vec<LeaderboardEntry>;
}
