//! Leaderboard module - static community sample data.

mod leaderboard_model;
mod leaderboard_service;
mod leaderboard_traits;

pub use leaderboard_model::{LeaderboardEntry, LeaderboardStatus};
pub use leaderboard_service::LeaderboardService;
pub use leaderboard_traits::LeaderboardServiceTrait;
