// Leaderboard entities

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Raw per-player score before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub user_id: UserId,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub rank: u32,
    pub user_id: UserId,
    pub score: i64,
}
