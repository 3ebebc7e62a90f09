pub mod expedition_queries;
pub mod inventory_queries;
pub mod leaderboard_queries;
pub mod rift_queries;
pub mod team_queries;
