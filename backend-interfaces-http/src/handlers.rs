pub mod expedition_handlers;
pub mod inventory_handlers;
pub mod leaderboard_handlers;
pub mod ops_handlers;
pub mod rift_handlers;
pub mod team_handlers;
