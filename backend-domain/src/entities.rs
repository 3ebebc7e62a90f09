// Domain entities
pub mod expedition;
pub mod inventory;
pub mod leaderboard;
pub mod loot_item;
pub mod rift;
pub mod runtime_config;
pub mod team;

pub use expedition::*;
pub use inventory::*;
pub use leaderboard::*;
pub use loot_item::*;
pub use rift::*;
pub use runtime_config::*;
pub use team::*;
