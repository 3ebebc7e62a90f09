// Domain value objects
pub mod affinity;
pub mod equipment_slot;
pub mod identifiers;
pub mod leaderboard_kind;
pub mod rarity;

pub use affinity::*;
pub use equipment_slot::*;
pub use identifiers::*;
pub use leaderboard_kind::*;
pub use rarity::*;
