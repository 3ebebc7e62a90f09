// Pure progression rules

pub mod duration;
pub mod elemental;
pub mod loot_rolls;
pub mod ownership;
pub mod ranking;
pub mod stats;
pub mod unlock;

pub use duration::*;
pub use elemental::*;
pub use loot_rolls::*;
pub use ownership::*;
pub use ranking::*;
pub use stats::*;
pub use unlock::*;
