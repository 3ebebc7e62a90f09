pub mod clock;
pub mod random_source;

pub use clock::*;
pub use random_source::*;
