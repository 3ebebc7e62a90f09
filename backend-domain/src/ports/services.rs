use chrono::{DateTime, Utc};

/// Shared pseudorandom source. Implementations must be seeded per process
/// start; tests inject deterministic sequences.
pub trait RandomSource: Send + Sync {
    /// Uniform in `[0, 100)`.
    fn roll_percent(&self) -> f64;
    /// Uniform in `[0, len)`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
