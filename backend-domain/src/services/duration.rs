use crate::entities::TeamStats;

pub const MIN_EXPEDITION_MINUTES: u32 = 5;

/// `max(5, floor(base * (1 - speed / 100)))`. Speed above 100 bottoms out at the
/// floor; negative speed lengthens the trip and is not rejected here.
pub fn expedition_duration(stats: &TeamStats, base_minutes: u32) -> u32 {
    let speed_modifier = stats.speed / 100.0;
    let adjusted = f64::from(base_minutes) * (1.0 - speed_modifier);
    let floored = adjusted.floor();
    if floored <= f64::from(MIN_EXPEDITION_MINUTES) {
        MIN_EXPEDITION_MINUTES
    } else {
        floored as u32
    }
}
