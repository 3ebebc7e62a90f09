use crate::entities::{DropTableRow, LootItem};
use crate::ports::RandomSource;

/// Rolls one drop-table row. Returns the number of units to grant, or `None`
/// when the tier does not drop. The roll is uniform in `[0, 100)` and the tier
/// drops when it lands strictly below the row's rate.
pub fn roll_tier(row: &DropTableRow, random: &dyn RandomSource) -> Option<u32> {
    let roll = random.roll_percent();
    if roll >= row.drop_rate_percent {
        return None;
    }
    Some(roll_quantity(row.min_quantity, row.max_quantity, random))
}

/// Uniform in `[min, max]`; a degenerate range yields `min`.
pub fn roll_quantity(min: u32, max: u32, random: &dyn RandomSource) -> u32 {
    if max <= min {
        return min;
    }
    let span = (max - min) as usize + 1;
    min + random.pick_index(span) as u32
}

pub fn pick_item<'a>(candidates: &'a [LootItem], random: &dyn RandomSource) -> Option<&'a LootItem> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(random.pick_index(candidates.len()))
}
