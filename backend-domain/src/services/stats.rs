use std::collections::HashMap;

use crate::entities::{LootItem, Team, TeamStats};
use crate::value_objects::EquipmentSlot;

/// Base bonuses plus the bonuses of every equipped item. Empty slots (absent or
/// `None`) contribute nothing.
pub fn aggregate_stats(
    team: &Team,
    equipped: &HashMap<EquipmentSlot, Option<LootItem>>,
) -> TeamStats {
    let mut stats = team.base_stats;
    for item in equipped.values().flatten() {
        stats.add(&item.bonuses());
    }
    stats
}
