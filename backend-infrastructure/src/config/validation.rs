use std::collections::HashSet;

use anyhow::{anyhow, Result};

use crate::repositories::Catalog;

/// Rejects catalogs the progression engine cannot run against. Quantity
/// ranges with `min > max` are accepted and roll as `min`.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut rift_ids = HashSet::new();
    for rift in &catalog.rifts {
        if !rift_ids.insert(rift.id) {
            return Err(anyhow!("duplicate rift id {}", rift.id));
        }
        if rift.duration_minutes == 0 {
            return Err(anyhow!("rift {} has a zero base duration", rift.id));
        }
        if rift.world_type.trim().is_empty() {
            return Err(anyhow!("rift {} has no world_type", rift.id));
        }
    }

    let mut item_ids = HashSet::new();
    for item in &catalog.loot_items {
        if !item_ids.insert(item.id) {
            return Err(anyhow!("duplicate loot item id {}", item.id));
        }
        if item.name.trim().is_empty() {
            return Err(anyhow!("loot item {} has no name", item.id));
        }
    }

    for row in &catalog.drop_tables {
        if !rift_ids.contains(&row.rift_id) {
            return Err(anyhow!("drop table row references unknown rift {}", row.rift_id));
        }
        if !(0.0..=100.0).contains(&row.drop_rate_percent) {
            return Err(anyhow!(
                "drop rate {} for rift {} ({}) is outside 0-100",
                row.drop_rate_percent,
                row.rift_id,
                row.rarity.as_str()
            ));
        }
    }
    Ok(())
}
