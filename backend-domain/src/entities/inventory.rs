// Inventory grant entity
// A user's ownership record of one catalog item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GrantId, LootItemId, UserId};

/// Equipment grants always hold quantity 1 (one row per acquisition);
/// consumable grants accumulate on a single row per user/item pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryGrant {
    pub id: GrantId,
    pub user_id: UserId,
    pub loot_item_id: LootItemId,
    pub quantity: u32,
    pub acquired_at: DateTime<Utc>,
}
