// Rift entity
// Catalog destination for expeditions, plus its per-rarity drop table

use serde::{Deserialize, Serialize};

use crate::value_objects::{Affinity, Rarity, RiftId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rift {
    pub id: RiftId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub world_type: String,
    pub duration_minutes: u32,
    pub difficulty: String,
    #[serde(default = "Affinity::none")]
    pub weak_to_element: Affinity,
    #[serde(default)]
    pub unlock_requirement_text: Option<String>,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTableRow {
    pub rift_id: RiftId,
    pub rarity: Rarity,
    pub drop_rate_percent: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}
