// Equipment slot and item kind value objects

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
    Artifact,
    Relic,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 5] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Accessory,
        EquipmentSlot::Artifact,
        EquipmentSlot::Relic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Accessory => "accessory",
            EquipmentSlot::Artifact => "artifact",
            EquipmentSlot::Relic => "relic",
        }
    }
}

impl std::str::FromStr for EquipmentSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weapon" => Ok(EquipmentSlot::Weapon),
            "armor" => Ok(EquipmentSlot::Armor),
            "accessory" => Ok(EquipmentSlot::Accessory),
            "artifact" => Ok(EquipmentSlot::Artifact),
            "relic" => Ok(EquipmentSlot::Relic),
            other => Err(anyhow::anyhow!("invalid equipment slot: {}", other)),
        }
    }
}

/// Equipment occupies exactly one slot category; consumables are stackable and
/// applied permanently to a team's base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Equipment { slot: EquipmentSlot },
    Consumable,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Equipment { .. } => "equipment",
            ItemKind::Consumable => "consumable",
        }
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Equipment { slot } => Some(*slot),
            ItemKind::Consumable => None,
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemKind::Consumable)
    }
}
