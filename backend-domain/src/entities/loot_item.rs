// Loot item entity
// Immutable catalog definition of a droppable item

use serde::{Deserialize, Serialize};

use crate::entities::TeamStats;
use crate::value_objects::{Affinity, ItemKind, LootItemId, Rarity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootItem {
    pub id: LootItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    pub world_type: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    #[serde(default)]
    pub speed_bonus: f64,
    #[serde(default)]
    pub luck_bonus: f64,
    #[serde(default)]
    pub power_bonus: i64,
    #[serde(default = "Affinity::none")]
    pub elemental_affinity: Affinity,
    #[serde(default)]
    pub power_value: i64,
    #[serde(default)]
    pub icon: String,
}

impl LootItem {
    pub fn bonuses(&self) -> TeamStats {
        TeamStats::new(self.speed_bonus, self.luck_bonus, self.power_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::EquipmentSlot;

    #[test]
    fn kind_is_flattened_into_the_item() {
        let item: LootItem = serde_json::from_str(
            r#"{"id":3,"name":"Storm Charm","rarity":"epic","world_type":"sky",
                "kind":"equipment","slot":"accessory","luck_bonus":4.5}"#,
        )
        .expect("parse");
        assert_eq!(item.kind, ItemKind::Equipment { slot: EquipmentSlot::Accessory });
        assert_eq!(item.elemental_affinity, Affinity::none());
        assert_eq!(item.bonuses(), TeamStats::new(0.0, 4.5, 0));

        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(value["kind"], "equipment");
        assert_eq!(value["slot"], "accessory");
    }

    #[test]
    fn consumables_carry_no_slot() {
        let item: LootItem = serde_json::from_str(
            r#"{"id":4,"name":"Tonic","rarity":"common","world_type":"sky","kind":"consumable"}"#,
        )
        .expect("parse");
        assert!(item.kind.is_consumable());
        assert_eq!(item.kind.slot(), None);
    }
}
