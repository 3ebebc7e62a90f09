// Team entity
// One of a user's five expedition parties

use serde::{Deserialize, Serialize};

use crate::value_objects::{EquipmentSlot, GrantId, TeamId, UserId};

pub const TEAMS_PER_USER: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStats {
    pub speed: f64,
    pub luck: f64,
    pub power: i64,
}

impl TeamStats {
    pub fn new(speed: f64, luck: f64, power: i64) -> Self {
        Self { speed, luck, power }
    }

    pub fn add(&mut self, other: &TeamStats) {
        self.speed += other.speed;
        self.luck += other.luck;
        self.power += other.power;
    }
}

/// Inventory grants currently equipped on a team, one per slot category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquippedSlots {
    pub weapon: Option<GrantId>,
    pub armor: Option<GrantId>,
    pub accessory: Option<GrantId>,
    pub artifact: Option<GrantId>,
    pub relic: Option<GrantId>,
}

impl EquippedSlots {
    pub fn get(&self, slot: EquipmentSlot) -> Option<GrantId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Accessory => self.accessory,
            EquipmentSlot::Artifact => self.artifact,
            EquipmentSlot::Relic => self.relic,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, grant: Option<GrantId>) {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
            EquipmentSlot::Artifact => &mut self.artifact,
            EquipmentSlot::Relic => &mut self.relic,
        };
        *target = grant;
    }

    pub fn slot_of(&self, grant: GrantId) -> Option<EquipmentSlot> {
        EquipmentSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == Some(grant))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, GrantId)> + '_ {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|grant| (slot, grant)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub user_id: UserId,
    pub team_number: u8,
    pub is_unlocked: bool,
    pub base_stats: TeamStats,
    pub equipped: EquippedSlots,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_of_finds_the_slot_holding_a_grant() {
        let mut slots = EquippedSlots::default();
        slots.set(EquipmentSlot::Relic, Some(GrantId(7)));
        assert_eq!(slots.slot_of(GrantId(7)), Some(EquipmentSlot::Relic));
        assert_eq!(slots.slot_of(GrantId(8)), None);
        assert_eq!(slots.iter().count(), 1);
    }
}
