// Expedition entity
// Time-boxed visit of a team to a rift: Active -> Completed -> Claimed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ExpeditionId, LootItemId, RiftId, TeamId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expedition {
    pub id: ExpeditionId,
    pub user_id: UserId,
    pub team_id: TeamId,
    pub rift_id: RiftId,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub completed: bool,
    pub processed: bool,
    pub claimed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpeditionState {
    Active,
    Completed,
    Claimed,
}

impl Expedition {
    pub fn completion_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Completion is a wall-clock predicate; the stored flag may lag behind it.
    pub fn is_complete_at(&self, now: DateTime<Utc>) -> bool {
        self.completed || now >= self.completion_time()
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> ExpeditionState {
        if self.claimed {
            ExpeditionState::Claimed
        } else if self.is_complete_at(now) {
            ExpeditionState::Completed
        } else {
            ExpeditionState::Active
        }
    }

    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        (self.completion_time() - now).num_seconds().max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpedition {
    pub user_id: UserId,
    pub team_id: TeamId,
    pub rift_id: RiftId,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
}

/// Append-only audit row, one per granted unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionLootRecord {
    pub expedition_id: ExpeditionId,
    pub loot_item_id: LootItemId,
    pub quantity: u32,
}
