// Response views returned by commands and queries

use chrono::{DateTime, Utc};
use serde::Serialize;

use backend_domain::{
    Affinity,
    Expedition,
    ExpeditionId,
    ExpeditionState,
    GrantId,
    LeaderboardKind,
    LootItem,
    LootItemId,
    RankedPlayer,
    Rarity,
    Rift,
    RiftId,
    TeamId,
    TeamStats,
    UserId,
};

#[derive(Debug, Clone, Serialize)]
pub struct EquippedItemView {
    pub inventory_id: GrantId,
    pub loot_item_id: LootItemId,
    pub name: String,
    pub icon: String,
    pub rarity: Rarity,
    pub speed_bonus: f64,
    pub luck_bonus: f64,
    pub power_bonus: i64,
    pub elemental_affinity: Affinity,
}

impl EquippedItemView {
    pub fn new(grant_id: GrantId, item: &LootItem) -> Self {
        Self {
            inventory_id: grant_id,
            loot_item_id: item.id,
            name: item.name.clone(),
            icon: item.icon.clone(),
            rarity: item.rarity,
            speed_bonus: item.speed_bonus,
            luck_bonus: item.luck_bonus,
            power_bonus: item.power_bonus,
            elemental_affinity: item.elemental_affinity.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EquipmentView {
    pub weapon: Option<EquippedItemView>,
    pub armor: Option<EquippedItemView>,
    pub accessory: Option<EquippedItemView>,
    pub artifact: Option<EquippedItemView>,
    pub relic: Option<EquippedItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub id: TeamId,
    pub team_number: u8,
    pub is_unlocked: bool,
    pub base_stats: TeamStats,
    pub total_stats: TeamStats,
    pub equipment: EquipmentView,
    pub on_expedition: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expedition: Option<ExpeditionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_requirement: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpeditionView {
    pub id: ExpeditionId,
    pub team_id: TeamId,
    pub team_number: u8,
    pub rift_id: RiftId,
    pub rift_name: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub completion_time: DateTime<Utc>,
    /// Seconds until completion; absent once claimed.
    pub time_remaining: Option<i64>,
    pub state: ExpeditionState,
    pub is_completed: bool,
    pub is_claimed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot: Option<Vec<LootItem>>,
}

impl ExpeditionView {
    pub fn new(
        expedition: &Expedition,
        rift_name: &str,
        team_number: u8,
        now: DateTime<Utc>,
        loot: Option<Vec<LootItem>>,
    ) -> Self {
        let time_remaining = if expedition.claimed {
            None
        } else {
            Some(expedition.remaining_seconds_at(now))
        };
        Self {
            id: expedition.id,
            team_id: expedition.team_id,
            team_number,
            rift_id: expedition.rift_id,
            rift_name: rift_name.to_string(),
            start_time: expedition.start_time,
            duration_minutes: expedition.duration_minutes,
            completion_time: expedition.completion_time(),
            time_remaining,
            state: expedition.state_at(now),
            is_completed: expedition.is_complete_at(now),
            is_claimed: expedition.claimed,
            loot,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpeditionRewards {
    pub expedition_id: ExpeditionId,
    pub loot: Vec<LootItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemView {
    pub inventory_id: GrantId,
    pub quantity: u32,
    pub acquired_at: DateTime<Utc>,
    pub is_equipped: bool,
    pub equipped_by_team_number: Option<u8>,
    pub loot_item: LootItem,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryView {
    pub equipment: Vec<InventoryItemView>,
    pub consumables: Vec<InventoryItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiftView {
    #[serde(flatten)]
    pub rift: Rift,
    pub is_unlocked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub score: i64,
    pub is_current_user: bool,
}

impl LeaderboardEntry {
    pub fn new(player: &RankedPlayer, caller: UserId) -> Self {
        Self {
            rank: player.rank,
            user_id: player.user_id,
            score: player.score,
            is_current_user: player.user_id == caller,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardView {
    pub leaderboard_type: LeaderboardKind,
    pub generated_at: DateTime<Utc>,
    pub top_players: Vec<LeaderboardEntry>,
    /// The caller's own standing when it falls outside `top_players`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_rank: Option<LeaderboardEntry>,
}
