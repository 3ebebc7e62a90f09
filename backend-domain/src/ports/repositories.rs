use async_trait::async_trait;

use crate::entities::{
    DropTableRow,
    Expedition,
    ExpeditionLootRecord,
    InventoryGrant,
    LootItem,
    PlayerScore,
    NewExpedition,
    Rift,
    Team,
    TeamStats,
};
use crate::value_objects::{
    EquipmentSlot,
    ExpeditionId,
    GrantId,
    LootItemId,
    LeaderboardKind,
    Rarity,
    RiftId,
    TeamId,
    UserId,
};

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn get_team(&self, team_id: TeamId) -> anyhow::Result<Option<Team>>;
    async fn list_teams(&self, user_id: UserId) -> anyhow::Result<Vec<Team>>;
    /// Team 1 unlocked, teams 2-5 locked.
    async fn create_default_teams(&self, user_id: UserId) -> anyhow::Result<Vec<Team>>;
    /// Additive, permanent increase of the team's base stats.
    async fn add_base_stats(&self, team_id: TeamId, bonus: TeamStats) -> anyhow::Result<()>;
    async fn set_slot(
        &self,
        team_id: TeamId,
        slot: EquipmentSlot,
        grant_id: Option<GrantId>,
    ) -> anyhow::Result<()>;
    async fn set_unlocked(&self, team_id: TeamId) -> anyhow::Result<()>;
    async fn find_equipped(
        &self,
        user_id: UserId,
        grant_id: GrantId,
    ) -> anyhow::Result<Option<(Team, EquipmentSlot)>>;
}

#[async_trait]
pub trait RiftRepository: Send + Sync {
    async fn get_rift(&self, rift_id: RiftId) -> anyhow::Result<Option<Rift>>;
    async fn list_rifts(&self) -> anyhow::Result<Vec<Rift>>;
    async fn drop_table(&self, rift_id: RiftId) -> anyhow::Result<Vec<DropTableRow>>;
}

#[async_trait]
pub trait LootItemRepository: Send + Sync {
    async fn get_item(&self, item_id: LootItemId) -> anyhow::Result<Option<LootItem>>;
    async fn items_by_rarity_and_world(
        &self,
        rarity: Rarity,
        world_type: &str,
    ) -> anyhow::Result<Vec<LootItem>>;
}

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn get_grant(&self, grant_id: GrantId) -> anyhow::Result<Option<InventoryGrant>>;
    async fn find_grant(
        &self,
        user_id: UserId,
        item_id: LootItemId,
    ) -> anyhow::Result<Option<InventoryGrant>>;
    /// Equipment always inserts a fresh row; consumables increment the
    /// existing user/item row or insert one.
    async fn grant_item(&self, user_id: UserId, item: &LootItem) -> anyhow::Result<InventoryGrant>;
    /// Decrements quantity, removing the grant when it reaches zero.
    async fn consume_grant(&self, grant_id: GrantId) -> anyhow::Result<()>;
    async fn list_grants(&self, user_id: UserId) -> anyhow::Result<Vec<InventoryGrant>>;
}

#[async_trait]
pub trait ExpeditionRepository: Send + Sync {
    async fn create_expedition(&self, expedition: NewExpedition) -> anyhow::Result<Expedition>;
    async fn get_expedition(&self, expedition_id: ExpeditionId)
        -> anyhow::Result<Option<Expedition>>;
    /// Expeditions whose completed flag is still unset, newest first.
    async fn list_active(&self, user_id: UserId) -> anyhow::Result<Vec<Expedition>>;
    /// Expeditions whose completed flag is set, newest first.
    async fn list_completed(&self, user_id: UserId, limit: usize)
        -> anyhow::Result<Vec<Expedition>>;
    async fn completed_count(&self, user_id: UserId) -> anyhow::Result<u64>;
    async fn mark_completed(&self, expedition_id: ExpeditionId) -> anyhow::Result<()>;
    async fn mark_processed(&self, expedition_id: ExpeditionId) -> anyhow::Result<()>;
    async fn mark_claimed(&self, expedition_id: ExpeditionId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ExpeditionLootRepository: Send + Sync {
    async fn append_record(&self, record: ExpeditionLootRecord) -> anyhow::Result<()>;
    async fn list_records(&self, expedition_id: ExpeditionId)
        -> anyhow::Result<Vec<ExpeditionLootRecord>>;
}

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Unranked score of every player with any standing on `kind`.
    async fn player_scores(&self, kind: LeaderboardKind) -> anyhow::Result<Vec<PlayerScore>>;
}
