use std::sync::Arc;

use backend_domain::ports::{
    Clock,
    ExpeditionLootRepository,
    ExpeditionRepository,
    InventoryRepository,
    LeaderboardRepository,
    LootItemRepository,
    RandomSource,
    RiftRepository,
    TeamRepository,
};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub team_repo: Arc<dyn TeamRepository>,
    pub rift_repo: Arc<dyn RiftRepository>,
    pub item_repo: Arc<dyn LootItemRepository>,
    pub inventory_repo: Arc<dyn InventoryRepository>,
    pub expedition_repo: Arc<dyn ExpeditionRepository>,
    pub loot_record_repo: Arc<dyn ExpeditionLootRepository>,
    pub leaderboard_repo: Arc<dyn LeaderboardRepository>,
    pub random: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
    pub metrics: Arc<Metrics>,
}
