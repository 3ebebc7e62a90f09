use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{
    rarity_weight,
    Clock,
    DropTableRow,
    EquipmentSlot,
    EquippedSlots,
    Expedition,
    ExpeditionId,
    ExpeditionLootRecord,
    ExpeditionLootRepository,
    ExpeditionRepository,
    GrantId,
    InventoryGrant,
    InventoryRepository,
    LeaderboardKind,
    LeaderboardRepository,
    LootItem,
    LootItemId,
    LootItemRepository,
    NewExpedition,
    PlayerScore,
    Rarity,
    Rift,
    RiftId,
    RiftRepository,
    Team,
    TeamId,
    TeamRepository,
    TeamStats,
    UserId,
    TEAMS_PER_USER,
};

use crate::repositories::Catalog;

#[derive(Default)]
struct Tables {
    teams: BTreeMap<TeamId, Team>,
    grants: BTreeMap<GrantId, InventoryGrant>,
    expeditions: BTreeMap<ExpeditionId, Expedition>,
    loot_records: Vec<ExpeditionLootRecord>,
    next_team_id: i64,
    next_grant_id: i64,
    next_expedition_id: i64,
}

/// Process-local persistence backing every repository port. Catalog data is
/// fixed at construction; player data lives behind a single lock, held only
/// for the duration of one call.
pub struct InMemoryStore {
    rifts: BTreeMap<RiftId, Rift>,
    items: BTreeMap<LootItemId, LootItem>,
    drop_tables: Vec<DropTableRow>,
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        Self {
            rifts: catalog.rifts.into_iter().map(|rift| (rift.id, rift)).collect(),
            items: catalog
                .loot_items
                .into_iter()
                .map(|item| (item.id, item))
                .collect(),
            drop_tables: catalog.drop_tables,
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        Ok(self.tables.read().await.teams.get(&team_id).cloned())
    }

    async fn list_teams(&self, user_id: UserId) -> Result<Vec<Team>> {
        let tables = self.tables.read().await;
        let mut teams: Vec<Team> = tables
            .teams
            .values()
            .filter(|team| team.user_id == user_id)
            .cloned()
            .collect();
        teams.sort_by_key(|team| team.team_number);
        Ok(teams)
    }

    async fn create_default_teams(&self, user_id: UserId) -> Result<Vec<Team>> {
        let mut tables = self.tables.write().await;
        let mut created = Vec::with_capacity(usize::from(TEAMS_PER_USER));
        for team_number in 1..=TEAMS_PER_USER {
            let team = Team {
                id: TeamId(next_id(&mut tables.next_team_id)),
                user_id,
                team_number,
                is_unlocked: team_number == 1,
                base_stats: TeamStats::default(),
                equipped: EquippedSlots::default(),
            };
            tables.teams.insert(team.id, team.clone());
            created.push(team);
        }
        Ok(created)
    }

    async fn add_base_stats(&self, team_id: TeamId, bonus: TeamStats) -> Result<()> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| anyhow!("team {} not found", team_id))?;
        team.base_stats.add(&bonus);
        Ok(())
    }

    async fn set_slot(
        &self,
        team_id: TeamId,
        slot: EquipmentSlot,
        grant_id: Option<GrantId>,
    ) -> Result<()> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| anyhow!("team {} not found", team_id))?;
        team.equipped.set(slot, grant_id);
        Ok(())
    }

    async fn set_unlocked(&self, team_id: TeamId) -> Result<()> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| anyhow!("team {} not found", team_id))?;
        team.is_unlocked = true;
        Ok(())
    }

    async fn find_equipped(
        &self,
        user_id: UserId,
        grant_id: GrantId,
    ) -> Result<Option<(Team, EquipmentSlot)>> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .values()
            .filter(|team| team.user_id == user_id)
            .find_map(|team| {
                team.equipped
                    .slot_of(grant_id)
                    .map(|slot| (team.clone(), slot))
            }))
    }
}

#[async_trait]
impl RiftRepository for InMemoryStore {
    async fn get_rift(&self, rift_id: RiftId) -> Result<Option<Rift>> {
        Ok(self.rifts.get(&rift_id).cloned())
    }

    async fn list_rifts(&self) -> Result<Vec<Rift>> {
        Ok(self.rifts.values().cloned().collect())
    }

    async fn drop_table(&self, rift_id: RiftId) -> Result<Vec<DropTableRow>> {
        Ok(self
            .drop_tables
            .iter()
            .filter(|row| row.rift_id == rift_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LootItemRepository for InMemoryStore {
    async fn get_item(&self, item_id: LootItemId) -> Result<Option<LootItem>> {
        Ok(self.items.get(&item_id).cloned())
    }

    async fn items_by_rarity_and_world(
        &self,
        rarity: Rarity,
        world_type: &str,
    ) -> Result<Vec<LootItem>> {
        Ok(self
            .items
            .values()
            .filter(|item| item.rarity == rarity && item.world_type == world_type)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryStore {
    async fn get_grant(&self, grant_id: GrantId) -> Result<Option<InventoryGrant>> {
        Ok(self.tables.read().await.grants.get(&grant_id).cloned())
    }

    async fn find_grant(
        &self,
        user_id: UserId,
        item_id: LootItemId,
    ) -> Result<Option<InventoryGrant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .grants
            .values()
            .find(|grant| grant.user_id == user_id && grant.loot_item_id == item_id)
            .cloned())
    }

    async fn grant_item(&self, user_id: UserId, item: &LootItem) -> Result<InventoryGrant> {
        let now = self.clock.now();
        let mut tables = self.tables.write().await;

        if item.kind.is_consumable() {
            let existing = tables
                .grants
                .values_mut()
                .find(|grant| grant.user_id == user_id && grant.loot_item_id == item.id);
            if let Some(grant) = existing {
                grant.quantity += 1;
                return Ok(grant.clone());
            }
        }

        let grant = InventoryGrant {
            id: GrantId(next_id(&mut tables.next_grant_id)),
            user_id,
            loot_item_id: item.id,
            quantity: 1,
            acquired_at: now,
        };
        tables.grants.insert(grant.id, grant.clone());
        Ok(grant)
    }

    async fn consume_grant(&self, grant_id: GrantId) -> Result<()> {
        let mut tables = self.tables.write().await;
        let grant = tables
            .grants
            .get_mut(&grant_id)
            .ok_or_else(|| anyhow!("inventory grant {} not found", grant_id))?;
        if grant.quantity > 1 {
            grant.quantity -= 1;
        } else {
            tables.grants.remove(&grant_id);
        }
        Ok(())
    }

    async fn list_grants(&self, user_id: UserId) -> Result<Vec<InventoryGrant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .grants
            .values()
            .filter(|grant| grant.user_id == user_id)
            .cloned()
            .collect())
    }
}

fn newest_first(expeditions: &mut [Expedition]) {
    expeditions.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl ExpeditionRepository for InMemoryStore {
    async fn create_expedition(&self, expedition: NewExpedition) -> Result<Expedition> {
        let mut tables = self.tables.write().await;
        let created = Expedition {
            id: ExpeditionId(next_id(&mut tables.next_expedition_id)),
            user_id: expedition.user_id,
            team_id: expedition.team_id,
            rift_id: expedition.rift_id,
            start_time: expedition.start_time,
            duration_minutes: expedition.duration_minutes,
            completed: false,
            processed: false,
            claimed: false,
        };
        tables.expeditions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_expedition(&self, expedition_id: ExpeditionId) -> Result<Option<Expedition>> {
        Ok(self.tables.read().await.expeditions.get(&expedition_id).cloned())
    }

    async fn list_active(&self, user_id: UserId) -> Result<Vec<Expedition>> {
        let tables = self.tables.read().await;
        let mut active: Vec<Expedition> = tables
            .expeditions
            .values()
            .filter(|e| e.user_id == user_id && !e.completed)
            .cloned()
            .collect();
        newest_first(&mut active);
        Ok(active)
    }

    async fn list_completed(&self, user_id: UserId, limit: usize) -> Result<Vec<Expedition>> {
        let tables = self.tables.read().await;
        let mut completed: Vec<Expedition> = tables
            .expeditions
            .values()
            .filter(|e| e.user_id == user_id && e.completed)
            .cloned()
            .collect();
        newest_first(&mut completed);
        completed.truncate(limit);
        Ok(completed)
    }

    async fn completed_count(&self, user_id: UserId) -> Result<u64> {
        let tables = self.tables.read().await;
        Ok(tables
            .expeditions
            .values()
            .filter(|e| e.user_id == user_id && e.completed)
            .count() as u64)
    }

    async fn mark_completed(&self, expedition_id: ExpeditionId) -> Result<()> {
        self.update_expedition(expedition_id, |e| e.completed = true).await
    }

    async fn mark_processed(&self, expedition_id: ExpeditionId) -> Result<()> {
        self.update_expedition(expedition_id, |e| e.processed = true).await
    }

    async fn mark_claimed(&self, expedition_id: ExpeditionId) -> Result<()> {
        self.update_expedition(expedition_id, |e| e.claimed = true).await
    }
}

impl InMemoryStore {
    async fn update_expedition(
        &self,
        expedition_id: ExpeditionId,
        update: impl FnOnce(&mut Expedition) + Send,
    ) -> Result<()> {
        let mut tables = self.tables.write().await;
        let expedition = tables
            .expeditions
            .get_mut(&expedition_id)
            .ok_or_else(|| anyhow!("expedition {} not found", expedition_id))?;
        update(expedition);
        Ok(())
    }
}

#[async_trait]
impl ExpeditionLootRepository for InMemoryStore {
    async fn append_record(&self, record: ExpeditionLootRecord) -> Result<()> {
        self.tables.write().await.loot_records.push(record);
        Ok(())
    }

    async fn list_records(&self, expedition_id: ExpeditionId) -> Result<Vec<ExpeditionLootRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .loot_records
            .iter()
            .filter(|record| record.expedition_id == expedition_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryStore {
    async fn player_scores(&self, kind: LeaderboardKind) -> Result<Vec<PlayerScore>> {
        let tables = self.tables.read().await;
        let mut totals: BTreeMap<UserId, i64> = BTreeMap::new();

        match kind {
            LeaderboardKind::Expeditions => {
                for expedition in tables.expeditions.values().filter(|e| e.completed) {
                    *totals.entry(expedition.user_id).or_default() += 1;
                }
            }
            LeaderboardKind::Legendary | LeaderboardKind::Power => {
                for grant in tables.grants.values() {
                    let Some(item) = self.items.get(&grant.loot_item_id) else {
                        continue;
                    };
                    let weight = match kind {
                        LeaderboardKind::Legendary if item.rarity == Rarity::Legendary => 1,
                        LeaderboardKind::Legendary => 0,
                        _ => rarity_weight(item.rarity),
                    };
                    *totals.entry(grant.user_id).or_default() += i64::from(grant.quantity) * weight;
                }
            }
        }

        Ok(totals
            .into_iter()
            .map(|(user_id, score)| PlayerScore { user_id, score })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use backend_domain::{Affinity, ItemKind};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn item(id: i64, kind: ItemKind) -> LootItem {
        LootItem {
            id: LootItemId(id),
            name: format!("item-{}", id),
            description: String::new(),
            rarity: Rarity::Common,
            world_type: "fire".to_string(),
            kind,
            speed_bonus: 1.0,
            luck_bonus: 0.0,
            power_bonus: 0,
            elemental_affinity: Affinity::none(),
            power_value: 0,
            icon: String::new(),
        }
    }

    fn store() -> InMemoryStore {
        let catalog = Catalog {
            rifts: Vec::new(),
            loot_items: vec![
                item(1, ItemKind::Equipment { slot: EquipmentSlot::Weapon }),
                item(2, ItemKind::Consumable),
            ],
            drop_tables: Vec::new(),
        };
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()));
        InMemoryStore::new(catalog, clock)
    }

    #[tokio::test]
    async fn default_teams_unlock_only_first() {
        let store = store();
        store.create_default_teams(UserId(7)).await.expect("create");
        let teams = store.list_teams(UserId(7)).await.expect("list");
        assert_eq!(teams.len(), 5);
        assert!(teams[0].is_unlocked);
        assert!(teams[1..].iter().all(|team| !team.is_unlocked));
        assert_eq!(
            teams.iter().map(|t| t.team_number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[tokio::test]
    async fn equipment_gets_a_row_per_grant_and_consumables_stack() {
        let store = store();
        let weapon = store.get_item(LootItemId(1)).await.unwrap().unwrap();
        let potion = store.get_item(LootItemId(2)).await.unwrap().unwrap();

        let a = store.grant_item(UserId(1), &weapon).await.expect("grant");
        let b = store.grant_item(UserId(1), &weapon).await.expect("grant");
        assert_ne!(a.id, b.id);

        let first = store.grant_item(UserId(1), &potion).await.expect("grant");
        let second = store.grant_item(UserId(1), &potion).await.expect("grant");
        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 2);
        assert_eq!(store.list_grants(UserId(1)).await.unwrap().len(), 3);

        let found = store
            .find_grant(UserId(1), LootItemId(2))
            .await
            .unwrap()
            .expect("stacked row");
        assert_eq!(found.id, first.id);
        assert!(store.find_grant(UserId(2), LootItemId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn consume_decrements_then_removes() {
        let store = store();
        let potion = store.get_item(LootItemId(2)).await.unwrap().unwrap();
        store.grant_item(UserId(1), &potion).await.expect("grant");
        let grant = store.grant_item(UserId(1), &potion).await.expect("grant");

        store.consume_grant(grant.id).await.expect("consume");
        let remaining = store.get_grant(grant.id).await.unwrap().expect("still there");
        assert_eq!(remaining.quantity, 1);

        store.consume_grant(grant.id).await.expect("consume");
        assert!(store.get_grant(grant.id).await.unwrap().is_none());
        assert!(store.consume_grant(grant.id).await.is_err());
    }

    #[tokio::test]
    async fn find_equipped_is_scoped_to_user() {
        let store = store();
        let teams = store.create_default_teams(UserId(1)).await.unwrap();
        store
            .set_slot(teams[2].id, EquipmentSlot::Armor, Some(GrantId(9)))
            .await
            .unwrap();

        let (team, slot) = store
            .find_equipped(UserId(1), GrantId(9))
            .await
            .unwrap()
            .expect("equipped");
        assert_eq!(team.team_number, 3);
        assert_eq!(slot, EquipmentSlot::Armor);
        assert!(store.find_equipped(UserId(2), GrantId(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn power_scores_weight_held_units_by_rarity() {
        let store = store();
        let weapon = store.get_item(LootItemId(1)).await.unwrap().unwrap();
        let potion = store.get_item(LootItemId(2)).await.unwrap().unwrap();
        store.grant_item(UserId(1), &weapon).await.unwrap();
        store.grant_item(UserId(1), &potion).await.unwrap();
        store.grant_item(UserId(1), &potion).await.unwrap();
        store.grant_item(UserId(2), &weapon).await.unwrap();

        let power = store.player_scores(LeaderboardKind::Power).await.unwrap();
        assert_eq!(
            power,
            vec![
                PlayerScore {
                    user_id: UserId(1),
                    score: 3,
                },
                PlayerScore {
                    user_id: UserId(2),
                    score: 1,
                },
            ]
        );

        let legendary = store.player_scores(LeaderboardKind::Legendary).await.unwrap();
        assert!(legendary.iter().all(|entry| entry.score == 0));
        assert!(store
            .player_scores(LeaderboardKind::Expeditions)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn completed_listing_respects_flag_and_limit() {
        let store = store();
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        for minutes in 0..3 {
            store
                .create_expedition(NewExpedition {
                    user_id: UserId(1),
                    team_id: TeamId(1),
                    rift_id: RiftId(1),
                    start_time: start + chrono::Duration::minutes(minutes),
                    duration_minutes: 5,
                })
                .await
                .unwrap();
        }
        store.mark_completed(ExpeditionId(1)).await.unwrap();
        store.mark_completed(ExpeditionId(3)).await.unwrap();

        let active = store.list_active(UserId(1)).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, ExpeditionId(2));

        let history = store.list_completed(UserId(1), 1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, ExpeditionId(3));
        assert_eq!(store.completed_count(UserId(1)).await.unwrap(), 2);
    }
}
