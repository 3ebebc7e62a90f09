#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use backend_application::AppState;
use backend_bootstrap::build_state;
use backend_domain::{
    Clock,
    GrantId,
    InventoryGrant,
    LootItemId,
    RandomSource,
    RuntimeConfig,
    TeamId,
    UserId,
};
use backend_infrastructure::{validate_catalog, Catalog};

pub const CATALOG: &str = r#"
rifts:
  - id: 1
    name: Ember Gate
    world_type: fire
    duration_minutes: 60
    difficulty: tutorial
    weak_to_element: ice
  - id: 2
    name: Frost Hollow
    world_type: ice
    duration_minutes: 30
    difficulty: medium
    weak_to_element: fire
  - id: 3
    name: Ashfall Verge
    world_type: ash
    duration_minutes: 10
    difficulty: easy
loot_items:
  - id: 10
    name: Ashen Blade
    rarity: common
    world_type: fire
    kind: equipment
    slot: weapon
    speed_bonus: 5
  - id: 11
    name: Cinder Mail
    rarity: common
    world_type: fire
    kind: equipment
    slot: armor
    power_bonus: 3
  - id: 12
    name: Swift Tonic
    rarity: common
    world_type: fire
    kind: consumable
    speed_bonus: 10
    luck_bonus: 1
    power_bonus: 4
  - id: 13
    name: Amber Salve
    rarity: common
    world_type: fire
    kind: consumable
    luck_bonus: 2
  - id: 20
    name: Glacier Shard
    rarity: common
    world_type: ice
    kind: equipment
    slot: weapon
    speed_bonus: 2
  - id: 30
    name: Rimebound Idol
    rarity: epic
    world_type: void
    kind: equipment
    slot: relic
    power_bonus: 10
    elemental_affinity: ice
  - id: 31
    name: Rime Charm
    rarity: epic
    world_type: void
    kind: equipment
    slot: accessory
    power_bonus: 10
    elemental_affinity: ice
  - id: 32
    name: Ember Idol
    rarity: epic
    world_type: void
    kind: equipment
    slot: relic
    power_bonus: 10
    elemental_affinity: fire
  - id: 33
    name: Hollow Crown
    rarity: legendary
    world_type: void
    kind: equipment
    slot: artifact
drop_tables:
  - rift_id: 1
    rarity: common
    drop_rate_percent: 100
    min_quantity: 2
    max_quantity: 2
  - rift_id: 1
    rarity: rare
    drop_rate_percent: 0
    min_quantity: 1
    max_quantity: 1
  - rift_id: 2
    rarity: common
    drop_rate_percent: 50
    min_quantity: 1
    max_quantity: 3
  - rift_id: 3
    rarity: common
    drop_rate_percent: 100
    min_quantity: 2
    max_quantity: 2
"#;

pub const BLADE: LootItemId = LootItemId(10);
pub const MAIL: LootItemId = LootItemId(11);
pub const TONIC: LootItemId = LootItemId(12);
pub const SALVE: LootItemId = LootItemId(13);
pub const ICE_IDOL: LootItemId = LootItemId(30);
pub const ICE_CHARM: LootItemId = LootItemId(31);
pub const FIRE_IDOL: LootItemId = LootItemId(32);
pub const CROWN: LootItemId = LootItemId(33);

/// Scripted draws; an exhausted script rolls 0.0 and picks index 0.
#[derive(Default)]
pub struct ScriptedRandom {
    rolls: Mutex<VecDeque<f64>>,
    picks: Mutex<VecDeque<usize>>,
}

impl ScriptedRandom {
    pub fn push_rolls(&self, rolls: &[f64]) {
        self.rolls.lock().unwrap().extend(rolls.iter().copied());
    }

    pub fn push_picks(&self, picks: &[usize]) {
        self.picks.lock().unwrap().extend(picks.iter().copied());
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_percent(&self) -> f64 {
        self.rolls.lock().unwrap().pop_front().unwrap_or(0.0)
    }

    fn pick_index(&self, len: usize) -> usize {
        let pick = self.picks.lock().unwrap().pop_front().unwrap_or(0);
        assert!(pick < len, "scripted pick {} out of range {}", pick, len);
        pick
    }
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance_minutes(&self, minutes: i64) {
        *self.now.lock().unwrap() += Duration::minutes(minutes);
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.now.lock().unwrap() += Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct Harness {
    pub state: AppState,
    pub random: Arc<ScriptedRandom>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new() -> Self {
        let catalog = Catalog::from_yaml(CATALOG).expect("catalog parses");
        validate_catalog(&catalog).expect("catalog is valid");
        let random = Arc::new(ScriptedRandom::default());
        let clock = Arc::new(ManualClock::new());
        let state = build_state(
            RuntimeConfig::default(),
            catalog,
            random.clone(),
            clock.clone(),
        );
        Self {
            state,
            random,
            clock,
        }
    }

    /// Onboards `user` and returns the ids of teams 1 through 5.
    pub async fn onboard(&self, user: UserId) -> Vec<TeamId> {
        let teams = backend_application::commands::team_commands::onboard_user(&self.state, user)
            .await
            .expect("onboard");
        teams.into_iter().map(|team| team.id).collect()
    }

    pub async fn give(&self, user: UserId, item_id: LootItemId) -> InventoryGrant {
        let item = self
            .state
            .item_repo
            .get_item(item_id)
            .await
            .expect("item lookup")
            .expect("catalog item");
        self.state
            .inventory_repo
            .grant_item(user, &item)
            .await
            .expect("grant")
    }

    pub async fn grant(&self, grant_id: GrantId) -> Option<InventoryGrant> {
        self.state
            .inventory_repo
            .get_grant(grant_id)
            .await
            .expect("grant lookup")
    }
}
