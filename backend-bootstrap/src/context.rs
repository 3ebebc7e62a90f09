use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, Metrics};
use backend_domain::{Clock, RandomSource, RuntimeConfig};
use backend_infrastructure::{AppConfig, Catalog, InMemoryStore, StdRandomSource, SystemClock};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let catalog = Catalog::load(&runtime_config.catalog_path).await?;

        let random: Arc<dyn RandomSource> = Arc::new(StdRandomSource::new(config.rng_seed));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let state = build_state(runtime_config, catalog, random, clock);

        Ok(Self { state })
    }
}

/// Wires every repository port to one in-memory store seeded with `catalog`.
pub fn build_state(
    config: RuntimeConfig,
    catalog: Catalog,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
) -> AppState {
    let store = Arc::new(InMemoryStore::new(catalog, clock.clone()));
    AppState {
        config,
        team_repo: store.clone(),
        rift_repo: store.clone(),
        item_repo: store.clone(),
        inventory_repo: store.clone(),
        expedition_repo: store.clone(),
        loot_record_repo: store.clone(),
        leaderboard_repo: store,
        random,
        clock,
        metrics: Arc::new(Metrics::default()),
    }
}
