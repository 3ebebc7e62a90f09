use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use backend_domain::{DropTableRow, LootItem, Rift};

use crate::config::validate_catalog;

/// Read-only game catalog: rifts, the items they can drop and the per-rarity
/// drop tables tying them together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rifts: Vec<Rift>,
    #[serde(default)]
    pub loot_items: Vec<LootItem>,
    #[serde(default)]
    pub drop_tables: Vec<DropTableRow>,
}

impl Catalog {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|err| anyhow!("invalid catalog: {}", err))
    }

    pub async fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(anyhow!("catalog file {} not found", path));
        }
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("read catalog {}", path))?;
        let catalog = Self::from_yaml(&content)?;
        validate_catalog(&catalog)?;
        info!(
            "catalog loaded: {} rifts, {} loot items, {} drop table rows",
            catalog.rifts.len(),
            catalog.loot_items.len(),
            catalog.drop_tables.len()
        );
        Ok(catalog)
    }
}
