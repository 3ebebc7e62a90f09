// Drop-table driven loot generation
//
// Rolls every row of the rift's drop table, grants each unit to the user and
// appends one audit record per unit. Persistence errors abort the loop as-is;
// grants already written stay written.

use tracing::{debug, error, warn};

use backend_domain::{
    pick_item,
    roll_tier,
    ExpeditionLootRecord,
    LootItem,
    Expedition,
    Rift,
    TeamStats,
};

use crate::{AppError, AppState};

pub async fn generate_loot(
    state: &AppState,
    expedition: &Expedition,
    rift: &Rift,
    team_stats: &TeamStats,
) -> Result<Vec<LootItem>, AppError> {
    // Luck is carried through for visibility only; rolls do not consult it.
    debug!(
        "generating loot for expedition {} (rift {}, luck {:.2})",
        expedition.id, rift.id, team_stats.luck
    );

    let rows = state.rift_repo.drop_table(rift.id).await?;
    let random = state.random.as_ref();
    let mut granted = Vec::new();

    for row in &rows {
        let Some(quantity) = roll_tier(row, random) else {
            continue;
        };

        let candidates = state
            .item_repo
            .items_by_rarity_and_world(row.rarity, &rift.world_type)
            .await?;

        for _ in 0..quantity {
            let Some(item) = pick_item(&candidates, random) else {
                warn!(
                    "no {} items for world {}; skipping {} unit(s)",
                    row.rarity.as_str(),
                    rift.world_type,
                    quantity
                );
                break;
            };

            if let Err(err) = state.inventory_repo.grant_item(expedition.user_id, item).await {
                error!("failed to grant item {} for expedition {}: {}", item.id, expedition.id, err);
                return Err(err.into());
            }
            let record = ExpeditionLootRecord {
                expedition_id: expedition.id,
                loot_item_id: item.id,
                quantity: 1,
            };
            if let Err(err) = state.loot_record_repo.append_record(record).await {
                error!("failed to record loot for expedition {}: {}", expedition.id, err);
                return Err(err.into());
            }
            granted.push(item.clone());
        }
    }

    Ok(granted)
}

/// Rebuilds the reward list of an expedition from its audit trail.
pub async fn recorded_loot(
    state: &AppState,
    expedition: &Expedition,
) -> Result<Vec<LootItem>, AppError> {
    let records = state.loot_record_repo.list_records(expedition.id).await?;
    let mut loot = Vec::with_capacity(records.len());
    for record in records {
        match state.item_repo.get_item(record.loot_item_id).await? {
            Some(item) => {
                for _ in 0..record.quantity {
                    loot.push(item.clone());
                }
            }
            None => warn!(
                "audit record for expedition {} references missing item {}",
                expedition.id, record.loot_item_id
            ),
        }
    }
    Ok(loot)
}
