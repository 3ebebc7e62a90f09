use std::collections::HashMap;

use tracing::warn;

use backend_domain::{GrantId, UserId};

use crate::dtos::{InventoryItemView, InventoryView};
use crate::{AppError, AppState};

pub async fn get_inventory(state: &AppState, user_id: UserId) -> Result<InventoryView, AppError> {
    let grants = state.inventory_repo.list_grants(user_id).await?;
    let teams = state.team_repo.list_teams(user_id).await?;

    let equipped_by: HashMap<GrantId, u8> = teams
        .iter()
        .flat_map(|team| {
            team.equipped
                .iter()
                .map(move |(_, grant_id)| (grant_id, team.team_number))
        })
        .collect();

    let mut inventory = InventoryView::default();
    for grant in grants {
        let Some(item) = state.item_repo.get_item(grant.loot_item_id).await? else {
            warn!("grant {} references missing item {}", grant.id, grant.loot_item_id);
            continue;
        };
        let team_number = equipped_by.get(&grant.id).copied();
        let consumable = item.kind.is_consumable();
        let view = InventoryItemView {
            inventory_id: grant.id,
            quantity: grant.quantity,
            acquired_at: grant.acquired_at,
            is_equipped: team_number.is_some(),
            equipped_by_team_number: team_number,
            loot_item: item,
        };
        if consumable {
            inventory.consumables.push(view);
        } else {
            inventory.equipment.push(view);
        }
    }

    inventory.equipment.sort_by(|a, b| {
        b.acquired_at
            .cmp(&a.acquired_at)
            .then(b.inventory_id.cmp(&a.inventory_id))
    });
    inventory
        .consumables
        .sort_by(|a, b| a.loot_item.name.cmp(&b.loot_item.name));
    Ok(inventory)
}
