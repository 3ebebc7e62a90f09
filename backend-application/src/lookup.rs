// Entity loaders shared by commands and queries

use std::collections::HashMap;

use tracing::warn;

use backend_domain::{
    ensure_owned,
    EquipmentSlot,
    Expedition,
    ExpeditionId,
    GrantId,
    InventoryGrant,
    LootItem,
    LootItemId,
    Rift,
    RiftId,
    Team,
    TeamId,
    UserId,
};

use crate::{AppError, AppState};

pub(crate) async fn load_team(state: &AppState, team_id: TeamId) -> Result<Team, AppError> {
    state
        .team_repo
        .get_team(team_id)
        .await?
        .ok_or(AppError::NotFound("team"))
}

pub(crate) async fn load_owned_team(
    state: &AppState,
    caller: UserId,
    team_id: TeamId,
) -> Result<Team, AppError> {
    let team = load_team(state, team_id).await?;
    ensure_owned(caller, &team)?;
    Ok(team)
}

pub(crate) async fn load_owned_grant(
    state: &AppState,
    caller: UserId,
    grant_id: GrantId,
) -> Result<InventoryGrant, AppError> {
    let grant = state
        .inventory_repo
        .get_grant(grant_id)
        .await?
        .ok_or(AppError::NotFound("inventory item"))?;
    ensure_owned(caller, &grant)?;
    Ok(grant)
}

pub(crate) async fn load_item(state: &AppState, item_id: LootItemId) -> Result<LootItem, AppError> {
    state
        .item_repo
        .get_item(item_id)
        .await?
        .ok_or(AppError::NotFound("loot item"))
}

pub(crate) async fn load_rift(state: &AppState, rift_id: RiftId) -> Result<Rift, AppError> {
    state
        .rift_repo
        .get_rift(rift_id)
        .await?
        .ok_or(AppError::NotFound("rift"))
}

pub(crate) async fn load_expedition(
    state: &AppState,
    expedition_id: ExpeditionId,
) -> Result<Expedition, AppError> {
    state
        .expedition_repo
        .get_expedition(expedition_id)
        .await?
        .ok_or(AppError::NotFound("expedition"))
}

/// Resolves the catalog item behind an equipped grant. A dangling reference
/// reads as an empty slot.
pub(crate) async fn equipped_item(
    state: &AppState,
    grant_id: GrantId,
) -> Result<Option<LootItem>, AppError> {
    let Some(grant) = state.inventory_repo.get_grant(grant_id).await? else {
        warn!("equipped grant {} no longer exists", grant_id);
        return Ok(None);
    };
    let item = state.item_repo.get_item(grant.loot_item_id).await?;
    if item.is_none() {
        warn!("catalog item {} for grant {} is missing", grant.loot_item_id, grant_id);
    }
    Ok(item)
}

/// Every slot category of the team, `None` where nothing is equipped.
pub(crate) async fn equipped_items(
    state: &AppState,
    team: &Team,
) -> Result<HashMap<EquipmentSlot, Option<LootItem>>, AppError> {
    let mut items = HashMap::new();
    for slot in EquipmentSlot::ALL {
        let item = match team.equipped.get(slot) {
            Some(grant_id) => equipped_item(state, grant_id).await?,
            None => None,
        };
        items.insert(slot, item);
    }
    Ok(items)
}
