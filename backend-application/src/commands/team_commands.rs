use tracing::{debug, info};

use backend_domain::{EquipmentSlot, GrantId, ItemKind, TeamId, UserId};

use crate::dtos::TeamView;
use crate::lookup::{load_item, load_owned_grant, load_owned_team};
use crate::queries::team_queries::{get_team, list_teams};
use crate::{AppError, AppState};

/// Creates the default five teams on first sight of a user. Repeat calls
/// return the existing teams untouched.
pub async fn onboard_user(state: &AppState, user_id: UserId) -> Result<Vec<TeamView>, AppError> {
    let existing = state.team_repo.list_teams(user_id).await?;
    if existing.is_empty() {
        state.team_repo.create_default_teams(user_id).await?;
        info!("onboarded user {}", user_id);
    }
    list_teams(state, user_id).await
}

pub async fn equip_item(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
    slot: EquipmentSlot,
    grant_id: GrantId,
) -> Result<TeamView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    let grant = load_owned_grant(state, user_id, grant_id).await?;
    let item = load_item(state, grant.loot_item_id).await?;

    match item.kind {
        ItemKind::Consumable => return Err(AppError::NotEquipment),
        ItemKind::Equipment { slot: item_slot } if item_slot != slot => {
            return Err(AppError::SlotMismatch)
        }
        ItemKind::Equipment { .. } => {}
    }

    if team.equipped.get(slot) == Some(grant.id) {
        debug!("grant {} already in {} of team {}", grant.id, slot.as_str(), team.id);
        return get_team(state, user_id, team_id).await;
    }

    if let Some((holder, held_slot)) = state.team_repo.find_equipped(user_id, grant.id).await? {
        state.team_repo.set_slot(holder.id, held_slot, None).await?;
        debug!(
            "moved grant {} off team {} ({})",
            grant.id,
            holder.team_number,
            held_slot.as_str()
        );
    }
    state.team_repo.set_slot(team.id, slot, Some(grant.id)).await?;
    info!(
        "equipped {} on team {} ({})",
        item.name,
        team.team_number,
        slot.as_str()
    );

    get_team(state, user_id, team_id).await
}

/// Clearing an empty slot succeeds.
pub async fn unequip_item(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
    slot: EquipmentSlot,
) -> Result<TeamView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    state.team_repo.set_slot(team.id, slot, None).await?;
    get_team(state, user_id, team_id).await
}

/// Applies a consumable's bonuses to the team's base stats for good and uses
/// up one unit of the grant.
pub async fn consume_item(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
    grant_id: GrantId,
) -> Result<TeamView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    let grant = load_owned_grant(state, user_id, grant_id).await?;
    let item = load_item(state, grant.loot_item_id).await?;
    if !item.kind.is_consumable() {
        return Err(AppError::NotConsumable);
    }

    state.team_repo.add_base_stats(team.id, item.bonuses()).await?;
    state.inventory_repo.consume_grant(grant.id).await?;
    info!("team {} consumed {}", team.team_number, item.name);

    get_team(state, user_id, team_id).await
}

pub async fn unlock_team(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
) -> Result<TeamView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    if !team.is_unlocked {
        state.team_repo.set_unlocked(team.id).await?;
        info!("unlocked team {} for user {}", team.team_number, user_id);
    }
    get_team(state, user_id, team_id).await
}
