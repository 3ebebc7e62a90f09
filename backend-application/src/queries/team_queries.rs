use tracing::warn;

use backend_domain::{
    aggregate_stats,
    team_unlock_requirement,
    EquipmentSlot,
    Expedition,
    Team,
    TeamId,
    UserId,
};

use crate::dtos::{EquipmentView, EquippedItemView, ExpeditionView, TeamView};
use crate::lookup::{equipped_items, load_owned_team};
use crate::{AppError, AppState};

pub async fn list_teams(state: &AppState, user_id: UserId) -> Result<Vec<TeamView>, AppError> {
    let teams = state.team_repo.list_teams(user_id).await?;
    let active = state.expedition_repo.list_active(user_id).await?;

    let mut views = Vec::with_capacity(teams.len());
    for team in &teams {
        views.push(build_team_view(state, team, &active).await?);
    }
    Ok(views)
}

pub async fn get_team(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
) -> Result<TeamView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    let active = state.expedition_repo.list_active(user_id).await?;
    build_team_view(state, &team, &active).await
}

/// Team view with equipment, aggregated stats and the active expedition, if
/// any, drawn from `active`.
pub async fn build_team_view(
    state: &AppState,
    team: &Team,
    active: &[Expedition],
) -> Result<TeamView, AppError> {
    let equipped = equipped_items(state, team).await?;
    let total_stats = aggregate_stats(team, &equipped);

    let mut equipment = EquipmentView::default();
    for (slot, grant_id) in team.equipped.iter() {
        let Some(Some(item)) = equipped.get(&slot) else {
            continue;
        };
        let view = Some(EquippedItemView::new(grant_id, item));
        match slot {
            EquipmentSlot::Weapon => equipment.weapon = view,
            EquipmentSlot::Armor => equipment.armor = view,
            EquipmentSlot::Accessory => equipment.accessory = view,
            EquipmentSlot::Artifact => equipment.artifact = view,
            EquipmentSlot::Relic => equipment.relic = view,
        }
    }

    let mut expedition = None;
    let on_expedition = match active.iter().find(|e| e.team_id == team.id) {
        Some(current) => {
            match state.rift_repo.get_rift(current.rift_id).await? {
                Some(rift) => {
                    expedition = Some(ExpeditionView::new(
                        current,
                        &rift.name,
                        team.team_number,
                        state.clock.now(),
                        None,
                    ));
                }
                None => warn!("rift {} of expedition {} is missing", current.rift_id, current.id),
            }
            true
        }
        None => false,
    };

    let unlock_requirement = if team.is_unlocked {
        None
    } else {
        Some(team_unlock_requirement(team.team_number).to_string())
    };

    Ok(TeamView {
        id: team.id,
        team_number: team.team_number,
        is_unlocked: team.is_unlocked,
        base_stats: team.base_stats,
        total_stats,
        equipment,
        on_expedition,
        expedition,
        unlock_requirement,
    })
}
