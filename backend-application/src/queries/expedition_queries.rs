use backend_domain::{Expedition, UserId};

use crate::dtos::ExpeditionView;
use crate::loot_generator::recorded_loot;
use crate::lookup::{load_rift, load_team};
use crate::{AppError, AppState};

pub async fn active_expeditions(
    state: &AppState,
    user_id: UserId,
) -> Result<Vec<ExpeditionView>, AppError> {
    let expeditions = state.expedition_repo.list_active(user_id).await?;
    let mut views = Vec::with_capacity(expeditions.len());
    for expedition in &expeditions {
        views.push(expedition_view(state, expedition, false).await?);
    }
    Ok(views)
}

/// Completed expeditions, newest first. Claimed entries carry the loot from
/// their audit trail.
pub async fn expedition_history(
    state: &AppState,
    user_id: UserId,
    limit: Option<usize>,
) -> Result<Vec<ExpeditionView>, AppError> {
    let limit = history_limit(state, limit);
    let expeditions = state.expedition_repo.list_completed(user_id, limit).await?;
    let mut views = Vec::with_capacity(expeditions.len());
    for expedition in &expeditions {
        views.push(expedition_view(state, expedition, expedition.claimed).await?);
    }
    Ok(views)
}

fn history_limit(state: &AppState, requested: Option<usize>) -> usize {
    match requested {
        Some(0) | None => state.config.history_default_limit,
        Some(limit) => limit.min(state.config.history_max_limit),
    }
}

async fn expedition_view(
    state: &AppState,
    expedition: &Expedition,
    include_loot: bool,
) -> Result<ExpeditionView, AppError> {
    let team = load_team(state, expedition.team_id).await?;
    let rift = load_rift(state, expedition.rift_id).await?;
    let loot = if include_loot {
        Some(recorded_loot(state, expedition).await?)
    } else {
        None
    };
    Ok(ExpeditionView::new(
        expedition,
        &rift.name,
        team.team_number,
        state.clock.now(),
        loot,
    ))
}
