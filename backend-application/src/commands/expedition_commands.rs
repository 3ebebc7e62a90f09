use tracing::{debug, error, info};

use backend_domain::{
    aggregate_stats,
    apply_power_bonus,
    elemental_bonus,
    ensure_owned,
    expedition_duration,
    EquipmentSlot,
    ExpeditionId,
    NewExpedition,
    Rift,
    RiftId,
    Team,
    TeamId,
    TeamStats,
    UserId,
};

use crate::dtos::{ExpeditionRewards, ExpeditionView};
use crate::loot_generator::{generate_loot, recorded_loot};
use crate::lookup::{equipped_items, load_expedition, load_owned_team, load_rift, load_team};
use crate::{AppError, AppState};

pub async fn start_expedition(
    state: &AppState,
    user_id: UserId,
    team_id: TeamId,
    rift_id: RiftId,
) -> Result<ExpeditionView, AppError> {
    let team = load_owned_team(state, user_id, team_id).await?;
    if !team.is_unlocked {
        return Err(AppError::TeamLocked);
    }
    let rift = load_rift(state, rift_id).await?;

    let stats = expedition_stats(state, &team, &rift).await?;
    let duration_minutes = expedition_duration(&stats, rift.duration_minutes);
    let now = state.clock.now();
    let expedition = state
        .expedition_repo
        .create_expedition(NewExpedition {
            user_id,
            team_id,
            rift_id,
            start_time: now,
            duration_minutes,
        })
        .await?;

    state.metrics.record_expedition_started();
    info!(
        "expedition {} started: team {} -> rift {} for {} min",
        expedition.id, team.team_number, rift.name, duration_minutes
    );

    Ok(ExpeditionView::new(
        &expedition,
        &rift.name,
        team.team_number,
        now,
        None,
    ))
}

/// Team stats as they stand when departing for `rift`: base plus equipment,
/// with the relic's elemental bonus folded into power.
pub async fn expedition_stats(
    state: &AppState,
    team: &Team,
    rift: &Rift,
) -> Result<TeamStats, AppError> {
    let equipped = equipped_items(state, team).await?;
    let mut stats = aggregate_stats(team, &equipped);

    if let Some(Some(relic)) = equipped.get(&EquipmentSlot::Relic) {
        let bonus = elemental_bonus(&relic.elemental_affinity, &rift.weak_to_element);
        if bonus > 0.0 {
            stats.power = apply_power_bonus(stats.power, bonus);
            debug!(
                "relic {} matches weakness {} of rift {}; power now {}",
                relic.name,
                rift.weak_to_element.as_str(),
                rift.id,
                stats.power
            );
        }
    }
    Ok(stats)
}

pub async fn claim_rewards(
    state: &AppState,
    user_id: UserId,
    expedition_id: ExpeditionId,
) -> Result<ExpeditionRewards, AppError> {
    let result = claim(state, user_id, expedition_id).await;
    if let Err(err) = &result {
        state.metrics.record_claim_failure();
        if matches!(err, AppError::Internal(_)) {
            error!("claim of expedition {} failed: {}", expedition_id, err);
        }
    }
    result
}

async fn claim(
    state: &AppState,
    user_id: UserId,
    expedition_id: ExpeditionId,
) -> Result<ExpeditionRewards, AppError> {
    let expedition = load_expedition(state, expedition_id).await?;
    ensure_owned(user_id, &expedition)?;
    if expedition.claimed {
        return Err(AppError::AlreadyClaimed);
    }
    let now = state.clock.now();
    if now < expedition.completion_time() {
        return Err(AppError::NotYetComplete);
    }

    let loot = if expedition.processed {
        // Generation finished on an earlier attempt; hand back what was granted.
        info!("expedition {} already processed, replaying recorded loot", expedition.id);
        recorded_loot(state, &expedition).await?
    } else {
        let rift = load_rift(state, expedition.rift_id).await?;
        let team = load_team(state, expedition.team_id).await?;
        let equipped = equipped_items(state, &team).await?;
        let stats = aggregate_stats(&team, &equipped);

        let loot = generate_loot(state, &expedition, &rift, &stats).await?;
        state.expedition_repo.mark_processed(expedition.id).await?;
        loot
    };

    if !expedition.completed {
        state.expedition_repo.mark_completed(expedition.id).await?;
    }
    state.expedition_repo.mark_claimed(expedition.id).await?;

    state.metrics.record_claim(loot.len());
    info!(
        "expedition {} claimed by user {}: {} item(s)",
        expedition.id,
        user_id,
        loot.len()
    );

    Ok(ExpeditionRewards {
        expedition_id: expedition.id,
        loot,
    })
}
