use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use backend_application::commands::expedition_commands;
use backend_application::dtos::{ExpeditionRewards, ExpeditionView};
use backend_application::queries::expedition_queries;
use backend_application::AppState;
use backend_domain::{ExpeditionId, RiftId, TeamId};

use crate::error::HttpError;
use crate::middleware::authorize_caller;

#[derive(Debug, Deserialize)]
pub struct StartExpeditionRequest {
    pub team_id: TeamId,
    pub rift_id: RiftId,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

pub async fn start_expedition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StartExpeditionRequest>,
) -> Result<(StatusCode, Json<ExpeditionView>), HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let expedition =
        expedition_commands::start_expedition(&state, caller, payload.team_id, payload.rift_id)
            .await?;
    Ok((StatusCode::CREATED, Json(expedition)))
}

pub async fn active_expeditions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ExpeditionView>>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let expeditions = expedition_queries::active_expeditions(&state, caller).await?;
    Ok(Json(expeditions))
}

pub async fn expedition_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ExpeditionView>>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let expeditions = expedition_queries::expedition_history(&state, caller, query.limit).await?;
    Ok(Json(expeditions))
}

pub async fn claim_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(expedition_id): Path<i64>,
) -> Result<Json<ExpeditionRewards>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let rewards =
        expedition_commands::claim_rewards(&state, caller, ExpeditionId(expedition_id)).await?;
    Ok(Json(rewards))
}
