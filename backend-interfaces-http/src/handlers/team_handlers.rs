use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use backend_application::commands::team_commands;
use backend_application::dtos::TeamView;
use backend_application::queries::team_queries;
use backend_application::AppState;
use backend_domain::{EquipmentSlot, GrantId, TeamId};

use crate::error::HttpError;
use crate::middleware::authorize_caller;

#[derive(Debug, Deserialize)]
pub struct EquipRequest {
    pub team_id: TeamId,
    pub slot: String,
    pub inventory_id: GrantId,
}

#[derive(Debug, Deserialize)]
pub struct UnequipRequest {
    pub team_id: TeamId,
    pub slot: String,
}

#[derive(Debug, Deserialize)]
pub struct ConsumeRequest {
    pub team_id: TeamId,
    pub inventory_id: GrantId,
}

fn parse_slot(value: &str) -> Result<EquipmentSlot, HttpError> {
    value
        .parse()
        .map_err(|err: anyhow::Error| HttpError::BadRequest(err.to_string()))
}

pub async fn onboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TeamView>>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let teams = team_commands::onboard_user(&state, caller).await?;
    Ok(Json(teams))
}

pub async fn list_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TeamView>>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let teams = team_queries::list_teams(&state, caller).await?;
    Ok(Json(teams))
}

pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let team = team_queries::get_team(&state, caller, TeamId(team_id)).await?;
    Ok(Json(team))
}

pub async fn equip_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EquipRequest>,
) -> Result<Json<TeamView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let slot = parse_slot(&payload.slot)?;
    let team =
        team_commands::equip_item(&state, caller, payload.team_id, slot, payload.inventory_id)
            .await?;
    Ok(Json(team))
}

pub async fn unequip_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UnequipRequest>,
) -> Result<Json<TeamView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let slot = parse_slot(&payload.slot)?;
    let team = team_commands::unequip_item(&state, caller, payload.team_id, slot).await?;
    Ok(Json(team))
}

pub async fn consume_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ConsumeRequest>,
) -> Result<Json<TeamView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let team =
        team_commands::consume_item(&state, caller, payload.team_id, payload.inventory_id).await?;
    Ok(Json(team))
}

pub async fn unlock_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let team = team_commands::unlock_team(&state, caller, TeamId(team_id)).await?;
    Ok(Json(team))
}
