use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::dtos::RiftView;
use backend_application::queries::rift_queries;
use backend_application::AppState;
use backend_domain::RiftId;

use crate::error::HttpError;
use crate::middleware::authorize_caller;

pub async fn list_rifts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RiftView>>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let rifts = rift_queries::list_rifts(&state, caller).await?;
    Ok(Json(rifts))
}

pub async fn get_rift(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(rift_id): Path<i64>,
) -> Result<Json<RiftView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let rift = rift_queries::get_rift(&state, caller, RiftId(rift_id)).await?;
    Ok(Json(rift))
}
