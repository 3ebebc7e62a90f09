use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::dtos::LeaderboardView;
use backend_application::queries::leaderboard_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize_caller;

pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(board): Path<String>,
) -> Result<Json<LeaderboardView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let leaderboard = leaderboard_queries::get_leaderboard(&state, caller, &board).await?;
    Ok(Json(leaderboard))
}
