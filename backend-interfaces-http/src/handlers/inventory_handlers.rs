use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::dtos::InventoryView;
use backend_application::queries::inventory_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize_caller;

pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InventoryView>, HttpError> {
    let caller = authorize_caller(&state.config, &headers)?;
    let inventory = inventory_queries::get_inventory(&state, caller).await?;
    Ok(Json(inventory))
}
