use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    expedition_handlers,
    inventory_handlers,
    leaderboard_handlers,
    ops_handlers,
    rift_handlers,
    team_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/onboard", post(team_handlers::onboard))
        .route("/v1/teams", get(team_handlers::list_teams))
        .route("/v1/teams/equip", post(team_handlers::equip_item))
        .route("/v1/teams/unequip", post(team_handlers::unequip_item))
        .route("/v1/teams/consume", post(team_handlers::consume_item))
        .route("/v1/teams/:team_id", get(team_handlers::get_team))
        .route("/v1/teams/:team_id/unlock", post(team_handlers::unlock_team))
        .route("/v1/inventory", get(inventory_handlers::get_inventory))
        .route("/v1/rifts", get(rift_handlers::list_rifts))
        .route("/v1/rifts/:rift_id", get(rift_handlers::get_rift))
        .route(
            "/v1/expeditions/start",
            post(expedition_handlers::start_expedition),
        )
        .route(
            "/v1/expeditions/active",
            get(expedition_handlers::active_expeditions),
        )
        .route(
            "/v1/expeditions/history",
            get(expedition_handlers::expedition_history),
        )
        .route(
            "/v1/expeditions/:expedition_id/claim",
            post(expedition_handlers::claim_rewards),
        )
        .route(
            "/v1/leaderboard/:board",
            get(leaderboard_handlers::get_leaderboard),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
