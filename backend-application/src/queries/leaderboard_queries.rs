use tracing::debug;

use backend_domain::{assign_ranks, LeaderboardKind, UserId, TOP_PLAYERS_LIMIT};

use crate::dtos::{LeaderboardEntry, LeaderboardView};
use crate::{AppError, AppState};

/// Ranks every player on `board` ("legendary", "power" or "expeditions") and
/// marks the caller. Scores are computed on demand from live data.
pub async fn get_leaderboard(
    state: &AppState,
    user_id: UserId,
    board: &str,
) -> Result<LeaderboardView, AppError> {
    let kind: LeaderboardKind = board
        .parse()
        .map_err(|err: anyhow::Error| AppError::BadRequest(err.to_string()))?;

    let ranked = assign_ranks(state.leaderboard_repo.player_scores(kind).await?);
    debug!("{} leaderboard: {} ranked player(s)", kind.as_str(), ranked.len());

    let top_players: Vec<LeaderboardEntry> = ranked
        .iter()
        .take(TOP_PLAYERS_LIMIT)
        .map(|player| LeaderboardEntry::new(player, user_id))
        .collect();
    let current_user_rank = if top_players.iter().any(|entry| entry.is_current_user) {
        None
    } else {
        ranked
            .iter()
            .find(|player| player.user_id == user_id)
            .map(|player| LeaderboardEntry::new(player, user_id))
    };

    Ok(LeaderboardView {
        leaderboard_type: kind,
        generated_at: state.clock.now(),
        top_players,
        current_user_rank,
    })
}
