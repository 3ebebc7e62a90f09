use backend_domain::{is_rift_unlocked, RiftId, UserId};

use crate::dtos::RiftView;
use crate::lookup::load_rift;
use crate::{AppError, AppState};

pub async fn list_rifts(state: &AppState, user_id: UserId) -> Result<Vec<RiftView>, AppError> {
    let rifts = state.rift_repo.list_rifts().await?;
    let completed = state.expedition_repo.completed_count(user_id).await?;
    Ok(rifts
        .into_iter()
        .map(|rift| RiftView {
            is_unlocked: is_rift_unlocked(&rift, completed),
            rift,
        })
        .collect())
}

pub async fn get_rift(
    state: &AppState,
    user_id: UserId,
    rift_id: RiftId,
) -> Result<RiftView, AppError> {
    let rift = load_rift(state, rift_id).await?;
    let completed = state.expedition_repo.completed_count(user_id).await?;
    Ok(RiftView {
        is_unlocked: is_rift_unlocked(&rift, completed),
        rift,
    })
}
