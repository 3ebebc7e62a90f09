use backend_domain::NotOwner;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    NotOwner(#[from] NotOwner),
    #[error("team is not unlocked")]
    TeamLocked,
    #[error("rewards already claimed")]
    AlreadyClaimed,
    #[error("expedition not yet complete")]
    NotYetComplete,
    #[error("item is not equipment")]
    NotEquipment,
    #[error("item is not consumable")]
    NotConsumable,
    #[error("item does not match slot type")]
    SlotMismatch,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
