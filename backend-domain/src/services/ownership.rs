use thiserror::Error;

use crate::entities::{Expedition, InventoryGrant, Team};
use crate::value_objects::UserId;

/// Entities carrying an explicit owning user.
pub trait Owned {
    const KIND: &'static str;

    fn owner(&self) -> UserId;
}

impl Owned for Team {
    const KIND: &'static str = "team";

    fn owner(&self) -> UserId {
        self.user_id
    }
}

impl Owned for InventoryGrant {
    const KIND: &'static str = "inventory item";

    fn owner(&self) -> UserId {
        self.user_id
    }
}

impl Owned for Expedition {
    const KIND: &'static str = "expedition";

    fn owner(&self) -> UserId {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{entity} does not belong to user")]
pub struct NotOwner {
    pub entity: &'static str,
}

pub fn ensure_owned<T: Owned>(caller: UserId, entity: &T) -> Result<(), NotOwner> {
    if entity.owner() == caller {
        Ok(())
    } else {
        Err(NotOwner { entity: T::KIND })
    }
}
