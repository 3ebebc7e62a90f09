// Elemental affinity value object

use serde::{Deserialize, Serialize};

pub const NO_AFFINITY: &str = "none";

/// Free-form element tag shared by relic affinities and rift weaknesses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Affinity(pub String);

impl Affinity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn none() -> Self {
        Self(NO_AFFINITY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty tags and the "none" sentinel never match anything.
    pub fn is_active(&self) -> bool {
        !self.0.is_empty() && self.0 != NO_AFFINITY
    }
}

impl From<&str> for Affinity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
