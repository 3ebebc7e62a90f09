// Leaderboard kind value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardKind {
    /// Legendary item units held.
    Legendary,
    /// Rarity-weighted inventory score.
    Power,
    /// Completed expeditions.
    Expeditions,
}

impl LeaderboardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardKind::Legendary => "legendary",
            LeaderboardKind::Power => "power",
            LeaderboardKind::Expeditions => "expeditions",
        }
    }
}

impl std::str::FromStr for LeaderboardKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legendary" => Ok(LeaderboardKind::Legendary),
            "power" => Ok(LeaderboardKind::Power),
            "expeditions" => Ok(LeaderboardKind::Expeditions),
            other => Err(anyhow::anyhow!("invalid leaderboard type '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_boards_only() {
        assert_eq!(
            "power".parse::<LeaderboardKind>().expect("board"),
            LeaderboardKind::Power
        );
        assert!("Power".parse::<LeaderboardKind>().is_err());
        assert!("gold".parse::<LeaderboardKind>().is_err());
    }
}
