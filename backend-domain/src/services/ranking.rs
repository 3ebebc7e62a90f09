use crate::entities::{PlayerScore, RankedPlayer};
use crate::value_objects::Rarity;

pub const TOP_PLAYERS_LIMIT: usize = 20;

/// Per-unit weight of a held item on the power board.
pub fn rarity_weight(rarity: Rarity) -> i64 {
    match rarity {
        Rarity::Common => 1,
        Rarity::Uncommon => 5,
        Rarity::Rare => 25,
        Rarity::Epic => 125,
        Rarity::Legendary => 1000,
    }
}

/// Orders by score descending, then user id ascending, and assigns
/// competition ranks (1, 1, 3). Players without a positive score are left off.
pub fn assign_ranks(scores: Vec<PlayerScore>) -> Vec<RankedPlayer> {
    let mut scores: Vec<PlayerScore> = scores.into_iter().filter(|s| s.score > 0).collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));

    let mut ranked: Vec<RankedPlayer> = Vec::with_capacity(scores.len());
    for (position, entry) in scores.iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.score == entry.score => prev.rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedPlayer {
            rank,
            user_id: entry.user_id,
            score: entry.score,
        });
    }
    ranked
}
