use crate::value_objects::Affinity;

/// Flat power multiplier granted when a relic's affinity matches the rift's
/// weakness. Not scaled by rarity.
pub const ELEMENTAL_POWER_BONUS: f64 = 0.20;

pub fn elemental_bonus(relic_affinity: &Affinity, rift_weakness: &Affinity) -> f64 {
    if relic_affinity.is_active() && relic_affinity == rift_weakness {
        ELEMENTAL_POWER_BONUS
    } else {
        0.0
    }
}

/// Power after the elemental multiplier, truncated toward zero.
pub fn apply_power_bonus(power: i64, bonus: f64) -> i64 {
    if bonus <= 0.0 {
        return power;
    }
    (power as f64 * (1.0 + bonus)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_affinity_grants_flat_bonus() {
        assert_eq!(elemental_bonus(&"fire".into(), &"fire".into()), 0.20);
        assert_eq!(elemental_bonus(&"fire".into(), &"ice".into()), 0.0);
    }

    #[test]
    fn sentinel_and_empty_affinities_never_match() {
        assert_eq!(elemental_bonus(&"none".into(), &"none".into()), 0.0);
        assert_eq!(elemental_bonus(&"".into(), &"fire".into()), 0.0);
        assert_eq!(elemental_bonus(&"".into(), &"".into()), 0.0);
    }

    #[test]
    fn power_bonus_truncates() {
        assert_eq!(apply_power_bonus(10, 0.20), 12);
        assert_eq!(apply_power_bonus(7, 0.20), 8);
        assert_eq!(apply_power_bonus(7, 0.0), 7);
    }
}
