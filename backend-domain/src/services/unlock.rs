use crate::entities::Rift;
use crate::value_objects::RiftId;

/// Human-readable requirement shown on a locked team.
pub fn team_unlock_requirement(team_number: u8) -> &'static str {
    match team_number {
        2 => "Complete 1 expedition to unlock",
        3 => "Complete 3 expeditions to unlock",
        4 => "Complete 25 expeditions to unlock",
        5 => "Complete 50 expeditions to unlock",
        _ => "Locked",
    }
}

/// Rift availability by difficulty tier and the user's completed expedition count.
pub fn is_rift_unlocked(rift: &Rift, completed_expeditions: u64) -> bool {
    if rift.difficulty == "tutorial" || rift.id == RiftId(1) {
        return true;
    }
    match rift.difficulty.as_str() {
        "easy" => true,
        "medium" => completed_expeditions >= 5,
        "hard" => completed_expeditions >= 15,
        "legendary" => completed_expeditions >= 30,
        _ => false,
    }
}
