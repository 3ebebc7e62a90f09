use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    expeditions_started: AtomicU64,
    rewards_claimed: AtomicU64,
    loot_units_granted: AtomicU64,
    claim_failures: AtomicU64,
}

impl Metrics {
    pub fn record_expedition_started(&self) {
        self.expeditions_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_claim(&self, loot_units: usize) {
        self.rewards_claimed.fetch_add(1, Ordering::Relaxed);
        self.loot_units_granted
            .fetch_add(loot_units as u64, Ordering::Relaxed);
    }

    pub fn record_claim_failure(&self) {
        self.claim_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn expeditions_started(&self) -> u64 {
        self.expeditions_started.load(Ordering::Relaxed)
    }

    pub fn rewards_claimed(&self) -> u64 {
        self.rewards_claimed.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let started = self.expeditions_started.load(Ordering::Relaxed);
        let claimed = self.rewards_claimed.load(Ordering::Relaxed);
        let units = self.loot_units_granted.load(Ordering::Relaxed);
        let failures = self.claim_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE riftwalk_expeditions_started_total counter\n\
riftwalk_expeditions_started_total {}\n\
# TYPE riftwalk_rewards_claimed_total counter\n\
riftwalk_rewards_claimed_total {}\n\
# TYPE riftwalk_loot_units_granted_total counter\n\
riftwalk_loot_units_granted_total {}\n\
# TYPE riftwalk_claim_failures_total counter\n\
riftwalk_claim_failures_total {}\n",
            started, claimed, units, failures
        )
    }
}
