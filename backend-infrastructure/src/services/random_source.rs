use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use backend_domain::RandomSource;

/// Process-wide pseudorandom source behind the loot generator.
pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    /// Fixed seed when given, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                warn!("random source running with fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                info!("random source seeded from entropy");
                StdRng::from_entropy()
            }
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw leaves the generator usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut rng)
    }
}

impl RandomSource for StdRandomSource {
    fn roll_percent(&self) -> f64 {
        self.with_rng(|rng| rng.gen_range(0.0..100.0))
    }

    fn pick_index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..len))
    }
}
