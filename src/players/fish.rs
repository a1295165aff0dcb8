use crate::gameplay::State;
use crate::gameroom::Judge;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU judge that calls Yes or No at random.
/// Never leaves the table on its own.
#[derive(Debug, Clone)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Judge for Fish {
    fn decide(&mut self, _: &State) -> anyhow::Result<Option<bool>> {
        Ok(Some(self.0.random_bool(0.5)))
    }
}
