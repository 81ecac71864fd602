//! Computer opponent

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::choice::Choice;

/// Source of the computer's moves
pub trait Opponent {
    fn next_choice(&mut self) -> Choice;
}

/// Uniformly random opponent backed by a seeded PCG
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    seed: u64,
    rng: Pcg32,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this opponent was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Opponent for RandomOpponent {
    fn next_choice(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }
}
