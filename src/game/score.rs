//! Session score tally

use serde::{Deserialize, Serialize};

use super::choice::Outcome;

/// Read-only view of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub player: u32,
    pub computer: u32,
    pub ties: u32,
}

/// Win/loss/tie counters. Mutated only by round outcomes or a reset.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    state: ScoreState,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved round
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win => &mut self.state.player,
            Outcome::Lose => &mut self.state.computer,
            Outcome::Tie => &mut self.state.ties,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.state = ScoreState::default();
    }

    pub fn snapshot(&self) -> ScoreState {
        self.state
    }
}
