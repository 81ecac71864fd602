//! Transient state of the last played round

use serde::{Deserialize, Serialize};

use super::choice::{Choice, Outcome};

/// One resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

/// Prompt shown while no round is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdlePrompt {
    #[default]
    Pick,
    ScoresReset,
}

impl IdlePrompt {
    pub fn message(&self) -> &'static str {
        match self {
            IdlePrompt::Pick => "Pick Rock, Paper, or Scissors!",
            IdlePrompt::ScoresReset => "Scores reset! Pick a move!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundState {
    /// `None` until a round is played after the last clear
    pub last: Option<Round>,
    pub prompt: IdlePrompt,
}

impl RoundState {
    pub fn played(&self) -> bool {
        self.last.is_some()
    }

    pub fn set(&mut self, round: Round) {
        self.last = Some(round);
    }

    /// Back to the idle display with the given prompt
    pub fn clear(&mut self, prompt: IdlePrompt) {
        self.last = None;
        self.prompt = prompt;
    }
}
