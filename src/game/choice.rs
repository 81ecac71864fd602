//! Choices, outcomes and the beats-relation

use serde::{Deserialize, Serialize};

/// A move one side picks for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in button order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Tag used in `data-choice` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// Parse a payload tag. Only the exact lowercase tags are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rock" => Some(Choice::Rock),
            "paper" => Some(Choice::Paper),
            "scissors" => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Human-readable label with its emoji
    pub fn label(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock 🪨",
            Choice::Paper => "Paper 📄",
            Choice::Scissors => "Scissors ✂️",
        }
    }

    /// The choice this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

/// Result of a round from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        }
    }

    /// Result banner text
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win! 🎉",
            Outcome::Lose => "You Lose! 😵",
            Outcome::Tie => "Tie! 🤝",
        }
    }
}

/// Decide a round
#[inline]
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
