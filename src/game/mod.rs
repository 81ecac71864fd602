//! Game rules and session state
//!
//! Pure logic only: no DOM, no audio. Everything here runs natively in tests.

pub mod choice;
pub mod opponent;
pub mod round;
pub mod score;
pub mod screen;

pub use choice::{Choice, Outcome, resolve};
pub use opponent::{Opponent, RandomOpponent};
pub use round::{IdlePrompt, Round, RoundState};
pub use score::{ScoreState, ScoreTracker};
pub use screen::{Overlay, Screen, ScreenState};
