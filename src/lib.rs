//! RPS Showdown - Rock Paper Scissors in the browser
//!
//! Core modules:
//! - `game`: Rules and session state (choices, scores, screens)
//! - `session`: Input actions, round flow and rendering triggers
//! - `ui`: Display abstraction, render projections and the DOM adapter
//! - `audio`: Procedural beep cues via Web Audio
//! - `settings`: URL query configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod session;
pub mod settings;
pub mod ui;

pub use audio::{AudioManager, Cue, Feedback};
pub use error::UiError;
pub use session::{Action, Session};
pub use settings::Settings;

use game::RandomOpponent;

/// Opponent for a session: fixed seed from settings, otherwise `fallback_seed`
pub fn opponent_for(settings: &Settings, fallback_seed: u64) -> RandomOpponent {
    RandomOpponent::new(settings.seed.unwrap_or(fallback_seed))
}

/// Audio manager configured from settings
pub fn audio_for(settings: &Settings) -> AudioManager {
    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_muted(!settings.sound);
    audio
}
