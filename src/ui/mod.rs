//! Presentation layer
//!
//! Game state is projected onto a [`Display`], a small set of "update region X"
//! operations. The browser build binds it to DOM elements ([`dom`]); native
//! builds write to the log ([`headless`]).

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;

use crate::error::UiError;
use crate::game::{Outcome, RoundState, Screen, ScoreState, ScreenState};

/// Element ids the page must provide
pub mod ids {
    pub const MENU_SCREEN: &str = "menuScreen";
    pub const GAME_SCREEN: &str = "gameScreen";
    pub const START_BTN: &str = "startBtn";
    pub const CREDITS_BTN: &str = "creditsBtn";
    pub const BACK_TO_MENU_BTN: &str = "backToMenuBtn";
    pub const CREDITS_MODAL: &str = "creditsModal";
    pub const CREDITS_BACK_BTN: &str = "creditsBackBtn";
    pub const PLAYER_CHOICE: &str = "playerChoice";
    pub const COMPUTER_CHOICE: &str = "computerChoice";
    pub const RESULT_TEXT: &str = "resultText";
    pub const PLAYER_SCORE: &str = "playerScore";
    pub const COMPUTER_SCORE: &str = "computerScore";
    pub const TIES_SCORE: &str = "tiesScore";
    pub const PLAY_AGAIN_BTN: &str = "playAgainBtn";
    pub const RESET_BTN: &str = "resetBtn";

    pub const REQUIRED: [&str; 15] = [
        MENU_SCREEN,
        GAME_SCREEN,
        START_BTN,
        CREDITS_BTN,
        BACK_TO_MENU_BTN,
        CREDITS_MODAL,
        CREDITS_BACK_BTN,
        PLAYER_CHOICE,
        COMPUTER_CHOICE,
        RESULT_TEXT,
        PLAYER_SCORE,
        COMPUTER_SCORE,
        TIES_SCORE,
        PLAY_AGAIN_BTN,
        RESET_BTN,
    ];
}

/// Fail on the first required id `exists` does not find
pub fn check_required(mut exists: impl FnMut(&str) -> bool) -> Result<(), UiError> {
    match ids::REQUIRED.iter().copied().find(|id| !exists(*id)) {
        Some(id) => Err(UiError::MissingElement { id }),
        None => Ok(()),
    }
}

/// Placeholder shown in the choice labels before a round
pub const PLACEHOLDER: &str = "—";

/// Named text regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PlayerChoice,
    ComputerChoice,
    PlayerScore,
    ComputerScore,
    Ties,
}

/// Visual category of the result banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTone {
    #[default]
    Idle,
    Win,
    Lose,
    Tie,
}

impl ResultTone {
    /// Every banner class, for removal before applying a new one
    pub const ALL: [ResultTone; 4] = [
        ResultTone::Idle,
        ResultTone::Win,
        ResultTone::Lose,
        ResultTone::Tie,
    ];

    pub fn css_class(&self) -> &'static str {
        match self {
            ResultTone::Idle => "result--idle",
            ResultTone::Win => "result--win",
            ResultTone::Lose => "result--lose",
            ResultTone::Tie => "result--tie",
        }
    }
}

impl From<Outcome> for ResultTone {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => ResultTone::Win,
            Outcome::Lose => ResultTone::Lose,
            Outcome::Tie => ResultTone::Tie,
        }
    }
}

/// Display surface the game renders onto
pub trait Display {
    /// Make `screen` the only visible screen
    fn show_screen(&mut self, screen: Screen);
    /// Show or hide the credits overlay (including its ARIA state)
    fn show_overlay(&mut self, open: bool);
    fn set_text(&mut self, region: Region, text: &str);
    fn set_result(&mut self, tone: ResultTone, text: &str);
}

pub fn render_screen<D: Display + ?Sized>(state: &ScreenState, display: &mut D) {
    display.show_screen(state.screen);
}

pub fn render_overlay<D: Display + ?Sized>(state: &ScreenState, display: &mut D) {
    display.show_overlay(state.overlay_open());
}

/// Choice labels and result banner
pub fn render_round<D: Display + ?Sized>(round: &RoundState, display: &mut D) {
    match round.last {
        Some(r) => {
            display.set_text(Region::PlayerChoice, r.player.label());
            display.set_text(Region::ComputerChoice, r.computer.label());
            display.set_result(r.outcome.into(), r.outcome.message());
        }
        None => {
            display.set_text(Region::PlayerChoice, PLACEHOLDER);
            display.set_text(Region::ComputerChoice, PLACEHOLDER);
            display.set_result(ResultTone::Idle, round.prompt.message());
        }
    }
}

pub fn render_scores<D: Display + ?Sized>(scores: ScoreState, display: &mut D) {
    display.set_text(Region::PlayerScore, &scores.player.to_string());
    display.set_text(Region::ComputerScore, &scores.computer.to_string());
    display.set_text(Region::Ties, &scores.ties.to_string());
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Keeps the latest value written to each region
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        pub screen: Option<Screen>,
        pub overlay_open: Option<bool>,
        pub texts: HashMap<Region, String>,
        pub result: Option<(ResultTone, String)>,
        pub writes: usize,
    }

    impl RecordingDisplay {
        pub fn text(&self, region: Region) -> &str {
            self.texts.get(&region).map(String::as_str).unwrap_or("")
        }

        pub fn tone(&self) -> Option<ResultTone> {
            self.result.as_ref().map(|(tone, _)| *tone)
        }

        pub fn message(&self) -> &str {
            self.result.as_ref().map(|(_, m)| m.as_str()).unwrap_or("")
        }
    }

    impl Display for RecordingDisplay {
        fn show_screen(&mut self, screen: Screen) {
            self.screen = Some(screen);
            self.writes += 1;
        }

        fn show_overlay(&mut self, open: bool) {
            self.overlay_open = Some(open);
            self.writes += 1;
        }

        fn set_text(&mut self, region: Region, text: &str) {
            self.texts.insert(region, text.to_string());
            self.writes += 1;
        }

        fn set_result(&mut self, tone: ResultTone, text: &str) {
            self.result = Some((tone, text.to_string()));
            self.writes += 1;
        }
    }
}
