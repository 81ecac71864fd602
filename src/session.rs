//! Session controller
//!
//! Owns all session state and drives the round flow:
//! input action -> state mutation -> render -> feedback cue.

use serde::Serialize;

use crate::audio::{Cue, Feedback};
use crate::game::{
    Choice, IdlePrompt, Opponent, Round, RoundState, ScoreState, ScoreTracker, ScreenState,
    resolve,
};
use crate::ui::{self, Display};

/// Discrete user inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    OpenCredits,
    CloseCredits,
    /// Click on the credits backdrop
    CloseCreditsBackdrop,
    /// Escape while the credits are open
    CancelKey,
    ReturnToMenu,
    Choose(Choice),
    PlayAgain,
    ResetScores,
}

impl Action {
    /// Whether the action is acknowledged with a click cue
    pub fn clicks(&self) -> bool {
        !matches!(self, Action::CancelKey | Action::Choose(_))
    }
}

/// Serializable view of the session, for debug logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub screen: ScreenState,
    pub round: RoundState,
    pub scores: ScoreState,
}

/// One game session: state plus the collaborators it drives
pub struct Session<O, D, F> {
    screen: ScreenState,
    round: RoundState,
    scores: ScoreTracker,
    opponent: O,
    display: D,
    feedback: F,
}

impl<O: Opponent, D: Display, F: Feedback> Session<O, D, F> {
    /// Create a session on the menu and render it in full
    pub fn new(opponent: O, display: D, feedback: F) -> Self {
        let mut session = Self {
            screen: ScreenState::new(),
            round: RoundState::default(),
            scores: ScoreTracker::new(),
            opponent,
            display,
            feedback,
        };
        session.render_all();
        session
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn scores(&self) -> ScoreState {
        self.scores.snapshot()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            round: self.round,
            scores: self.scores(),
        }
    }

    /// Handle one input action to completion
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("action {:?}", action);
        if action.clicks() {
            self.feedback.emit(Cue::Click);
        }

        match action {
            Action::Start => self.start(),
            Action::OpenCredits => self.open_credits(),
            Action::CloseCredits | Action::CloseCreditsBackdrop | Action::CancelKey => {
                self.close_credits()
            }
            Action::ReturnToMenu => self.return_to_menu(),
            Action::Choose(choice) => self.play_round(choice),
            Action::PlayAgain => self.clear_round(),
            Action::ResetScores => self.reset_session(),
        }

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&self.snapshot()) {
                log::debug!("state {}", json);
            }
        }
    }

    /// Enter the game screen with a fresh round display
    pub fn start(&mut self) {
        self.screen.start();
        ui::render_screen(&self.screen, &mut self.display);
        self.clear_round();
        ui::render_scores(self.scores(), &mut self.display);
    }

    pub fn return_to_menu(&mut self) {
        self.screen.return_to_menu();
        ui::render_screen(&self.screen, &mut self.display);
        ui::render_overlay(&self.screen, &mut self.display);
        self.clear_round();
    }

    pub fn open_credits(&mut self) {
        if self.screen.open_overlay() {
            ui::render_overlay(&self.screen, &mut self.display);
        }
    }

    /// No-op when already closed
    pub fn close_credits(&mut self) {
        if self.screen.close_overlay() {
            ui::render_overlay(&self.screen, &mut self.display);
        }
    }

    /// Play against the opponent. Always available, even right after a round.
    pub fn play_round(&mut self, player: Choice) {
        let computer = self.opponent.next_choice();
        let outcome = resolve(player, computer);

        self.round.set(Round {
            player,
            computer,
            outcome,
        });
        self.scores.record(outcome);

        ui::render_round(&self.round, &mut self.display);
        ui::render_scores(self.scores(), &mut self.display);
        self.feedback.emit(outcome.into());

        log::info!(
            "{} vs {}: {}",
            player.as_str(),
            computer.as_str(),
            outcome.as_str()
        );
    }

    /// Play from a raw choice payload; absent or unknown tags are ignored
    pub fn play_round_tag(&mut self, tag: Option<&str>) {
        match tag.and_then(Choice::from_tag) {
            Some(choice) => self.play_round(choice),
            None => log::debug!("Ignoring invalid choice {:?}", tag),
        }
    }

    /// Back to the idle round display. Scores are untouched.
    pub fn clear_round(&mut self) {
        self.round.clear(IdlePrompt::Pick);
        ui::render_round(&self.round, &mut self.display);
    }

    pub fn reset_session(&mut self) {
        self.scores.reset();
        ui::render_scores(self.scores(), &mut self.display);
        self.clear_round();
        self.round.clear(IdlePrompt::ScoresReset);
        ui::render_round(&self.round, &mut self.display);
        log::info!("Scores reset");
    }

    /// Re-render every region from current state
    pub fn render_all(&mut self) {
        ui::render_screen(&self.screen, &mut self.display);
        ui::render_overlay(&self.screen, &mut self.display);
        ui::render_round(&self.round, &mut self.display);
        ui::render_scores(self.scores(), &mut self.display);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::game::{Outcome, Overlay, Screen};
    use crate::ui::testing::RecordingDisplay;
    use crate::ui::{Region, ResultTone};

    /// Plays a fixed script of moves
    #[derive(Default)]
    struct Scripted(VecDeque<Choice>);

    impl Scripted {
        fn new(moves: &[Choice]) -> Self {
            Self(moves.iter().copied().collect())
        }
    }

    impl Opponent for Scripted {
        fn next_choice(&mut self) -> Choice {
            self.0.pop_front().expect("opponent script exhausted")
        }
    }

    #[derive(Default)]
    struct Cues(Vec<Cue>);

    impl Feedback for Cues {
        fn emit(&mut self, cue: Cue) {
            self.0.push(cue);
        }
    }

    type TestSession = Session<Scripted, RecordingDisplay, Cues>;

    fn session(moves: &[Choice]) -> TestSession {
        Session::new(
            Scripted::new(moves),
            RecordingDisplay::default(),
            Cues::default(),
        )
    }

    fn scores(player: u32, computer: u32, ties: u32) -> ScoreState {
        ScoreState {
            player,
            computer,
            ties,
        }
    }

    #[test]
    fn test_initial_render() {
        let s = session(&[]);
        assert_eq!(s.screen().screen, Screen::Menu);
        assert_eq!(s.screen().overlay, Overlay::Closed);
        assert_eq!(s.display().screen, Some(Screen::Menu));
        assert_eq!(s.display().overlay_open, Some(false));
        assert_eq!(s.display().text(Region::PlayerScore), "0");
        assert_eq!(s.display().text(Region::Ties), "0");
        assert!(s.feedback().0.is_empty());
    }

    #[test]
    fn test_start_enters_idle_game() {
        let mut s = session(&[]);
        s.dispatch(Action::Start);
        assert_eq!(s.screen().screen, Screen::Game);
        assert!(!s.round().played());
        assert_eq!(s.scores(), ScoreState::default());
        assert_eq!(s.display().screen, Some(Screen::Game));
        assert_eq!(s.display().tone(), Some(ResultTone::Idle));
        assert_eq!(s.feedback().0, vec![Cue::Click]);
    }

    #[test]
    fn test_rock_beats_forced_scissors() {
        let mut s = session(&[Choice::Scissors]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Rock));

        let round = s.round().last.unwrap();
        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(s.scores(), scores(1, 0, 0));
        assert_eq!(s.display().tone(), Some(ResultTone::Win));
        assert_eq!(s.display().text(Region::PlayerChoice), "Rock 🪨");
        assert_eq!(s.display().text(Region::ComputerChoice), "Scissors ✂️");
        assert_eq!(s.display().text(Region::PlayerScore), "1");
        assert_eq!(s.feedback().0, vec![Cue::Click, Cue::Win]);
    }

    #[test]
    fn test_paper_ties_paper() {
        let mut s = session(&[Choice::Paper]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Paper));
        assert_eq!(s.round().last.unwrap().outcome, Outcome::Tie);
        assert_eq!(s.scores(), scores(0, 0, 1));
        assert_eq!(s.display().message(), "Tie! 🤝");
    }

    #[test]
    fn test_three_rounds_then_reset() {
        let mut s = session(&[Choice::Scissors, Choice::Paper, Choice::Scissors]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Rock));
        s.dispatch(Action::Choose(Choice::Rock));
        s.dispatch(Action::Choose(Choice::Scissors));
        assert_eq!(s.scores(), scores(1, 1, 1));
        assert_eq!(s.display().text(Region::ComputerScore), "1");

        s.dispatch(Action::ResetScores);
        assert_eq!(s.scores(), ScoreState::default());
        assert!(!s.round().played());
        assert_eq!(s.display().text(Region::PlayerScore), "0");
        assert_eq!(s.display().text(Region::PlayerChoice), crate::ui::PLACEHOLDER);
        assert_eq!(s.display().message(), "Scores reset! Pick a move!");
        assert_eq!(s.display().tone(), Some(ResultTone::Idle));
    }

    #[test]
    fn test_instant_replay_without_play_again() {
        let mut s = session(&[Choice::Rock, Choice::Rock]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Paper));
        s.dispatch(Action::Choose(Choice::Scissors));
        assert_eq!(s.scores(), scores(1, 1, 0));
    }

    #[test]
    fn test_play_again_keeps_scores() {
        let mut s = session(&[Choice::Rock]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Paper));
        s.dispatch(Action::PlayAgain);
        assert!(!s.round().played());
        assert_eq!(s.scores(), scores(1, 0, 0));
        assert_eq!(s.display().message(), "Pick Rock, Paper, or Scissors!");
        assert_eq!(s.display().text(Region::PlayerScore), "1");
    }

    #[test]
    fn test_invalid_tag_ignored() {
        let mut s = session(&[]);
        s.dispatch(Action::Start);
        let before = s.snapshot();
        let writes = s.display().writes;

        s.play_round_tag(Some("lizard"));
        s.play_round_tag(None);

        assert_eq!(s.snapshot(), before);
        assert_eq!(s.display().writes, writes);
        assert_eq!(s.feedback().0, vec![Cue::Click]);
    }

    #[test]
    fn test_valid_tag_plays() {
        let mut s = session(&[Choice::Rock]);
        s.play_round_tag(Some("scissors"));
        assert_eq!(s.scores(), scores(0, 1, 0));
    }

    #[test]
    fn test_overlay_survives_start_but_not_menu() {
        let mut s = session(&[]);
        s.dispatch(Action::Start);
        s.dispatch(Action::OpenCredits);
        s.dispatch(Action::Start);
        assert_eq!(s.screen().overlay, Overlay::Open);
        assert_eq!(s.display().overlay_open, Some(true));

        s.dispatch(Action::ReturnToMenu);
        assert_eq!(s.screen().screen, Screen::Menu);
        assert_eq!(s.screen().overlay, Overlay::Closed);
        assert_eq!(s.display().overlay_open, Some(false));
    }

    #[test]
    fn test_return_to_menu_clears_round() {
        let mut s = session(&[Choice::Rock]);
        s.dispatch(Action::Start);
        s.dispatch(Action::Choose(Choice::Rock));
        s.dispatch(Action::ReturnToMenu);
        assert!(!s.round().played());
        assert_eq!(s.scores(), scores(0, 0, 1));
        assert_eq!(s.display().text(Region::PlayerChoice), crate::ui::PLACEHOLDER);
        assert_eq!(s.display().text(Region::ComputerChoice), crate::ui::PLACEHOLDER);
        assert_eq!(s.display().tone(), Some(ResultTone::Idle));
        assert_eq!(s.display().message(), "Pick Rock, Paper, or Scissors!");
    }

    #[test]
    fn test_close_paths() {
        for close in [
            Action::CloseCredits,
            Action::CloseCreditsBackdrop,
            Action::CancelKey,
        ] {
            let mut s = session(&[]);
            s.dispatch(Action::OpenCredits);
            assert!(s.screen().overlay_open());
            s.dispatch(close);
            assert!(!s.screen().overlay_open());
            assert_eq!(s.display().overlay_open, Some(false));
        }
    }

    #[test]
    fn test_cancel_key_is_silent() {
        let mut s = session(&[]);
        s.dispatch(Action::OpenCredits);
        s.dispatch(Action::CancelKey);
        assert_eq!(s.feedback().0, vec![Cue::Click]);
    }

    #[test]
    fn test_redundant_close_is_noop() {
        let mut s = session(&[]);
        let writes = s.display().writes;
        s.close_credits();
        s.close_credits();
        assert_eq!(s.display().writes, writes);
        assert!(!s.screen().overlay_open());
    }

    #[test]
    fn test_clear_round_never_touches_scores() {
        let mut s = session(&[Choice::Paper, Choice::Rock]);
        s.play_round(Choice::Scissors);
        s.play_round(Choice::Scissors);
        let before = s.scores();
        s.clear_round();
        s.clear_round();
        assert_eq!(s.scores(), before);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut s = session(&[Choice::Paper]);
        s.play_round(Choice::Scissors);
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["scores"]["player"], 1);
        assert_eq!(json["round"]["last"]["computer"], "paper");
        assert_eq!(json["screen"]["screen"], "Menu");
    }
}
