//! Screen and credits overlay state machine

use serde::{Deserialize, Serialize};

/// Top-level screen (exactly one is visible)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Menu,
    Game,
}

/// Credits overlay, layered on top of either screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

/// Screen x overlay. Transitions return whether anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenState {
    pub screen: Screen,
    pub overlay: Overlay,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    /// Show the game screen. The overlay is left alone.
    pub fn start(&mut self) -> bool {
        let changed = self.screen != Screen::Game;
        self.screen = Screen::Game;
        changed
    }

    /// Show the menu and close the overlay
    pub fn return_to_menu(&mut self) -> bool {
        let changed = *self
            != Self {
                screen: Screen::Menu,
                overlay: Overlay::Closed,
            };
        self.screen = Screen::Menu;
        self.overlay = Overlay::Closed;
        changed
    }

    pub fn open_overlay(&mut self) -> bool {
        let changed = self.overlay != Overlay::Open;
        self.overlay = Overlay::Open;
        changed
    }

    pub fn close_overlay(&mut self) -> bool {
        let changed = self.overlay != Overlay::Closed;
        self.overlay = Overlay::Closed;
        changed
    }
}
