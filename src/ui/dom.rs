//! DOM-backed display and button lookup (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::{Display, Region, ResultTone, check_required, ids};
use crate::error::UiError;
use crate::game::Screen;

const SCREEN_ACTIVE: &str = "screen--active";
const MODAL_OPEN: &str = "modal--open";

fn get(document: &Document, id: &'static str) -> Result<Element, UiError> {
    document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement { id })
}

/// Display regions of the page
pub struct DomDisplay {
    menu_screen: Element,
    game_screen: Element,
    credits_modal: Element,
    player_choice: Element,
    computer_choice: Element,
    result_text: Element,
    player_score: Element,
    computer_score: Element,
    ties_score: Element,
}

/// Buttons and containers that receive input
pub struct Controls {
    pub start: Element,
    pub credits: Element,
    pub credits_back: Element,
    pub credits_modal: Element,
    pub back_to_menu: Element,
    pub play_again: Element,
    pub reset: Element,
    /// `.choice-btn` elements (optional, may be empty)
    pub choices: Vec<Element>,
}

/// Look up everything the game needs. Nothing is touched unless every
/// required element exists.
pub fn bind(document: &Document) -> Result<(DomDisplay, Controls), UiError> {
    check_required(|id| document.get_element_by_id(id).is_some())?;

    let display = DomDisplay {
        menu_screen: get(document, ids::MENU_SCREEN)?,
        game_screen: get(document, ids::GAME_SCREEN)?,
        credits_modal: get(document, ids::CREDITS_MODAL)?,
        player_choice: get(document, ids::PLAYER_CHOICE)?,
        computer_choice: get(document, ids::COMPUTER_CHOICE)?,
        result_text: get(document, ids::RESULT_TEXT)?,
        player_score: get(document, ids::PLAYER_SCORE)?,
        computer_score: get(document, ids::COMPUTER_SCORE)?,
        ties_score: get(document, ids::TIES_SCORE)?,
    };

    let mut choices = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".choice-btn") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                choices.push(el);
            }
        }
    }

    let controls = Controls {
        start: get(document, ids::START_BTN)?,
        credits: get(document, ids::CREDITS_BTN)?,
        credits_back: get(document, ids::CREDITS_BACK_BTN)?,
        credits_modal: get(document, ids::CREDITS_MODAL)?,
        back_to_menu: get(document, ids::BACK_TO_MENU_BTN)?,
        play_again: get(document, ids::PLAY_AGAIN_BTN)?,
        reset: get(document, ids::RESET_BTN)?,
        choices,
    };

    log::info!("Bound page ({} choice buttons)", controls.choices.len());
    Ok((display, controls))
}

impl DomDisplay {
    fn region(&self, region: Region) -> &Element {
        match region {
            Region::PlayerChoice => &self.player_choice,
            Region::ComputerChoice => &self.computer_choice,
            Region::PlayerScore => &self.player_score,
            Region::ComputerScore => &self.computer_score,
            Region::Ties => &self.ties_score,
        }
    }
}

impl Display for DomDisplay {
    fn show_screen(&mut self, screen: Screen) {
        let (active, inactive) = match screen {
            Screen::Menu => (&self.menu_screen, &self.game_screen),
            Screen::Game => (&self.game_screen, &self.menu_screen),
        };
        let _ = active.class_list().add_1(SCREEN_ACTIVE);
        let _ = inactive.class_list().remove_1(SCREEN_ACTIVE);
    }

    fn show_overlay(&mut self, open: bool) {
        let classes = self.credits_modal.class_list();
        let _ = if open {
            classes.add_1(MODAL_OPEN)
        } else {
            classes.remove_1(MODAL_OPEN)
        };
        let hidden = if open { "false" } else { "true" };
        let _ = self.credits_modal.set_attribute("aria-hidden", hidden);
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.region(region).set_text_content(Some(text));
    }

    fn set_result(&mut self, tone: ResultTone, text: &str) {
        let classes = self.result_text.class_list();
        for t in ResultTone::ALL {
            let _ = classes.remove_1(t.css_class());
        }
        let _ = classes.add_1(tone.css_class());
        self.result_text.set_text_content(Some(text));
    }
}
