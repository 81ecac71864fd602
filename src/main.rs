//! RPS Showdown entry point
//!
//! Binds the game to the page and wires input events. The native build plays
//! a short headless session to the log.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, KeyboardEvent, MouseEvent};

    use rps_showdown::game::RandomOpponent;
    use rps_showdown::ui::dom::{self, DomDisplay};
    use rps_showdown::{Action, AudioManager, Session, Settings, audio_for, opponent_for};

    type Game = Rc<RefCell<Session<RandomOpponent, DomDisplay, AudioManager>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        let level = settings.log_level.to_level().unwrap_or(log::Level::Error);
        let _ = console_log::init_with_level(level);

        log::info!("RPS Showdown starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("{}", rps_showdown::UiError::NoDocument);
            return;
        };

        // Bind every element up front; wire nothing if the page is incomplete
        let (display, controls) = match dom::bind(&document) {
            Ok(bound) => bound,
            Err(e) => {
                log::error!("{} - check index.html ids", e);
                return;
            }
        };

        let opponent = opponent_for(&settings, js_sys::Date::now() as u64);
        log::info!("Opponent seed: {}", opponent.seed());

        let game: Game = Rc::new(RefCell::new(Session::new(
            opponent,
            display,
            audio_for(&settings),
        )));

        on_click(&controls.start, &game, Action::Start);
        on_click(&controls.credits, &game, Action::OpenCredits);
        on_click(&controls.credits_back, &game, Action::CloseCredits);
        on_click(&controls.back_to_menu, &game, Action::ReturnToMenu);
        on_click(&controls.play_again, &game, Action::PlayAgain);
        on_click(&controls.reset, &game, Action::ResetScores);

        setup_choice_buttons(&controls.choices, &game);
        setup_backdrop(&controls.credits_modal, &game);
        setup_escape(&document, &game);

        log::info!("RPS Showdown running!");
    }

    fn on_click(el: &Element, game: &Game, action: Action) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().dispatch(action);
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_choice_buttons(buttons: &[Element], game: &Game) {
        for btn in buttons {
            let game = game.clone();
            let btn_clone = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let tag = btn_clone.get_attribute("data-choice");
                game.borrow_mut().play_round_tag(tag.as_deref());
            });
            let _ =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Clicks on elements marked `data-close="true"` close the credits
    fn setup_backdrop(modal: &Element, game: &Game) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let closes = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-close"))
                .is_some_and(|v| v == "true");
            if closes {
                game.borrow_mut().dispatch(Action::CloseCreditsBackdrop);
            }
        });
        let _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_escape(document: &web_sys::Document, game: &Game) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() != "Escape" {
                return;
            }
            let mut g = game.borrow_mut();
            if g.screen().overlay_open() {
                g.dispatch(Action::CancelKey);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rps_showdown::game::Choice;
    use rps_showdown::ui::headless::LogDisplay;
    use rps_showdown::{Action, Session, Settings, audio_for, opponent_for};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("RPS Showdown (native) starting...");
    log::info!("Native mode plays a demo session - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let mut session = Session::new(
        opponent_for(&settings, seed),
        LogDisplay,
        audio_for(&settings),
    );

    session.dispatch(Action::Start);
    for choice in Choice::ALL.iter().cycle().take(6) {
        session.dispatch(Action::Choose(*choice));
    }
    session.dispatch(Action::OpenCredits);
    session.dispatch(Action::ReturnToMenu);

    let scores = session.scores();
    log::info!(
        "Final score - you: {}, computer: {}, ties: {}",
        scores.player,
        scores.computer,
        scores.ties
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
