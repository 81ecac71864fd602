//! Display that writes every update to the log

use super::{Display, Region, ResultTone};
use crate::game::Screen;

/// Headless display for native runs
#[derive(Debug, Default)]
pub struct LogDisplay;

impl Display for LogDisplay {
    fn show_screen(&mut self, screen: Screen) {
        log::info!("screen: {:?}", screen);
    }

    fn show_overlay(&mut self, open: bool) {
        log::info!("credits: {}", if open { "open" } else { "closed" });
    }

    fn set_text(&mut self, region: Region, text: &str) {
        log::debug!("{:?} = {}", region, text);
    }

    fn set_result(&mut self, tone: ResultTone, text: &str) {
        log::info!("[{}] {}", tone.css_class(), text);
    }
}
