//! Game settings and preferences
//!
//! Read from the page URL query string, e.g. `?mute=1&volume=0.5&seed=42&log=debug`.
//! Nothing is persisted.

use log::LevelFilter;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Play sound cues
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Fixed opponent seed for reproducible sessions
    pub seed: Option<u64>,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            master_volume: 0.8,
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Parse a query string (leading `?` optional). Unknown keys and bad
    /// values leave the defaults in place.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "mute" => {
                    if let Some(mute) = parse_flag(value) {
                        settings.sound = !mute;
                    }
                }
                "sound" => {
                    if let Some(sound) = parse_flag(value) {
                        settings.sound = sound;
                    }
                }
                "volume" => {
                    if let Ok(vol) = value.parse::<f32>() {
                        if vol.is_finite() {
                            settings.master_volume = vol.clamp(0.0, 1.0);
                        }
                    }
                }
                "seed" => {
                    if let Ok(seed) = value.parse() {
                        settings.seed = Some(seed);
                    }
                }
                "log" => {
                    if let Ok(level) = value.parse() {
                        settings.log_level = level;
                    }
                }
                _ => log::debug!("Ignoring unknown setting {:?}", key),
            }
        }

        settings
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&query)
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
