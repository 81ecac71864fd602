//! Audio cues using Web Audio API
//!
//! Procedurally generated beeps - no external files needed! Game logic only
//! sends [`Cue`]s through the [`Feedback`] trait; the [`AudioManager`] owns the
//! audio context and creates it on first use (browsers block audio until a
//! user gesture). Native builds are silent.

use crate::game::Outcome;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsValue, closure::Closure};
#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// Feedback event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Any button press
    Click,
    Win,
    Lose,
    Tie,
}

impl Cue {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Cue::Click),
            "win" => Some(Cue::Win),
            "lose" => Some(Cue::Lose),
            "tie" => Some(Cue::Tie),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Cue::Click => Tone::new(660.0, 0.06),
            Cue::Win => Tone::new(880.0, 0.12),
            Cue::Lose => Tone::new(220.0, 0.14),
            Cue::Tie => Tone::new(440.0, 0.10),
        }
    }
}

impl From<Outcome> for Cue {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Cue::Win,
            Outcome::Lose => Cue::Lose,
            Outcome::Tie => Cue::Tie,
        }
    }
}

/// Frequency (Hz) and length (seconds) of a beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub duration: f64,
}

impl Tone {
    /// Used for unknown cue names
    pub const FALLBACK: Tone = Tone {
        freq: 600.0,
        duration: 0.07,
    };

    pub const fn new(freq: f32, duration: f64) -> Self {
        Self { freq, duration }
    }

    /// Tone for a cue name, falling back to [`Tone::FALLBACK`]
    pub fn named(name: &str) -> Self {
        Cue::from_name(name).map_or(Self::FALLBACK, |c| c.tone())
    }
}

/// Gain at the start and end of every beep (exponential ramps can't hit 0)
pub const SILENT_GAIN: f32 = 0.0001;
/// Peak gain at full volume
pub const PEAK_GAIN: f32 = 0.18;
/// Attack time to peak
pub const ATTACK: f64 = 0.01;
/// Extra time after the decay before the oscillator stops
pub const TAIL: f64 = 0.02;

/// Absolute schedule of one beep, in audio-context time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub start: f64,
    pub peak_at: f64,
    pub peak_gain: f32,
    pub end_at: f64,
    pub stop_at: f64,
}

impl Envelope {
    pub fn schedule(tone: Tone, now: f64, volume: f32) -> Self {
        Self {
            start: now,
            peak_at: now + ATTACK,
            peak_gain: (PEAK_GAIN * volume).max(SILENT_GAIN),
            end_at: now + tone.duration,
            stop_at: now + tone.duration + TAIL,
        }
    }
}

/// Receiver of feedback cues. Implementations must never fail loudly.
pub trait Feedback {
    fn emit(&mut self, cue: Cue);
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    /// Set once context creation has failed
    #[cfg(target_arch = "wasm32")]
    unavailable: bool,
    /// No-op rejection handler for `resume()` promises
    #[cfg(target_arch = "wasm32")]
    ignore_rejection: Closure<dyn FnMut(JsValue)>,
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    /// No audio context is created until the first cue
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx: None,
            #[cfg(target_arch = "wasm32")]
            unavailable: false,
            #[cfg(target_arch = "wasm32")]
            ignore_rejection: Closure::new(|_: JsValue| {}),
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Lazily create the context, resuming it if the browser suspended it
    #[cfg(target_arch = "wasm32")]
    fn context(&mut self) -> Option<&AudioContext> {
        if self.ctx.is_none() && !self.unavailable {
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(_) => {
                    log::warn!("Failed to create AudioContext - audio disabled");
                    self.unavailable = true;
                }
            }
        }
        let ctx = self.ctx.as_ref()?;
        if ctx.state() == AudioContextState::Suspended {
            if let Ok(promise) = ctx.resume() {
                let _ = promise.catch(&self.ignore_rejection);
            }
        }
        Some(ctx)
    }

    #[cfg(target_arch = "wasm32")]
    fn play(&mut self, cue: Cue, vol: f32) {
        let Some(ctx) = self.context() else { return };
        if Self::beep(ctx, cue.tone(), vol).is_none() {
            log::debug!("Beep {:?} failed", cue);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn play(&mut self, cue: Cue, _vol: f32) {
        log::trace!("cue {:?} ({} Hz)", cue, cue.tone().freq);
    }

    /// Square-wave beep with a fast attack and exponential decay
    #[cfg(target_arch = "wasm32")]
    fn beep(ctx: &AudioContext, tone: Tone, vol: f32) -> Option<()> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        let env = Envelope::schedule(tone, ctx.current_time(), vol);

        osc.set_type(OscillatorType::Square);
        osc.frequency().set_value_at_time(tone.freq, env.start).ok()?;

        gain.gain().set_value_at_time(SILENT_GAIN, env.start).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(env.peak_gain, env.peak_at)
            .ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(SILENT_GAIN, env.end_at)
            .ok()?;

        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        osc.start_with_when(env.start).ok()?;
        osc.stop_with_when(env.stop_at).ok()
    }
}

impl Feedback for AudioManager {
    fn emit(&mut self, cue: Cue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        self.play(cue, vol);
    }
}
