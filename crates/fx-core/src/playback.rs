//! Ambient track selection and playback outcomes.

use crate::constants::VOLUME_STEP;

/// How a `play()` attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Started,
    /// The browser refused to start audio without a user gesture.
    DeniedByPolicy,
    LoadError,
}

impl PlaybackOutcome {
    /// Classify a rejected `play()` promise by its `DOMException` name.
    pub fn from_rejection(name: Option<&str>) -> Self {
        match name {
            Some("NotAllowedError") => PlaybackOutcome::DeniedByPolicy,
            _ => PlaybackOutcome::LoadError,
        }
    }
}

/// Configured primary track plus the local fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioSources {
    pub primary: Option<String>,
    pub fallback: String,
}

impl AudioSources {
    pub fn new(primary: Option<String>, fallback: String) -> Self {
        Self { primary, fallback }
    }

    pub fn selector(&self) -> TrackSelector {
        TrackSelector::new(self.primary.clone(), self.fallback.clone())
    }
}

/// Picks the active track and substitutes the fallback at most once.
#[derive(Clone, Debug)]
pub struct TrackSelector {
    active: String,
    fallback: Option<String>,
}

impl TrackSelector {
    pub fn new(primary: Option<String>, fallback: String) -> Self {
        match primary {
            Some(p) if p != fallback => Self {
                active: p,
                fallback: Some(fallback),
            },
            _ => Self {
                active: fallback,
                fallback: None,
            },
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn can_fall_back(&self) -> bool {
        self.fallback.is_some()
    }

    /// Called when the active track failed to load. Returns the source to
    /// switch to, or `None` once the fallback has already been used.
    pub fn on_load_error(&mut self) -> Option<&str> {
        let next = self.fallback.take()?;
        self.active = next;
        Some(&self.active)
    }
}

/// Snap a slider value to the volume grid and keep it in \[0, 1\].
pub fn clamp_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value / VOLUME_STEP).round() * VOLUME_STEP).clamp(0.0, 1.0)
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "Unmute"
    } else {
        "Mute"
    }
}
