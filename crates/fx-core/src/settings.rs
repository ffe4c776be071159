//! Theme settings as provided by the host page, and their resolved form.
//!
//! The host exposes a loosely typed JSON object. [`ThemeSettings`] mirrors it
//! with every key optional; [`ThemeSettings::resolve`] turns it into a
//! [`ThemeConfig`] where every list is non-empty and every path is absolute.

use crate::constants::{
    FALLBACK_TRACK, MAX_IMPULSE_DURATION_SEC, MAX_PARTICLE_COUNT, SILHOUETTE_IMAGE,
};
use crate::floating::DEFAULT_MESSAGES;
use crate::impulse::ImpulseParams;
use crate::palette::Gradient;
use crate::playback::AudioSources;
use crate::smoke::SmokeParams;
use crate::variation::DEFAULT_VARIATIONS;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_IMAGES: [&str; 3] = [
    "images/bg.theatre.png",
    "images/bg.forest.png",
    "images/bg.curtain.png",
];

pub const DEFAULT_QUOTES: [&str; 8] = [
    "No hay banda.\u{a0}There is no band.",
    "Silencio.",
    "It\u{2019}s only a dream within a dream.",
    "Wake up. Wake up.",
    "The night is darkest before the dawn.",
    "Illusion is the first of all pleasures.",
    "There\u{2019}s always music in the air.",
    "This is the girl.",
];

/// Raw host settings. Each key is read on its own: a missing, `null` or
/// mistyped value falls back to its default without discarding the others.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default, deserialize_with = "lenient")]
    pub theme_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub random_elements: RandomElementOverrides,
    #[serde(default, deserialize_with = "lenient")]
    pub color_stops: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub variations: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub floating_messages: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub audio_track: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reverb: ReverbOverrides,
    #[serde(default, deserialize_with = "lenient")]
    pub smoke: SmokeOverrides,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RandomElementOverrides {
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub quotes: Option<Vec<Value>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReverbOverrides {
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f32>,
    #[serde(default, deserialize_with = "lenient")]
    pub decay: Option<f32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmokeOverrides {
    #[serde(default, deserialize_with = "lenient")]
    pub particle_count: Option<usize>,
}

/// Accept any JSON value; anything that does not fit `T` becomes the default.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Everything the behaviors need, with defaults applied.
#[derive(Clone, Debug)]
pub struct ThemeConfig {
    pub base_path: String,
    pub images: Vec<String>,
    pub quotes: Vec<String>,
    pub gradient: Gradient,
    pub variations: Vec<String>,
    pub floating_messages: Vec<String>,
    pub audio: AudioSources,
    pub impulse: ImpulseParams,
    pub smoke: SmokeParams,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeSettings::default().resolve(None)
    }
}

impl ThemeConfig {
    /// Absolute URL of a theme asset.
    pub fn asset(&self, relative: &str) -> String {
        format!("{}{}", self.base_path, relative)
    }

    pub fn silhouette_src(&self) -> String {
        self.asset(SILHOUETTE_IMAGE)
    }
}

impl ThemeSettings {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply defaults. `host_theme_path` is the host's own notion of the
    /// theme directory, used when the settings carry none.
    pub fn resolve(self, host_theme_path: Option<&str>) -> ThemeConfig {
        let base_path = normalize_base_path(
            self.theme_path
                .as_deref()
                .filter(|p| !p.is_empty())
                .or(host_theme_path),
        );
        let images = non_empty_or(self.random_elements.images.as_deref(), || {
            DEFAULT_IMAGES.iter().map(|p| format!("{base_path}{p}")).collect()
        });
        let quotes = non_empty_or(self.random_elements.quotes.as_deref(), || {
            DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect()
        });
        let variations = non_empty_or(self.variations.as_deref(), || {
            DEFAULT_VARIATIONS.iter().map(|v| v.to_string()).collect()
        });
        let floating_messages = non_empty_or(self.floating_messages.as_deref(), || {
            DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
        });
        let gradient = match self.color_stops.as_deref() {
            Some(stops) if !stops.is_empty() => Gradient::parse(stops).unwrap_or_else(|e| {
                log::warn!("[settings] {e}; using default color stops");
                Gradient::default()
            }),
            _ => Gradient::default(),
        };
        let audio = AudioSources::new(
            self.audio_track.filter(|t| !t.trim().is_empty()),
            format!("{base_path}{FALLBACK_TRACK}"),
        );
        let defaults = ImpulseParams::default();
        let impulse = ImpulseParams {
            duration_sec: positive_or(self.reverb.duration, defaults.duration_sec)
                .min(MAX_IMPULSE_DURATION_SEC),
            decay: positive_or(self.reverb.decay, defaults.decay),
        };
        let mut smoke = SmokeParams::default();
        if let Some(count) = self.smoke.particle_count.filter(|c| *c > 0) {
            smoke.particle_count = count.min(MAX_PARTICLE_COUNT);
        }
        ThemeConfig {
            base_path,
            images,
            quotes,
            gradient,
            variations,
            floating_messages,
            audio,
            impulse,
            smoke,
        }
    }
}

/// Ensure a non-empty path starts and ends with `/`.
pub fn normalize_base_path(path: Option<&str>) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return String::new();
    };
    let mut out = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Loose string coercion for override lists: strings kept, `true` and
/// non-zero numbers stringified. Falsy entries (null, `false`, `0`, `""`)
/// are dropped.
pub fn coerce_strings(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| match v {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty_or(values: Option<&[Value]>, default: impl FnOnce() -> Vec<String>) -> Vec<String> {
    let coerced = values.map(coerce_strings).unwrap_or_default();
    if coerced.is_empty() {
        default()
    } else {
        coerced
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}
