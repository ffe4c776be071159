pub mod constants;
pub mod error;
pub mod floating;
pub mod guard;
pub mod impulse;
pub mod menu;
pub mod palette;
pub mod playback;
pub mod randomizer;
pub mod scroll;
pub mod settings;
pub mod smoke;
pub mod variation;

pub use constants::*;
pub use error::{FxError, Result};
pub use guard::InitGuard;
pub use impulse::{envelope, impulse_len, ImpulseParams, ImpulseResponse};
pub use palette::{scroll_ratio, Gradient, Rgb};
pub use playback::{AudioSources, PlaybackOutcome, TrackSelector};
pub use settings::{ThemeConfig, ThemeSettings};
pub use smoke::{Particle, SmokeField, SmokeParams};
