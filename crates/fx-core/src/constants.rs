// Shared tuning constants used by the core kernels and the web frontend.

// Reverb impulse
pub const IMPULSE_CHANNELS: usize = 2;
pub const DEFAULT_IMPULSE_DURATION_SEC: f32 = 5.0; // lush tail
pub const DEFAULT_IMPULSE_DECAY: f32 = 3.5; // envelope exponent
pub const MAX_IMPULSE_DURATION_SEC: f32 = 20.0; // bounds the buffer allocation

// Ambient audio
pub const DEFAULT_AMBIENT_VOLUME: f64 = 0.5;
pub const VOLUME_STEP: f64 = 0.05;
pub const REVERB_WET_GAIN: f32 = 1.0;
pub const FALLBACK_TRACK: &str = "audio/ambient_hum.wav";
pub const HOVER_SOUND: &str = "audio/menu_hover.wav";
pub const TRANSITION_SOUND: &str = "audio/transition.wav";
pub const WHISPER_SOUND: &str = "audio/whisper.wav";

// Smoke particles
pub const DEFAULT_PARTICLE_COUNT: usize = 30;
pub const MAX_PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SPAWN_BELOW_PX: f32 = 50.0; // spawn just under the bottom edge
pub const PARTICLE_RADIUS_MIN: f32 = 20.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 40.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.3;
pub const MIN_SPAWN_OPACITY: f32 = 0.01; // floor for caller-supplied ranges
pub const PARTICLE_SPEED_MIN: f32 = 0.3; // px per frame
pub const PARTICLE_SPEED_SPAN: f32 = 0.7;
pub const PARTICLE_DECAY_MIN: f32 = 0.0005; // opacity per frame
pub const PARTICLE_DECAY_SPAN: f32 = 0.001;

// Scroll effects
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const PAGE_TRANSITION_DELAY_MS: i32 = 500;

// Floating text
pub const FLOATING_SEED_COUNT: u32 = 4;
pub const FLOATING_SEED_STAGGER_MS: i32 = 1500;
pub const FLOATING_SPAWN_INTERVAL_MS: i32 = 4000;
pub const FLOATING_SIZE_MIN: f32 = 0.8;
pub const FLOATING_SIZE_SPAN: f32 = 1.2;
pub const FLOATING_SIZE_REM_SCALE: f32 = 1.5;
pub const FLOATING_OPACITY_MIN: f32 = 0.7;
pub const FLOATING_OPACITY_SPAN: f32 = 0.3;
pub const FLOATING_OFFSET_MAX_PERCENT: f32 = 90.0;
pub const FLOATING_DURATION_MIN_SEC: f32 = 6.0;
pub const FLOATING_DURATION_SPAN_SEC: f32 = 6.0;

// Randomizer
pub const SILHOUETTE_CHANCE: f64 = 0.1;
pub const SILHOUETTE_IMAGE: &str = "images/silhouette.png";

// Interactive menu
pub const KEY_IMAGE: &str = "images/key.png";
pub const TRANSPARENT_PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR4nGMAAQAABQABDQottAAAAABJRU5ErkJggg==";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
