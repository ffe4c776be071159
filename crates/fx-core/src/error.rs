use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("invalid impulse parameters: sample_rate={sample_rate}, duration={duration_sec}s, decay={decay}")]
    InvalidImpulse {
        sample_rate: f32,
        duration_sec: f32,
        decay: f32,
    },
    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("a gradient needs at least one color stop")]
    EmptyGradient,
    #[error("malformed theme settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FxError>;
