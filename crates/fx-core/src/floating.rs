//! Randomized floating text sprites.

use crate::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_MESSAGES: [&str; 8] = [
    "Dream",
    "Silencio",
    "Illusion",
    "Mystery",
    "Wake\u{a0}Up",
    "Beyond",
    "Nightmare",
    "Whisper",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
        Direction::BottomToTop,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Direction::LeftToRight => "float-left",
            Direction::RightToLeft => "float-right",
            Direction::TopToBottom => "float-down",
            Direction::BottomToTop => "float-up",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }

    /// Style property that positions the sprite across its travel axis.
    pub fn offset_property(self) -> &'static str {
        if self.is_horizontal() {
            "top"
        } else {
            "left"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingText {
    /// Plain text, inserted as text content.
    pub message: String,
    pub direction: Direction,
    pub font_size_rem: f32,
    pub opacity: f32,
    pub offset_percent: u32,
    pub duration_sec: f32,
}

impl FloatingText {
    pub fn random<R: Rng + ?Sized>(messages: &[String], rng: &mut R) -> Option<Self> {
        let message = messages.choose(rng)?.clone();
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let size = FLOATING_SIZE_MIN + rng.gen::<f32>() * FLOATING_SIZE_SPAN;
        Some(Self {
            message,
            direction,
            font_size_rem: size * FLOATING_SIZE_REM_SCALE,
            opacity: FLOATING_OPACITY_MIN + rng.gen::<f32>() * FLOATING_OPACITY_SPAN,
            offset_percent: (rng.gen::<f32>() * FLOATING_OFFSET_MAX_PERCENT).floor() as u32,
            duration_sec: FLOATING_DURATION_MIN_SEC + rng.gen::<f32>() * FLOATING_DURATION_SPAN_SEC,
        })
    }

    pub fn font_size_css(&self) -> String {
        format!("{}rem", self.font_size_rem)
    }

    pub fn offset_css(&self) -> String {
        format!("{}%", self.offset_percent)
    }

    pub fn duration_css(&self) -> String {
        format!("{}s", self.duration_sec)
    }
}
