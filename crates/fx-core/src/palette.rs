//! Scroll-driven background color interpolation.

use crate::error::{FxError, Result};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COLOR_STOPS: [&str; 3] = ["#181818", "#0a1026", "#301242"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend; fractional channels are truncated.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + t * (f64::from(b) - f64::from(a))).trunc() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl FromStr for Rgb {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || FxError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            3 => {
                let v = u16::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let expand = |n: u16| (n as u8 & 0xf) * 0x11;
                Ok(Rgb::new(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered color stops spread evenly over the scroll range.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    pub fn new(stops: Vec<Rgb>) -> Result<Self> {
        if stops.is_empty() {
            return Err(FxError::EmptyGradient);
        }
        Ok(Self { stops })
    }

    pub fn parse<S: AsRef<str>>(stops: &[S]) -> Result<Self> {
        let stops = stops
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Rgb>>>()?;
        Self::new(stops)
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Color at scroll progress `ratio` in \[0, 1\].
    pub fn color_at(&self, ratio: f64) -> Rgb {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        let seg_count = (n - 1) as f64;
        let segment = ((ratio * seg_count).floor() as usize).min(n - 2);
        let local = ratio * seg_count - segment as f64;
        self.stops[segment].lerp(self.stops[segment + 1], local)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            stops: vec![
                Rgb::new(0x18, 0x18, 0x18),
                Rgb::new(0x0a, 0x10, 0x26),
                Rgb::new(0x30, 0x12, 0x42),
            ],
        }
    }
}

/// Scroll progress through the document, 0 when the page does not scroll.
pub fn scroll_ratio(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range > 0.0 {
        (scroll_y / range).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
