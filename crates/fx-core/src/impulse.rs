//! Procedural reverb impulse responses.
//!
//! The impulse is stereo decaying noise: every sample is uniform noise in
//! \[-1, 1\] shaped by the envelope `(1 - p)^decay`, where `p` is the
//! normalized position inside the buffer. The web frontend copies the two
//! channels into an `AudioBuffer` and hands it to a `ConvolverNode`.

use crate::constants::{
    DEFAULT_IMPULSE_DECAY, DEFAULT_IMPULSE_DURATION_SEC, IMPULSE_CHANNELS, MAX_IMPULSE_DURATION_SEC,
};
use crate::error::{FxError, Result};
use rand::Rng;

/// Shape of the generated tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseParams {
    pub duration_sec: f32,
    /// Envelope exponent; higher values make the tail die out faster.
    pub decay: f32,
}

impl Default for ImpulseParams {
    fn default() -> Self {
        Self {
            duration_sec: DEFAULT_IMPULSE_DURATION_SEC,
            decay: DEFAULT_IMPULSE_DECAY,
        }
    }
}

impl ImpulseParams {
    fn validate(&self, sample_rate: f32) -> Result<()> {
        let ok = sample_rate.is_finite()
            && sample_rate > 0.0
            && self.duration_sec.is_finite()
            && self.duration_sec > 0.0
            && self.duration_sec <= MAX_IMPULSE_DURATION_SEC
            && self.decay.is_finite()
            && self.decay > 0.0;
        if ok {
            Ok(())
        } else {
            Err(FxError::InvalidImpulse {
                sample_rate,
                duration_sec: self.duration_sec,
                decay: self.decay,
            })
        }
    }
}

/// An immutable stereo impulse response.
#[derive(Clone, Debug)]
pub struct ImpulseResponse {
    sample_rate: f32,
    params: ImpulseParams,
    channels: [Vec<f32>; IMPULSE_CHANNELS],
}

impl ImpulseResponse {
    /// Synthesize a new impulse using `rng` for the noise.
    pub fn synthesize<R: Rng + ?Sized>(
        sample_rate: f32,
        params: ImpulseParams,
        rng: &mut R,
    ) -> Result<Self> {
        params.validate(sample_rate)?;
        let len = impulse_len(sample_rate, params.duration_sec);
        let channels = [
            decaying_noise(len, params.decay, rng),
            decaying_noise(len, params.decay, rng),
        ];
        Ok(Self {
            sample_rate,
            params,
            channels,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn params(&self) -> ImpulseParams {
        self.params
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn into_channels(self) -> [Vec<f32>; IMPULSE_CHANNELS] {
        self.channels
    }
}

/// Buffer length in samples for a given rate and duration.
pub fn impulse_len(sample_rate: f32, duration_sec: f32) -> usize {
    (f64::from(sample_rate) * f64::from(duration_sec)).round().max(0.0) as usize
}

/// Envelope at normalized position `p` in \[0, 1\].
#[inline]
pub fn envelope(p: f32, decay: f32) -> f32 {
    (1.0 - p).clamp(0.0, 1.0).powf(decay)
}

fn decaying_noise<R: Rng + ?Sized>(len: usize, decay: f32, rng: &mut R) -> Vec<f32> {
    let inv_len = 1.0 / len.max(1) as f64;
    (0..len)
        .map(|i| {
            let p = (i as f64 * inv_len) as f32;
            let noise: f32 = rng.gen_range(-1.0..=1.0);
            noise * envelope(p, decay)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_non_positive_decay() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = ImpulseParams {
            duration_sec: 1.0,
            decay: 0.0,
        };
        assert!(ImpulseResponse::synthesize(48_000.0, params, &mut rng).is_err());
    }

    #[test]
    fn rejects_nan_sample_rate() {
        let mut rng = StdRng::seed_from_u64(1);
        let res = ImpulseResponse::synthesize(f32::NAN, ImpulseParams::default(), &mut rng);
        assert!(matches!(res, Err(FxError::InvalidImpulse { .. })));
    }

    #[test]
    fn envelope_clamps_outside_unit_range() {
        assert_eq!(envelope(-0.5, 2.0), 1.0);
        assert_eq!(envelope(1.5, 2.0), 0.0);
    }
}
