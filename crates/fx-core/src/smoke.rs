//! Smoke particle simulation.
//!
//! A fixed pool of soft white discs drifts upward from just below the bottom
//! edge of the viewport and fades out. A particle that has fully faded or
//! left the top edge is re-randomized in the same step that detects it, so
//! the pool never shows a gap and never changes size.

use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Ranges used when (re)spawning a particle.
#[derive(Clone, Debug, PartialEq)]
pub struct SmokeParams {
    pub particle_count: usize,
    pub spawn_below_px: f32,
    pub radius: (f32, f32),
    pub opacity: (f32, f32),
    pub speed: (f32, f32),
    pub decay: (f32, f32),
}

impl Default for SmokeParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            spawn_below_px: PARTICLE_SPAWN_BELOW_PX,
            radius: (PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN),
            opacity: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_SPAN),
            speed: (PARTICLE_SPEED_MIN, PARTICLE_SPEED_SPAN),
            decay: (PARTICLE_DECAY_MIN, PARTICLE_DECAY_SPAN),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Upward drift in pixels per frame.
    pub speed: f32,
    /// Opacity lost per frame.
    pub decay: f32,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(params: &SmokeParams, width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, height + params.spawn_below_px),
            radius: ranged(params.radius, rng),
            opacity: ranged(params.opacity, rng),
            speed: ranged(params.speed, rng),
            decay: ranged(params.decay, rng),
        }
    }

    /// Faded out or fully above the top edge.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.opacity <= 0.0 || self.position.y + self.radius < 0.0
    }

    /// CSS color at the particle center.
    pub fn center_color(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.opacity)
    }
}

pub const EDGE_COLOR: &str = "rgba(255, 255, 255, 0)";

#[inline]
fn ranged<R: Rng + ?Sized>((min, span): (f32, f32), rng: &mut R) -> f32 {
    min + rng.gen::<f32>() * span
}

/// The particle pool plus the surface size it spawns into.
pub struct SmokeField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    params: SmokeParams,
    width: f32,
    height: f32,
    rng: R,
}

impl<R: Rng> SmokeField<R> {
    /// Build the pool. The count is capped at [`MAX_PARTICLE_COUNT`] and the
    /// spawn opacity floored at [`MIN_SPAWN_OPACITY`].
    pub fn new(width: f32, height: f32, mut params: SmokeParams, mut rng: R) -> Self {
        params.particle_count = params.particle_count.min(MAX_PARTICLE_COUNT);
        params.opacity.0 = params.opacity.0.max(MIN_SPAWN_OPACITY);
        params.opacity.1 = params.opacity.1.max(0.0);
        let particles = (0..params.particle_count)
            .map(|_| Particle::spawn(&params, width, height, &mut rng))
            .collect();
        Self {
            particles,
            params,
            width,
            height,
            rng,
        }
    }

    /// Track a new surface size. Existing particles keep drifting; only
    /// respawns use the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame. Returns how many were respawned.
    pub fn step(&mut self) -> usize {
        let mut respawned = 0;
        for p in &mut self.particles {
            p.position.y -= p.speed;
            p.opacity -= p.decay;
            if p.is_spent() {
                *p = Particle::spawn(&self.params, self.width, self.height, &mut self.rng);
                respawned += 1;
            }
        }
        respawned
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn params(&self) -> &SmokeParams {
        &self.params
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
