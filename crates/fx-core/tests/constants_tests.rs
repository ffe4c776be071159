// Host-side tests for tuning constants and their relationships.

use fx_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_positive() {
    assert!(DEFAULT_PARTICLE_COUNT > 0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN >= 0.0);
    assert!(PARTICLE_SPEED_MIN > 0.0);
    assert!(PARTICLE_DECAY_MIN > 0.0);
    // spawned particles must start visible
    assert!(PARTICLE_OPACITY_MIN > 0.0);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_defaults_are_in_range() {
    assert!(DEFAULT_IMPULSE_DURATION_SEC > 0.0);
    assert!(DEFAULT_IMPULSE_DECAY > 0.0);
    assert!(DEFAULT_AMBIENT_VOLUME >= 0.0 && DEFAULT_AMBIENT_VOLUME <= 1.0);
    assert!(VOLUME_STEP > 0.0 && VOLUME_STEP < 1.0);
    assert!(FALLBACK_TRACK.ends_with("ambient_hum.wav"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_ordered() {
    assert!(FLOATING_SPAWN_INTERVAL_MS > FLOATING_SEED_STAGGER_MS);
    assert!(PAGE_TRANSITION_DELAY_MS > 0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(SILHOUETTE_CHANCE > 0.0 && SILHOUETTE_CHANCE < 1.0);
}
