// Host-side tests for the smoke particle pool.

use fx_core::{SmokeField, SmokeParams, MAX_PARTICLE_COUNT, MIN_SPAWN_OPACITY};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(seed: u64) -> SmokeField {
    SmokeField::new(1280.0, 720.0, SmokeParams::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn default_pool_has_thirty_particles() {
    let f = field(1);
    assert_eq!(f.particles().len(), 30);
}

#[test]
fn pool_size_is_stable_across_steps() {
    let mut f = field(2);
    for _ in 0..5_000 {
        f.step();
        assert_eq!(f.particles().len(), 30);
    }
}

#[test]
fn spawn_ranges_match_params() {
    let f = field(3);
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1280.0);
        assert_eq!(p.position.y, 770.0);
        assert!(p.radius >= 20.0 && p.radius < 60.0);
        assert!(p.opacity >= 0.2 && p.opacity < 0.5);
        assert!(p.speed >= 0.3 && p.speed < 1.0);
        assert!(p.decay >= 0.0005 && p.decay < 0.0015);
    }
}

#[test]
fn particles_rise_and_fade_until_reset() {
    let mut f = field(4);
    let before: Vec<_> = f.particles().to_vec();
    let respawned = f.step();
    assert_eq!(respawned, 0, "nothing should be spent after one frame");
    for (a, b) in before.iter().zip(f.particles()) {
        assert!(b.position.y < a.position.y);
        assert!(b.opacity < a.opacity);
    }
}

#[test]
fn opacity_never_persists_non_positive() {
    let mut f = field(5);
    let mut total_respawns = 0;
    // long enough for every particle to fade at least once
    for _ in 0..3_000 {
        total_respawns += f.step();
        assert!(f.particles().iter().all(|p| p.opacity > 0.0));
    }
    assert!(total_respawns >= 30);
}

#[test]
fn resize_moves_future_spawns() {
    let mut f = field(6);
    f.resize(400.0, 300.0);
    assert_eq!(f.size(), glam::Vec2::new(400.0, 300.0));
    for _ in 0..3_000 {
        f.step();
    }
    // everything has cycled at least once by now
    assert!(f.particles().iter().all(|p| p.position.x < 400.0 && p.position.y <= 350.0));
}

#[test]
fn custom_pool_size_is_honored() {
    let params = SmokeParams {
        particle_count: 5,
        ..SmokeParams::default()
    };
    let mut f = SmokeField::new(100.0, 100.0, params, StdRng::seed_from_u64(7));
    f.step();
    assert_eq!(f.particles().len(), 5);
}

#[test]
fn zero_opacity_floor_still_spawns_visible() {
    let params = SmokeParams {
        opacity: (0.0, 0.0),
        ..SmokeParams::default()
    };
    let mut f = SmokeField::new(640.0, 480.0, params, StdRng::seed_from_u64(11));
    assert!(f.particles().iter().all(|p| p.opacity >= MIN_SPAWN_OPACITY));
    for _ in 0..200 {
        f.step();
        assert!(f.particles().iter().all(|p| p.opacity > 0.0));
    }
}

#[test]
fn pool_size_is_capped() {
    let params = SmokeParams {
        particle_count: MAX_PARTICLE_COUNT * 4,
        ..SmokeParams::default()
    };
    let f = SmokeField::new(640.0, 480.0, params, StdRng::seed_from_u64(12));
    assert_eq!(f.particles().len(), MAX_PARTICLE_COUNT);
    assert_eq!(f.params().particle_count, MAX_PARTICLE_COUNT);
}
