//! Property-based invariants for the impulse envelope and the smoke pool.
//!
//! Verifies:
//! 1. Envelope equals `(1 - p)^d` and never increases with `p`
//! 2. Impulse length is `round(rate * duration)` for valid inputs
//! 3. After every step each particle holds a positive opacity
//! 4. The pool size never changes

use fx_core::{envelope, impulse_len, ImpulseParams, ImpulseResponse, SmokeField, SmokeParams};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn envelope_is_power_law_and_non_increasing(
        decay in 0.01f32..10.0,
        p in 0.0f32..1.0,
        dp in 0.0f32..1.0,
    ) {
        let expected = (1.0 - p).powf(decay);
        prop_assert!((envelope(p, decay) - expected).abs() <= 1e-6);
        let q = (p + dp).min(1.0);
        prop_assert!(envelope(q, decay) <= envelope(p, decay));
    }

    #[test]
    fn impulse_length_matches_rate_and_duration(
        rate in 1_000u32..48_000,
        duration in 0.01f32..0.2,
        seed in any::<u64>(),
    ) {
        let params = ImpulseParams { duration_sec: duration, decay: 2.0 };
        let mut rng = StdRng::seed_from_u64(seed);
        let ir = ImpulseResponse::synthesize(rate as f32, params, &mut rng).unwrap();
        prop_assert_eq!(ir.len(), impulse_len(rate as f32, duration));
        prop_assert!(ir.channel(0).unwrap().iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn smoke_opacity_stays_positive_and_pool_fixed(
        count in 1usize..64,
        width in 1.0f32..2_000.0,
        height in 1.0f32..2_000.0,
        steps in 1usize..400,
        seed in any::<u64>(),
    ) {
        let params = SmokeParams {
            particle_count: count,
            // fast fading so resets happen inside the step budget
            decay: (0.01, 0.05),
            ..SmokeParams::default()
        };
        let mut field = SmokeField::new(width, height, params, StdRng::seed_from_u64(seed));
        for _ in 0..steps {
            field.step();
            prop_assert_eq!(field.particles().len(), count);
            prop_assert!(field.particles().iter().all(|p| p.opacity > 0.0));
        }
    }
}
