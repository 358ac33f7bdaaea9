//! Sample color generation
//!
//! Deterministic inputs for sweep-style tests: cube grids, gamut
//! boundary excursions, and seeded random samples.

use oxcolor_core::Rgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A uniform grid over the RGB cube, `steps` points per axis
pub fn rgb_grid(steps: usize) -> Vec<Rgb> {
    assert!(steps >= 2);
    let mut out = Vec::with_capacity(steps * steps * steps);
    let scale = 1.0 / (steps - 1) as f64;
    for r in 0..steps {
        for g in 0..steps {
            for b in 0..steps {
                out.push(Rgb::new(
                    r as f64 * scale,
                    g as f64 * scale,
                    b as f64 * scale,
                ));
            }
        }
    }
    out
}

/// Seeded random samples in [0, 1]³, reproducible across runs
pub fn random_samples(count: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// Out-of-gamut excursions: negative channels and channels above 1
///
/// These are legal intermediates (wide-gamut colors expressed in a
/// narrow space) and every conversion must pass them through
/// arithmetically.
pub fn gamut_boundary_samples() -> Vec<Rgb> {
    vec![
        Rgb::new(-0.1, 0.5, 0.5),
        Rgb::new(0.5, -0.3, 1.2),
        Rgb::new(1.5, 0.0, 0.0),
        Rgb::new(-0.05, -0.05, -0.05),
        Rgb::new(1.01, 1.01, 1.01),
        Rgb::new(0.0, 1.4, -0.6),
    ]
}
