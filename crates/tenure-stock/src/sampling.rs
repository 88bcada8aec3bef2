//! Random draws used to seed houses and households.
//!
//! Parameters are trusted: a negative standard deviation simply mirrors the
//! draw around the mean instead of failing, and nothing is clamped here.
//! Callers apply their own floors.

use rand::Rng;
use rand_distr::StandardNormal;

/// Draw one value from `N(mean, std_dev)`.
pub fn normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    std_dev.mul_add(z, mean)
}

/// Draw one value from `U[0, 1)`.
pub fn unit_uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}
