//! Random draws used by the state setters.
//!
//! Hand-rolled inverse-CDF and rejection samplers over [`rand::Rng`];
//! avoids the `rand_distr` dependency.

use glam::Vec3;
use rand::Rng;

/// Bernoulli trial: `true` with probability `p`.
///
/// Always consumes exactly one draw, so the stream position after a trial
/// does not depend on `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Uniform sample from `[low, high]`. Requires `low <= high`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    rng.random_range(low..=high)
}

/// Sample the triangular distribution on `[low, high]` peaking at `mode`.
///
/// Requires `low <= mode <= high`. A degenerate range returns `low`.
pub fn triangular<R: Rng + ?Sized>(rng: &mut R, low: f32, mode: f32, high: f32) -> f32 {
    debug_assert!(low <= mode && mode <= high, "triangular({low}, {mode}, {high})");
    let span = high - low;
    if span <= 0.0 {
        return low;
    }
    let u: f32 = rng.random();
    let split = (mode - low) / span;
    let v = if u < split {
        low + (u * span * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * span * (high - mode)).sqrt()
    };
    v.clamp(low, high)
}

/// A direction drawn uniformly from the unit sphere.
pub fn unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    // Rejection-sample the unit ball, then project onto the sphere.
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// A vector with uniformly random direction and magnitude drawn from
/// `triangular(0, 0, max_magnitude)`, so slow values dominate.
///
/// The length never exceeds `max_magnitude`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, max_magnitude: f32) -> Vec3 {
    let magnitude = triangular(rng, 0.0, 0.0, max_magnitude);
    cap_length(magnitude * unit_vector(rng), max_magnitude)
}

/// Scale `v` down so that `v.length() <= max`.
///
/// A normalized direction can be an ulp longer than one, and rescaling
/// rounds as well, so the final length is re-checked and trimmed.
fn cap_length(v: Vec3, max: f32) -> Vec3 {
    let mut v = v.clamp_length_max(max);
    for _ in 0..16 {
        if v.length() <= max {
            break;
        }
        v *= 1.0 - 4.0 * f32::EPSILON;
    }
    v
}
