//! Deterministic random sampling on and around the unit sphere.
//!
//! Hair root placement needs points distributed uniformly over a
//! sphere's surface. Sampling the polar angle with an inverse-cosine
//! transform avoids the pole clustering a naive uniform-angle sample
//! produces. All functions draw from a caller-supplied RNG so
//! construction is reproducible from a seed.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Samples a point uniformly on the surface of the unit sphere.
///
/// Azimuth is uniform in `[0, 2π)`; the polar angle is
/// `acos(1 - 2u)` so that equal areas of the sphere are equally likely.
pub fn unit_sphere_surface<R: Rng>(rng: &mut R) -> Vec3 {
    let azimuth = rng.gen::<f32>() * TAU;
    let polar = (1.0 - 2.0 * rng.gen::<f32>()).clamp(-1.0, 1.0).acos();

    let sin_polar = polar.sin();
    Vec3::new(
        sin_polar * azimuth.cos(),
        polar.cos(),
        sin_polar * azimuth.sin(),
    )
}

/// Samples a mostly-downward unit direction with lateral jitter.
///
/// Used for the initial rest direction of hair strands: strands hang
/// down but fan out slightly so they do not collapse into a single
/// column.
pub fn jittered_down<R: Rng>(rng: &mut R, lateral_spread: f32) -> Vec3 {
    let jitter_x = (rng.gen::<f32>() - 0.5) * 2.0 * lateral_spread;
    let jitter_z = (rng.gen::<f32>() - 0.5) * 2.0 * lateral_spread;
    Vec3::new(jitter_x, -1.0, jitter_z).normalize()
}

/// Samples a scalar uniformly in `[0, max)`.
pub fn uniform<R: Rng>(rng: &mut R, max: f32) -> f32 {
    rng.gen::<f32>() * max
}
