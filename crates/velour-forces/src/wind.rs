//! Wind sources and deterministic turbulence sampling.

use serde::{Deserialize, Serialize};
use velour_math::Vec3;
use velour_types::constants::TURBULENCE_SPATIAL_FREQUENCY;
use velour_types::Scalar;

/// A single wind source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    /// Unit direction the wind blows toward.
    pub direction: Vec3,
    /// Base force magnitude.
    pub strength: Scalar,
    /// Amplitude of the turbulence term.
    pub turbulence: Scalar,
    /// Temporal frequency of the turbulence (rad/s).
    pub frequency: Scalar,
}

impl WindField {
    /// Creates a wind source, normalizing the direction.
    ///
    /// A zero direction degenerates to pure turbulence.
    pub fn new(direction: Vec3, strength: Scalar, turbulence: Scalar, frequency: Scalar) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            strength,
            turbulence,
            frequency,
        }
    }

    /// A steady breeze along `direction` with mild turbulence.
    pub fn breeze(direction: Vec3, strength: Scalar) -> Self {
        Self::new(direction, strength, strength * 0.25, 1.5)
    }
}

/// Samples the force one wind source exerts at a world position.
///
/// The turbulence term is a spatial-temporal trig field, not noise:
/// `(sin(x·k + t·f), cos(y·k + t·f), sin(z·k + t·f)) × turbulence`
/// for the fixed spatial frequency `k`. Reproducible given the same
/// `(position, time, wind)` tuple; the caller scales the result by the
/// body material's wind response and sums over all sources.
pub fn wind_force(position: Vec3, time: Scalar, wind: &WindField) -> Vec3 {
    let k = TURBULENCE_SPATIAL_FREQUENCY;
    let phase = time * wind.frequency;
    let turbulence = Vec3::new(
        (position.x * k + phase).sin(),
        (position.y * k + phase).cos(),
        (position.z * k + phase).sin(),
    ) * wind.turbulence;

    wind.direction * wind.strength + turbulence
}
