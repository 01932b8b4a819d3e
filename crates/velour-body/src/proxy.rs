//! Collision proxies — the minimal external representation of a scene
//! object the solver collides particles against.

use serde::{Deserialize, Serialize};
use velour_math::Vec3;
use velour_types::constants::DEFAULT_COLLIDER_RADIUS;
use velour_types::Scalar;

/// A scene object proxied as a point and radius.
///
/// Radius is an explicit per-proxy field; [`CollisionProxy::at`]
/// applies the engine default when the host does not care.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionProxy {
    /// World-space center.
    pub position: Vec3,
    /// Collision radius in meters.
    pub radius: Scalar,
}

impl CollisionProxy {
    /// Creates a proxy with an explicit radius.
    pub fn new(position: Vec3, radius: Scalar) -> Self {
        Self { position, radius }
    }

    /// Creates a proxy with the engine default radius.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, DEFAULT_COLLIDER_RADIUS)
    }
}
