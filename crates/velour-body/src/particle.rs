//! Verlet particles — the atomic simulated unit.
//!
//! A particle carries its current and previous position; the pair
//! encodes velocity implicitly. The explicit `velocity` field is a
//! cache derived after integration, used by the next frame's drag and
//! collision response.

use velour_math::Vec3;
use velour_types::Scalar;

/// A point mass with Verlet-style position history.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Position one step back; `position - previous_position` is the
    /// implicit velocity.
    pub previous_position: Vec3,
    /// Velocity cache, recomputed after integration.
    pub velocity: Vec3,
    /// Force accumulator, reset every step.
    pub acceleration: Vec3,
    /// Mass in kg. Irrelevant while `fixed` is set.
    pub mass: Scalar,
    /// Pinned to an attachment point. Fixed particles are repositioned
    /// exogenously (skeletal follow) and never moved by the solver.
    pub fixed: bool,
}

impl Particle {
    /// Creates a free particle at rest.
    pub fn new(position: Vec3, mass: Scalar) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass,
            fixed: false,
        }
    }

    /// Creates a fixed particle at rest.
    pub fn fixed_at(position: Vec3, mass: Scalar) -> Self {
        Self {
            fixed: true,
            ..Self::new(position, mass)
        }
    }

    /// Accumulates a force, scaled by inverse mass.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        if !self.fixed && self.mass > 0.0 {
            self.acceleration += force / self.mass;
        }
    }

    /// Accumulates a mass-independent acceleration (gravity).
    #[inline]
    pub fn apply_acceleration(&mut self, accel: Vec3) {
        if !self.fixed {
            self.acceleration += accel;
        }
    }

    /// Clears the force accumulator at the start of a step.
    #[inline]
    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vec3::ZERO;
    }

    /// Pins the particle in place.
    pub fn pin(&mut self) {
        self.fixed = true;
        self.previous_position = self.position;
        self.velocity = Vec3::ZERO;
    }

    /// Moves a fixed particle to an authoritative external position.
    ///
    /// Previous position follows so the reposition does not inject
    /// implicit velocity into the next integration step. No-op for
    /// free particles — the solver owns those.
    pub fn reposition(&mut self, position: Vec3) {
        if self.fixed {
            self.previous_position = self.position;
            self.position = position;
        }
    }

    /// Kinetic energy from the cached velocity: `0.5 · m · |v|²`.
    pub fn kinetic_energy(&self) -> Scalar {
        if self.fixed {
            0.0
        } else {
            0.5 * self.mass * self.velocity.length_squared()
        }
    }
}
