//! World bounds — a symmetric box that catches runaway particles.

use velour_body::Particle;
use velour_types::constants::WORLD_BOUNDS_EXTENT;
use velour_types::Scalar;

use crate::response::ContactReport;

/// Axis-aligned symmetric bounds box `[-extent, extent]³`.
///
/// Applied independently of the collider list: each axis clamps the
/// position and flips the velocity component scaled by restitution.
/// The bottom face doubles as the ground, which is why bounds take the
/// smaller ground restitution.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// Half-extent of the box on every axis (meters).
    pub extent: Scalar,
}

impl WorldBounds {
    /// Creates bounds with the given half-extent.
    pub fn new(extent: Scalar) -> Self {
        Self { extent }
    }

    /// Resolves every free particle against the box.
    pub fn resolve(
        &self,
        particles: &mut [Particle],
        restitution: Scalar,
        dt: Scalar,
    ) -> ContactReport {
        let mut report = ContactReport::default();

        for particle in particles.iter_mut() {
            if particle.fixed {
                continue;
            }

            let mut clamped = false;
            let mut depth = 0.0_f32;

            for axis in 0..3 {
                let value = particle.position[axis];
                if value < -self.extent {
                    depth = depth.max(-self.extent - value);
                    particle.position[axis] = -self.extent;
                    particle.velocity[axis] = -particle.velocity[axis] * restitution;
                    clamped = true;
                } else if value > self.extent {
                    depth = depth.max(value - self.extent);
                    particle.position[axis] = self.extent;
                    particle.velocity[axis] = -particle.velocity[axis] * restitution;
                    clamped = true;
                }
            }

            if clamped {
                // Rewrite the implicit Verlet velocity to the
                // reflected one.
                particle.previous_position = particle.position - particle.velocity * dt;

                report.resolved_count += 1;
                report.max_penetration = report.max_penetration.max(depth);
            }
        }

        report
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_BOUNDS_EXTENT)
    }
}
