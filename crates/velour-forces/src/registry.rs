//! The force field registry — gravity plus a mutable wind list.

use velour_body::Particle;
use velour_math::Vec3;
use velour_types::constants::GRAVITY;
use velour_types::Scalar;

use crate::wind::{wind_force, WindField};

/// Per-system force fields, shared by every body the system owns.
///
/// Read-mostly during a step; mutated only between steps via the
/// add/remove API.
#[derive(Debug, Clone)]
pub struct ForceRegistry {
    /// Global gravity acceleration.
    pub gravity: Vec3,
    winds: Vec<WindField>,
}

impl ForceRegistry {
    /// Creates a registry with standard downward gravity and no wind.
    pub fn new() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            winds: Vec::new(),
        }
    }

    /// Adds a wind source, returning its index for later removal.
    pub fn add_wind(&mut self, wind: WindField) -> usize {
        self.winds.push(wind);
        self.winds.len() - 1
    }

    /// Removes a wind source by index. Out-of-range is a no-op.
    pub fn remove_wind(&mut self, index: usize) {
        if index < self.winds.len() {
            self.winds.remove(index);
        }
    }

    /// Registered wind sources.
    pub fn winds(&self) -> &[WindField] {
        &self.winds
    }

    /// Drops every wind source.
    pub fn clear_winds(&mut self) {
        self.winds.clear();
    }

    /// Accumulates external forces into every free particle:
    /// acceleration reset, gravity, `-damping · velocity` drag, and
    /// the additive wind sources scaled by the material's wind
    /// response.
    pub fn accumulate(
        &self,
        particles: &mut [Particle],
        wind_response: Scalar,
        damping: Scalar,
        time: Scalar,
    ) {
        for particle in particles.iter_mut() {
            if particle.fixed {
                continue;
            }
            particle.reset_acceleration();
            particle.apply_acceleration(self.gravity);
            particle.apply_force(-particle.velocity * damping);

            if !self.winds.is_empty() && wind_response > 0.0 {
                let mut wind_total = Vec3::ZERO;
                for wind in &self.winds {
                    wind_total += wind_force(particle.position, time, wind);
                }
                particle.apply_force(wind_total * wind_response);
            }
        }
    }
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
