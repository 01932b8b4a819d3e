//! Semi-implicit Verlet integration and the timestep clamp.

use velour_body::Particle;
use velour_types::Scalar;

/// Clamps the effective timestep for a host frame.
///
/// `dt = min(delta_time × speed, fixed_time_step)` — clamping, not
/// scaling, so a long frame (backgrounded tab, GC pause) cannot blow
/// up the integrator.
#[inline]
pub fn clamp_timestep(delta_time: Scalar, speed: Scalar, fixed_time_step: Scalar) -> Scalar {
    (delta_time * speed).min(fixed_time_step)
}

/// Advances free particles one Verlet step.
///
/// `new = position + (position - previous) + acceleration · dt²`;
/// the velocity cache is re-derived afterwards as
/// `(position - previous) / dt` for the next frame's drag and
/// collision response. Fixed particles keep their velocity zeroed so
/// stale caches cannot leak into force terms.
pub fn integrate(particles: &mut [Particle], dt: Scalar) {
    if dt <= 0.0 {
        return;
    }
    let dt_sq = dt * dt;
    let inv_dt = 1.0 / dt;

    for particle in particles.iter_mut() {
        if particle.fixed {
            particle.velocity = velour_math::Vec3::ZERO;
            continue;
        }

        let current = particle.position;
        particle.position =
            current + (current - particle.previous_position) + particle.acceleration * dt_sq;
        particle.previous_position = current;
        particle.velocity = (particle.position - particle.previous_position) * inv_dt;
    }
}
