//! Gauss-Seidel constraint relaxation.
//!
//! Position-based, not force-based: each pass visits every constraint
//! once, in insertion order, and moves the endpoints directly toward
//! the rest length. Repeated passes give the surface its springiness
//! without a stiff ODE solver.

use velour_body::{Constraint, Particle};
use velour_types::constants::EPSILON;

/// Runs `iterations` relaxation passes over the constraint list.
///
/// For each constraint the positional error
/// `(distance - rest_length) × stiffness` is corrected along the
/// current direction: split evenly when both endpoints are free, or
/// applied in full to the free endpoint when the other is fixed. A
/// constraint with both endpoints fixed, or with a degenerate
/// zero-length direction, is skipped for the pass.
pub fn relax_constraints(particles: &mut [Particle], constraints: &[Constraint], iterations: u32) {
    for _ in 0..iterations {
        for constraint in constraints {
            let a_fixed = particles[constraint.a].fixed;
            let b_fixed = particles[constraint.b].fixed;
            if a_fixed && b_fixed {
                continue;
            }

            let delta = particles[constraint.b].position - particles[constraint.a].position;
            let dist = delta.length();
            if dist <= EPSILON {
                continue;
            }

            let error = dist - constraint.rest_length;
            let correction = delta / dist * (error * constraint.stiffness);

            match (a_fixed, b_fixed) {
                (false, false) => {
                    particles[constraint.a].position += correction * 0.5;
                    particles[constraint.b].position -= correction * 0.5;
                }
                (false, true) => {
                    particles[constraint.a].position += correction;
                }
                (true, false) => {
                    particles[constraint.b].position -= correction;
                }
                (true, true) => unreachable!(),
            }
        }
    }
}
