//! Particle-pair constraints, relaxed iteratively by the solver.
//!
//! Constraints reference particles by index into the owning body's
//! arena; they never own particles. Rest length is captured from the
//! initial geometry at build time and is immutable afterwards.

use serde::{Deserialize, Serialize};
use velour_types::constants::{BEND_DAMPING_RATIO, BEND_STIFFNESS_RATIO};
use velour_types::Scalar;

use crate::particle::Particle;

/// What a constraint preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Structural edge — holds the surface together.
    Distance,
    /// Shape preservation across a cell diagonal. Much softer than
    /// structural edges so the surface can fold without collapsing.
    Bend,
}

/// A target-distance relation between two particles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint category.
    pub kind: ConstraintKind,
    /// Index of the first endpoint in the owning body's arena.
    pub a: usize,
    /// Index of the second endpoint. Always different from `a`.
    pub b: usize,
    /// Target distance, captured from initial geometry. Immutable.
    pub rest_length: Scalar,
    /// Correction gain in `[0, 1]`.
    pub stiffness: Scalar,
    /// Damping share in `[0, 1]`.
    pub damping: Scalar,
}

impl Constraint {
    /// Builds a structural constraint, capturing the rest length from
    /// the particles' current distance.
    pub fn distance(
        a: usize,
        b: usize,
        particles: &[Particle],
        stiffness: Scalar,
        damping: Scalar,
    ) -> Self {
        debug_assert_ne!(a, b);
        Self {
            kind: ConstraintKind::Distance,
            a,
            b,
            rest_length: particles[a].position.distance(particles[b].position),
            stiffness,
            damping,
        }
    }

    /// Builds a bend constraint from the body material's structural
    /// parameters. Bend constraints take a fraction of the structural
    /// stiffness and half the damping so the surface folds without
    /// collapsing.
    pub fn bend(
        a: usize,
        b: usize,
        particles: &[Particle],
        structural_stiffness: Scalar,
        material_damping: Scalar,
    ) -> Self {
        debug_assert_ne!(a, b);
        Self {
            kind: ConstraintKind::Bend,
            a,
            b,
            rest_length: particles[a].position.distance(particles[b].position),
            stiffness: structural_stiffness * BEND_STIFFNESS_RATIO,
            damping: material_damping * BEND_DAMPING_RATIO,
        }
    }
}
