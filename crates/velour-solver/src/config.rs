//! Solver configuration.
//!
//! Parameters that control the per-step pipeline: relaxation iteration
//! counts, the timestep clamp, and contact tuning.

use serde::{Deserialize, Serialize};
use velour_types::constants;
use velour_types::Scalar;

/// Configuration for the simulation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Relaxation iterations per step for cloth bodies.
    pub cloth_iterations: u32,

    /// Relaxation sub-steps per step for hair bodies.
    pub hair_substeps: u32,

    /// Relaxation iterations within each hair sub-step.
    pub hair_iterations: u32,

    /// Upper bound on the integration timestep (seconds). A long host
    /// frame is clamped here, never scaled up.
    pub fixed_time_step: Scalar,

    /// Restitution for world-bounds (ground) contacts.
    pub ground_restitution: Scalar,

    /// Restitution for collider proxy contacts.
    pub object_restitution: Scalar,

    /// Half-extent of the symmetric world bounds box (meters).
    pub world_bounds_extent: Scalar,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cloth_iterations: constants::DEFAULT_CLOTH_ITERATIONS,
            hair_substeps: constants::DEFAULT_HAIR_SUBSTEPS,
            hair_iterations: constants::DEFAULT_HAIR_ITERATIONS,
            fixed_time_step: constants::FIXED_TIME_STEP,
            ground_restitution: constants::GROUND_RESTITUTION,
            object_restitution: constants::OBJECT_RESTITUTION,
            world_bounds_extent: constants::WORLD_BOUNDS_EXTENT,
        }
    }
}

impl SolverConfig {
    /// Creates a config for debugging (fewer iterations).
    pub fn debug() -> Self {
        Self {
            cloth_iterations: 3,
            hair_substeps: 1,
            hair_iterations: 3,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more relaxation work per step).
    pub fn high_quality() -> Self {
        Self {
            cloth_iterations: 20,
            hair_substeps: 8,
            hair_iterations: 6,
            ..Default::default()
        }
    }
}
