//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Fixed upper bound on the integration timestep (seconds). 1/60th of
/// a second — a long host frame is clamped to this, never scaled up.
pub const FIXED_TIME_STEP: f32 = 1.0 / 60.0;

/// Default constraint-relaxation iterations per step for cloth.
pub const DEFAULT_CLOTH_ITERATIONS: u32 = 10;

/// Default relaxation sub-steps per step for hair.
pub const DEFAULT_HAIR_SUBSTEPS: u32 = 5;

/// Default relaxation iterations per hair sub-step.
pub const DEFAULT_HAIR_ITERATIONS: u32 = 5;

/// Number of particles a hair strand is subdivided into.
pub const SEGMENTS_PER_STRAND: usize = 10;

/// Default collision proxy radius (meters), applied when the host
/// supplies a proxy without an explicit radius.
pub const DEFAULT_COLLIDER_RADIUS: f32 = 0.1;

/// Restitution for ground contacts (small bounce).
pub const GROUND_RESTITUTION: f32 = 0.3;

/// Restitution for object contacts.
pub const OBJECT_RESTITUTION: f32 = 0.5;

/// Half-extent of the symmetric world bounds box (meters).
pub const WORLD_BOUNDS_EXTENT: f32 = 10.0;

/// Fraction of structural stiffness used by bend constraints.
pub const BEND_STIFFNESS_RATIO: f32 = 0.1;

/// Fraction of material damping used by bend constraints.
pub const BEND_DAMPING_RATIO: f32 = 0.5;

/// Spatial frequency of the wind turbulence field (1/m).
pub const TURBULENCE_SPATIAL_FREQUENCY: f32 = 0.5;

/// Per-particle mass = material density × this scale.
pub const PARTICLE_MASS_SCALE: f32 = 0.001;

/// Lower clamp for the simulation speed multiplier.
pub const MIN_SIMULATION_SPEED: f32 = 0.1;

/// Upper clamp for the simulation speed multiplier.
pub const MAX_SIMULATION_SPEED: f32 = 5.0;

/// Epsilon for floating-point comparisons and degeneracy guards.
pub const EPSILON: f32 = 1.0e-7;
