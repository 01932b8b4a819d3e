//! # velour-math
//!
//! Math primitives for the Velour simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3` etc.) as the engine's canonical
//!   vector types — collaborators convert to/from their own vector
//!   representation at the boundary
//! - Deterministic sphere-surface sampling for hair root scattering

pub mod sampling;

// Re-export glam types as the canonical math types for Velour.
pub use glam::{Vec2, Vec3, Vec4};
