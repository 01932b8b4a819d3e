//! # velour-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Velour garment and hair simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Velour crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{VelourError, VelourResult};
pub use ids::BodyId;
pub use scalar::Scalar;
