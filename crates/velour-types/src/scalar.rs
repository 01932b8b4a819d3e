//! Scalar type alias for the simulation.
//!
//! Using `f32` to match the render-facing vertex buffers.
//! This alias makes it easy to experiment with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
///
/// Set to `f32` to match the geometry buffers the renderer consumes.
pub type Scalar = f32;
