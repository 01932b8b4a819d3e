//! # velour-mesh
//!
//! The render-facing geometry buffer of the Velour engine.
//!
//! The simulation writes particle positions into a [`RenderGeometry`]
//! by index copy each frame and marks it dirty; the rendering
//! collaborator uploads dirty buffers and clears the flag. Keeping the
//! buffer separate from the particle arena avoids aliasing between
//! solver state and vertex data.

pub mod geometry;
pub mod normals;

pub use geometry::{GeometryTopology, RenderGeometry};
pub use normals::compute_vertex_normals;
