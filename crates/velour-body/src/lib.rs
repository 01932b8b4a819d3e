//! # velour-body
//!
//! The simulated aggregates of the Velour engine.
//!
//! A body owns a particle arena (stable indices), a constraint list,
//! a copy of its material, a named attachment map, body-local collision
//! proxies, and the render geometry buffer it writes back into each
//! frame. Two concrete bodies exist:
//!
//! - [`Garment`] — cloth with 2D grid topology, triangle-based
//!   constraint generation
//! - [`StrandBundle`] — hair with 1D chain topology, one spring chain
//!   per strand

pub mod constraint;
pub mod garment;
pub mod particle;
pub mod proxy;
pub mod strand;

pub use constraint::{Constraint, ConstraintKind};
pub use garment::{Garment, GarmentDimensions, GarmentKind};
pub use particle::Particle;
pub use proxy::CollisionProxy;
pub use strand::StrandBundle;
