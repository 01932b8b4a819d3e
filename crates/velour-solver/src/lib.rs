//! # velour-solver
//!
//! The numerical core of the Velour engine: iterative position-based
//! constraint relaxation (Gauss-Seidel), semi-implicit Verlet
//! integration, and the solver configuration.
//!
//! The relaxation visits constraints in insertion order each pass so
//! every correction immediately sees the results of prior corrections —
//! this converges faster and more stably than a Jacobi-style update
//! for a real-time solver, at the cost of in-body parallelism.

pub mod config;
pub mod integrate;
pub mod relaxation;

pub use config::SolverConfig;
pub use integrate::{clamp_timestep, integrate};
pub use relaxation::relax_constraints;
