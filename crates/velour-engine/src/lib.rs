//! # velour-engine
//!
//! The host-facing simulation systems.
//!
//! A system owns every body of its class in an insertion-ordered
//! registry and drives the shared per-frame pipeline:
//!
//! ```text
//! force accumulation → constraint relaxation → Verlet integration
//!     → collision resolution → geometry write-back
//! ```
//!
//! Systems are explicitly constructed objects owned by the host's
//! composition root — there are no global singletons — so tests can
//! run any number of independent systems side by side.
//!
//! Everything is single-threaded and frame-driven: the host calls
//! `update(delta_time, sim_time)` once per render frame from the main
//! thread, passing the simulation clock explicitly so wind sampling
//! and replays are deterministic.

mod core;

pub mod cloth;
pub mod hair;

pub use cloth::ClothSystem;
pub use hair::HairSystem;
