//! # velour-material
//!
//! Read-only preset tables for cloth materials and hair styles.
//!
//! Presets are closed enums resolving to strongly-typed property
//! structs, so a typo cannot select a missing material at compile
//! time. Host-facing string lookup falls back to a documented default
//! preset instead of erroring — this is a best-effort visual system.
//!
//! Properties are **copied** into each body at creation; tuning one
//! body never affects another.

pub mod cloth;
pub mod hair;

pub use cloth::{ClothPreset, ClothProperties};
pub use hair::{HairPreset, HairProperties};
