//! Strongly-typed identifiers for simulation entities.
//!
//! Body handles are newtypes so a garment id cannot be confused with
//! a plain counter. Particle indices stay raw `usize` values — they
//! only ever index into their owning body's arena.

use serde::{Deserialize, Serialize};

/// Handle for a simulated body (garment or strand bundle).
///
/// Generated monotonically by the owning system, so iteration in
/// id order equals insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u64);
