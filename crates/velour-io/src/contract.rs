//! Boundary contract types.
//!
//! These types define the I/O boundary of the Velour simulation
//! engine. They are serializable for API transport and CLI
//! configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Host request to dress an avatar in a garment.
///
/// Names are resolved to presets by the engine; unknown names fall
/// back to the documented defaults rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentSpec {
    /// The avatar to dress.
    pub avatar_id: String,
    /// Wardrobe kind name (e.g. "shirt", "dress").
    pub garment_type: String,
    /// Material preset name (e.g. "cotton", "silk").
    pub material: String,
    /// Named attachment point world positions.
    pub attachments: HashMap<String, [f32; 3]>,
}

/// Host request to grow hair on an avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HairSpec {
    /// The avatar to style.
    pub avatar_id: String,
    /// World position of the head center.
    pub head_position: [f32; 3],
    /// Style preset name (e.g. "long_wavy").
    pub hair_style: String,
}

/// Per-frame authoritative attachment positions from the skeleton
/// collaborator. Applied to a body's fixed particles before the
/// frame's `update()` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachmentFrame {
    /// Named attachment point → world position.
    pub positions: HashMap<String, [f32; 3]>,
}

/// Aggregate counters reported by a simulation system.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of registered bodies.
    pub body_count: usize,
    /// Total particle count across bodies.
    pub particle_count: usize,
    /// Total constraint count across bodies.
    pub constraint_count: usize,
    /// Whether the system is in the Running state.
    pub is_simulating: bool,
    /// Current simulation speed multiplier.
    pub simulation_speed: f32,
}
