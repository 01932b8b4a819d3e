//! Simulation event types.
//!
//! Structured events emitted by the systems at various points in each
//! step. Events are lightweight value types that carry just enough
//! data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulation clock at the start of this step (seconds).
        sim_time: f64,
        /// Number of bodies stepped.
        body_count: usize,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// Collision resolution completed for a body.
    Contacts {
        /// Body the contacts belong to.
        body_id: u64,
        /// Number of contacts resolved.
        resolved_count: u32,
        /// Maximum penetration depth (meters).
        max_penetration: f32,
    },

    /// Kinetic energy snapshot for a body.
    Energy {
        /// Body the snapshot belongs to.
        body_id: u64,
        /// Kinetic energy (0.5 · m · v²), summed over free particles.
        kinetic: f64,
    },

    /// A body was registered with a system.
    BodyCreated {
        /// Generated body id.
        body_id: u64,
        /// Particle count of the new body.
        particle_count: usize,
    },

    /// A body was removed from a system.
    BodyRemoved {
        /// Removed body id.
        body_id: u64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
