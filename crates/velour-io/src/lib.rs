//! # velour-io
//!
//! Host boundary contract and input validation.
//!
//! Defines the serializable types external systems (CLI, host
//! application, skeleton/attachment collaborator) use to communicate
//! with the Velour simulation core. Vectors cross this boundary as
//! `[f32; 3]` so the contract does not leak the engine's math types.

pub mod contract;
pub mod validator;

pub use contract::{AttachmentFrame, GarmentSpec, HairSpec, SimulationStats};
pub use validator::{validate_attachment_frame, validate_garment_spec, validate_hair_spec};
