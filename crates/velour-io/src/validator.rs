//! Validation of host-supplied boundary data.
//!
//! The engine itself never crashes on bad input — unknown names fall
//! back, missing ids no-op. The validator exists for the outer
//! surfaces (CLI, config files) that want to report problems to a
//! human instead of silently falling back.

use velour_types::{VelourError, VelourResult};

use crate::contract::{AttachmentFrame, GarmentSpec, HairSpec};

/// Validates a garment creation request.
///
/// Checks:
/// - Non-empty avatar id
/// - At least one attachment point
/// - All attachment names non-empty, all positions finite
pub fn validate_garment_spec(spec: &GarmentSpec) -> VelourResult<()> {
    if spec.avatar_id.is_empty() {
        return Err(VelourError::InvalidInput("Empty avatar id".into()));
    }
    if spec.attachments.is_empty() {
        return Err(VelourError::InvalidInput(
            "Garment needs at least one attachment point".into(),
        ));
    }
    for (name, position) in &spec.attachments {
        if name.is_empty() {
            return Err(VelourError::InvalidInput(
                "Attachment point with empty name".into(),
            ));
        }
        ensure_finite(name, position)?;
    }
    Ok(())
}

/// Validates a hair creation request.
pub fn validate_hair_spec(spec: &HairSpec) -> VelourResult<()> {
    if spec.avatar_id.is_empty() {
        return Err(VelourError::InvalidInput("Empty avatar id".into()));
    }
    ensure_finite("head_position", &spec.head_position)?;
    Ok(())
}

/// Validates a per-frame attachment update.
pub fn validate_attachment_frame(frame: &AttachmentFrame) -> VelourResult<()> {
    for (name, position) in &frame.positions {
        ensure_finite(name, position)?;
    }
    Ok(())
}

fn ensure_finite(name: &str, position: &[f32; 3]) -> VelourResult<()> {
    if position.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(VelourError::InvalidInput(format!(
            "Non-finite position for '{name}': {position:?}"
        )))
    }
}
