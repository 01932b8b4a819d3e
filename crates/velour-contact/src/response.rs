//! Aggregated result of a contact resolution pass.

/// Counters reported by each resolution pass, summed across passes
/// for telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactReport {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Deepest penetration encountered before correction (meters).
    pub max_penetration: f32,
}

impl ContactReport {
    /// Folds another pass's counters into this one.
    pub fn merge(&mut self, other: ContactReport) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
    }
}
