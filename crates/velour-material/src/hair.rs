//! Hair style presets.
//!
//! Each preset fixes the strand topology (count, length, segment
//! subdivision is engine-wide) and the physical response of a bundle.

use serde::{Deserialize, Serialize};
use velour_types::Scalar;

/// The closed set of built-in hair styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HairPreset {
    ShortStraight,
    LongWavy,
    CurlyAfro,
    Braided,
}

impl HairPreset {
    /// Returns all presets.
    pub fn all() -> &'static [HairPreset] {
        &[
            HairPreset::ShortStraight,
            HairPreset::LongWavy,
            HairPreset::CurlyAfro,
            HairPreset::Braided,
        ]
    }

    /// Returns the preset's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            HairPreset::ShortStraight => "short_straight",
            HairPreset::LongWavy => "long_wavy",
            HairPreset::CurlyAfro => "curly_afro",
            HairPreset::Braided => "braided",
        }
    }

    /// Resolves a preset from a host-supplied name.
    ///
    /// Unknown names fall back to [`HairPreset::ShortStraight`] —
    /// hair creation never fails on a bad style name.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "short_straight" => HairPreset::ShortStraight,
            "long_wavy" => HairPreset::LongWavy,
            "curly_afro" => HairPreset::CurlyAfro,
            "braided" => HairPreset::Braided,
            _ => HairPreset::ShortStraight,
        }
    }

    /// Returns the property table entry for this preset.
    pub fn properties(self) -> HairProperties {
        match self {
            HairPreset::ShortStraight => short_straight(),
            HairPreset::LongWavy => long_wavy(),
            HairPreset::CurlyAfro => curly_afro(),
            HairPreset::Braided => braided(),
        }
    }
}

/// Physical parameters of a hair bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HairProperties {
    /// Number of simulated strands in the bundle.
    pub strand_count: usize,

    /// Rest length of each strand in meters.
    pub strand_length: Scalar,

    /// Curl amplitude factor (0 = straight, 1 = tight curls).
    pub curliness: Scalar,

    /// Chain constraint stiffness. Range: 0.0–1.0.
    pub stiffness: Scalar,

    /// Velocity damping coefficient (0.0–1.0).
    pub damping: Scalar,

    /// Surface friction coefficient (0.0–1.0).
    pub friction: Scalar,

    /// Mass of a single strand segment (kg).
    pub segment_mass: Scalar,

    /// How strongly wind couples to the strands (0 = immune, 1 = full).
    pub wind_response: Scalar,
}

// ─── Built-in Hair Presets ────────────────────────────────────────────

/// Short straight cut — stiff, short strands that barely swing.
fn short_straight() -> HairProperties {
    HairProperties {
        strand_count: 60,
        strand_length: 0.12,
        curliness: 0.0,
        stiffness: 0.90,
        damping: 0.08,
        friction: 0.25,
        segment_mass: 0.002,
        wind_response: 0.40,
    }
}

/// Long wavy hair — loose waves with plenty of swing.
fn long_wavy() -> HairProperties {
    HairProperties {
        strand_count: 80,
        strand_length: 0.45,
        curliness: 0.35,
        stiffness: 0.70,
        damping: 0.04,
        friction: 0.15,
        segment_mass: 0.003,
        wind_response: 0.85,
    }
}

/// Curly afro — tight curls, high volume, springy response.
fn curly_afro() -> HairProperties {
    HairProperties {
        strand_count: 100,
        strand_length: 0.20,
        curliness: 0.95,
        stiffness: 0.80,
        damping: 0.06,
        friction: 0.35,
        segment_mass: 0.002,
        wind_response: 0.55,
    }
}

/// Braided — few heavy plaits, stiff chains with strong damping.
fn braided() -> HairProperties {
    HairProperties {
        strand_count: 24,
        strand_length: 0.50,
        curliness: 0.15,
        stiffness: 0.95,
        damping: 0.10,
        friction: 0.30,
        segment_mass: 0.008,
        wind_response: 0.30,
    }
}
