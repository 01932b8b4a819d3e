//! Cloth material presets.
//!
//! The five presets cover the garment wardrobe the engine ships with.
//! Stiffness and damping are normalized to `[0, 1]` — they feed the
//! position-based solver directly, not a constitutive model.

use serde::{Deserialize, Serialize};
use velour_types::constants::PARTICLE_MASS_SCALE;
use velour_types::Scalar;

/// The closed set of built-in cloth materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClothPreset {
    Cotton,
    Silk,
    Denim,
    Leather,
    Wool,
}

impl ClothPreset {
    /// Returns all presets.
    pub fn all() -> &'static [ClothPreset] {
        &[
            ClothPreset::Cotton,
            ClothPreset::Silk,
            ClothPreset::Denim,
            ClothPreset::Leather,
            ClothPreset::Wool,
        ]
    }

    /// Returns the preset's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            ClothPreset::Cotton => "cotton",
            ClothPreset::Silk => "silk",
            ClothPreset::Denim => "denim",
            ClothPreset::Leather => "leather",
            ClothPreset::Wool => "wool",
        }
    }

    /// Resolves a preset from a host-supplied name.
    ///
    /// Unknown names fall back to [`ClothPreset::Cotton`] — garment
    /// creation never fails on a bad material name.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "cotton" => ClothPreset::Cotton,
            "silk" => ClothPreset::Silk,
            "denim" => ClothPreset::Denim,
            "leather" => ClothPreset::Leather,
            "wool" => ClothPreset::Wool,
            _ => ClothPreset::Cotton,
        }
    }

    /// Returns the property table entry for this preset.
    pub fn properties(self) -> ClothProperties {
        match self {
            ClothPreset::Cotton => cotton(),
            ClothPreset::Silk => silk(),
            ClothPreset::Denim => denim(),
            ClothPreset::Leather => leather(),
            ClothPreset::Wool => wool(),
        }
    }
}

/// Physical properties of a cloth material.
///
/// Copied into each garment at creation — constraints capture the
/// material-derived stiffness at build time, which is why materials
/// are immutable after a body exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothProperties {
    /// Areal density in g/m². Controls particle mass.
    pub density: Scalar,

    /// Structural (distance constraint) stiffness. Range: 0.0–1.0.
    pub stiffness: Scalar,

    /// Velocity damping coefficient (0.0–1.0). Higher = more energy
    /// dissipation.
    pub damping: Scalar,

    /// Surface friction coefficient (0.0–1.0).
    pub friction: Scalar,

    /// How strongly the fabric springs back after deformation.
    pub elasticity: Scalar,

    /// Resistance to over-stretch — high values keep constraints taut
    /// under load.
    pub tear_resistance: Scalar,

    /// How strongly wind couples to the fabric (0 = immune, 1 = full).
    pub wind_response: Scalar,
}

impl ClothProperties {
    /// Mass of a single grid particle for this material.
    pub fn particle_mass(&self) -> Scalar {
        self.density * PARTICLE_MASS_SCALE
    }
}

// ─── Built-in Cloth Presets ───────────────────────────────────────────

/// Cotton — medium-weight woven fabric. Good all-rounder, holds shape
/// with defined folds.
fn cotton() -> ClothProperties {
    ClothProperties {
        density: 200.0,
        stiffness: 0.85,
        damping: 0.02,
        friction: 0.50,
        elasticity: 0.30,
        tear_resistance: 0.70,
        wind_response: 0.60,
    }
}

/// Silk — lightweight, flowing, low structure. Soft drapes with many
/// small folds, very wind-responsive.
fn silk() -> ClothProperties {
    ClothProperties {
        density: 80.0,
        stiffness: 0.65,
        damping: 0.01,
        friction: 0.30,
        elasticity: 0.45,
        tear_resistance: 0.40,
        wind_response: 0.95,
    }
}

/// Denim — heavy, stiff woven fabric. Resists deformation, produces
/// sharp creases, barely moves in wind.
fn denim() -> ClothProperties {
    ClothProperties {
        density: 400.0,
        stiffness: 0.95,
        damping: 0.04,
        friction: 0.60,
        elasticity: 0.15,
        tear_resistance: 0.95,
        wind_response: 0.25,
    }
}

/// Leather — dense and nearly inextensible, with high surface friction.
fn leather() -> ClothProperties {
    ClothProperties {
        density: 500.0,
        stiffness: 0.98,
        damping: 0.05,
        friction: 0.75,
        elasticity: 0.10,
        tear_resistance: 0.99,
        wind_response: 0.10,
    }
}

/// Wool — thick knit. Moderate stiffness with strong damping, drapes
/// in heavy folds.
fn wool() -> ClothProperties {
    ClothProperties {
        density: 300.0,
        stiffness: 0.80,
        damping: 0.06,
        friction: 0.65,
        elasticity: 0.25,
        tear_resistance: 0.80,
        wind_response: 0.40,
    }
}
