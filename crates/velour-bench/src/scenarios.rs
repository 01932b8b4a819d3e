//! Benchmark scenarios — a system, a body, and a step budget.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Draped garment** — a silk dress hanging from two shoulder
//!    pins, settling under gravity
//! 2. **Wind gust** — the same dress in a strong turbulent crosswind
//! 3. **Hair shake** — a long-wavy bundle whose head anchor moves
//!    side to side every frame

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use velour_body::GarmentKind;
use velour_engine::{ClothSystem, HairSystem};
use velour_forces::WindField;
use velour_material::{ClothPreset, HairPreset};
use velour_math::Vec3;
use velour_types::{BodyId, Scalar};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Garment settling under gravity.
    DrapedGarment,
    /// Garment in a strong turbulent crosswind.
    WindGust,
    /// Hair bundle with an oscillating head anchor.
    HairShake,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::DrapedGarment,
            ScenarioKind::WindGust,
            ScenarioKind::HairShake,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::DrapedGarment => "draped_garment",
            ScenarioKind::WindGust => "wind_gust",
            ScenarioKind::HairShake => "hair_shake",
        }
    }
}

/// A running scenario: the system under test plus its single body.
pub enum ScenarioRuntime {
    /// Cloth system with one garment.
    Cloth(ClothSystem, BodyId),
    /// Hair system with one bundle.
    Hair(HairSystem, BodyId),
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Number of steps to simulate.
    pub timesteps: u32,
    /// Timestep size (seconds).
    pub dt: Scalar,
    /// Cloth material (cloth scenarios only).
    pub material: ClothPreset,
}

impl Scenario {
    /// Create a scenario by kind, with 3 seconds of simulation at
    /// 60 fps.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        Self {
            kind,
            timesteps: 180,
            dt: 1.0 / 60.0,
            material: ClothPreset::Silk,
        }
    }

    /// Override the cloth material for material comparison runs.
    pub fn with_material(mut self, material: ClothPreset) -> Self {
        self.material = material;
        self
    }

    /// Builds the system under test, already started.
    pub fn build(&self) -> ScenarioRuntime {
        match self.kind {
            ScenarioKind::DrapedGarment => {
                let (mut system, id) = dressed_cloth(self.material);
                system.start_simulation();
                ScenarioRuntime::Cloth(system, id)
            }
            ScenarioKind::WindGust => {
                let (mut system, id) = dressed_cloth(self.material);
                system.add_wind(WindField::new(Vec3::new(1.0, 0.0, 0.3), 12.0, 4.0, 2.0));
                system.start_simulation();
                ScenarioRuntime::Cloth(system, id)
            }
            ScenarioKind::HairShake => {
                let mut system = HairSystem::new();
                let id = system.create_hair(
                    "bench-avatar",
                    Vec3::new(0.0, 1.6, 0.0),
                    HairPreset::LongWavy,
                );
                system.start_simulation();
                ScenarioRuntime::Hair(system, id)
            }
        }
    }

    /// Per-step scripted motion (the hair shake's oscillating anchor).
    pub fn drive(&self, runtime: &mut ScenarioRuntime, step: u32) {
        if let (ScenarioKind::HairShake, ScenarioRuntime::Hair(system, id)) =
            (self.kind, runtime)
        {
            let t = step as Scalar * self.dt;
            let sway = (t * 4.0).sin() * 0.15;
            system.set_head_position(*id, Vec3::new(sway, 1.6, 0.0));
        }
    }
}

fn dressed_cloth(material: ClothPreset) -> (ClothSystem, BodyId) {
    let mut attachments = HashMap::new();
    attachments.insert("left_shoulder".to_string(), Vec3::new(-0.2, 1.5, 0.0));
    attachments.insert("right_shoulder".to_string(), Vec3::new(0.2, 1.5, 0.0));

    let mut system = ClothSystem::new();
    let id = system.create_garment("bench-avatar", GarmentKind::Dress, material, &attachments);
    (system, id)
}
