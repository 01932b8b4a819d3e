//! The cloth simulation system.

use std::collections::HashMap;
use std::time::Instant;

use velour_body::{CollisionProxy, Garment, GarmentKind};
use velour_contact::{resolve_proxies, ContactReport};
use velour_forces::WindField;
use velour_io::{AttachmentFrame, SimulationStats};
use velour_material::ClothPreset;
use velour_math::Vec3;
use velour_solver::{integrate, relax_constraints, SolverConfig};
use velour_telemetry::{EventBus, EventKind, SimulationEvent};
use velour_types::{BodyId, Scalar};

use crate::core::SystemCore;

/// Owns every cloth garment of the scene and drives its per-frame
/// pipeline.
///
/// Construct one per host application (or per test) and hand it to
/// collaborators by reference — no global instance exists.
pub struct ClothSystem {
    core: SystemCore,
    garments: Vec<(BodyId, Garment)>,
}

impl ClothSystem {
    /// Creates a stopped system with default solver configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Creates a stopped system with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            core: SystemCore::new(config),
            garments: Vec::new(),
        }
    }

    // ─── Lifecycle ────────────────────────────────────────────────

    /// Builds a garment and registers it, returning its id.
    ///
    /// Never mutates other bodies. Unknown kind/material names were
    /// already resolved by the preset enums before this call.
    pub fn create_garment(
        &mut self,
        avatar_id: &str,
        kind: GarmentKind,
        material: ClothPreset,
        attachments: &HashMap<String, Vec3>,
    ) -> BodyId {
        let id = self.core.allocate_id();
        let garment = Garment::build(avatar_id, kind, material, attachments);

        tracing::debug!(
            body_id = id.0,
            kind = kind.name(),
            material = material.name(),
            particles = garment.particles.len(),
            "garment created"
        );
        self.core.bus.emit(SimulationEvent::new(
            self.core.step,
            EventKind::BodyCreated {
                body_id: id.0,
                particle_count: garment.particles.len(),
            },
        ));

        self.garments.push((id, garment));
        id
    }

    /// Removes a garment, releasing its resources. Double removal is a
    /// no-op, not an error.
    pub fn remove_garment(&mut self, id: BodyId) {
        let before = self.garments.len();
        self.garments.retain(|(gid, _)| *gid != id);
        if self.garments.len() != before {
            tracing::debug!(body_id = id.0, "garment removed");
            self.core.bus.emit(SimulationEvent::new(
                self.core.step,
                EventKind::BodyRemoved { body_id: id.0 },
            ));
        }
    }

    /// Read-only access to a garment. Missing ids return `None`.
    pub fn get_garment(&self, id: BodyId) -> Option<&Garment> {
        self.garments
            .iter()
            .find(|(gid, _)| *gid == id)
            .map(|(_, g)| g)
    }

    /// Stops the simulation and releases every body and registry.
    /// Idempotent — safe to call multiple times.
    pub fn dispose(&mut self) {
        self.core.dispose();
        self.garments.clear();
    }

    // ─── Controls ─────────────────────────────────────────────────

    /// Enters the Running state.
    pub fn start_simulation(&mut self) {
        self.core.start();
    }

    /// Enters the Stopped state. Body/wind/collider CRUD stays valid.
    pub fn stop_simulation(&mut self) {
        self.core.stop();
    }

    /// Returns true while Running.
    pub fn is_simulating(&self) -> bool {
        self.core.is_running()
    }

    /// Adds a wind source, returning its index.
    pub fn add_wind(&mut self, wind: WindField) -> usize {
        self.core.add_wind(wind)
    }

    /// Removes a wind source by index. Out-of-range is a no-op.
    pub fn remove_wind(&mut self, index: usize) {
        self.core.remove_wind(index);
    }

    /// Registers a global collision proxy.
    pub fn add_collider(&mut self, proxy: CollisionProxy) {
        self.core.add_collider(proxy);
    }

    /// Unregisters a collision proxy by value. Unknown is a no-op.
    pub fn remove_collider(&mut self, proxy: CollisionProxy) {
        self.core.remove_collider(proxy);
    }

    /// Sets the speed multiplier, clamped to `[0.1, 5.0]`.
    pub fn set_simulation_speed(&mut self, multiplier: Scalar) {
        self.core.set_simulation_speed(multiplier);
    }

    /// Replaces the global gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.core.forces.gravity = gravity;
    }

    /// Moves a garment's pinned particles to this frame's
    /// authoritative attachment positions. Missing ids and unknown
    /// names are no-ops.
    pub fn apply_attachments(&mut self, id: BodyId, frame: &AttachmentFrame) {
        if let Some((_, garment)) = self.garments.iter_mut().find(|(gid, _)| *gid == id) {
            for (name, &[x, y, z]) in &frame.positions {
                garment.set_attachment_position(name, Vec3::new(x, y, z));
            }
        }
    }

    /// Aggregate counters for monitoring.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            body_count: self.garments.len(),
            particle_count: self.garments.iter().map(|(_, g)| g.particles.len()).sum(),
            constraint_count: self
                .garments
                .iter()
                .map(|(_, g)| g.constraints.len())
                .sum(),
            is_simulating: self.core.is_running(),
            simulation_speed: self.core.simulation_speed(),
        }
    }

    /// The telemetry bus, for registering sinks.
    pub fn event_bus_mut(&mut self) -> &mut EventBus {
        &mut self.core.bus
    }

    // ─── Per-frame pipeline ───────────────────────────────────────

    /// Advances every garment by one frame.
    ///
    /// `sim_time` is the explicit simulation clock used for wind
    /// sampling — the engine never reads wall-clock time, so identical
    /// `(delta_time, sim_time)` sequences replay identically. No-op
    /// while Stopped.
    pub fn update(&mut self, delta_time: Scalar, sim_time: Scalar) {
        let Some(dt) = self.core.effective_dt(delta_time) else {
            return;
        };

        let wall_start = Instant::now();
        self.core.bus.emit(SimulationEvent::new(
            self.core.step,
            EventKind::StepBegin {
                sim_time: sim_time as f64,
                body_count: self.garments.len(),
            },
        ));

        for (id, garment) in &mut self.garments {
            self.core.forces.accumulate(
                &mut garment.particles,
                garment.material.wind_response,
                garment.material.damping,
                sim_time,
            );

            relax_constraints(
                &mut garment.particles,
                &garment.constraints,
                self.core.config.cloth_iterations,
            );

            integrate(&mut garment.particles, dt);

            let mut report = ContactReport::default();
            if !self.core.colliders.is_empty() || !garment.local_colliders.is_empty() {
                let proxies: Vec<CollisionProxy> = self
                    .core
                    .colliders
                    .iter()
                    .chain(garment.local_colliders.iter())
                    .copied()
                    .collect();
                report.merge(resolve_proxies(
                    &mut garment.particles,
                    &proxies,
                    self.core.config.object_restitution,
                    garment.material.friction,
                    dt,
                ));
            }
            report.merge(self.core.bounds.resolve(
                &mut garment.particles,
                self.core.config.ground_restitution,
                dt,
            ));

            garment.write_back_geometry();

            if report.resolved_count > 0 {
                self.core.bus.emit(SimulationEvent::new(
                    self.core.step,
                    EventKind::Contacts {
                        body_id: id.0,
                        resolved_count: report.resolved_count,
                        max_penetration: report.max_penetration,
                    },
                ));
            }
            self.core.bus.emit(SimulationEvent::new(
                self.core.step,
                EventKind::Energy {
                    body_id: id.0,
                    kinetic: garment.kinetic_energy() as f64,
                },
            ));
        }

        self.core.bus.emit(SimulationEvent::new(
            self.core.step,
            EventKind::StepEnd {
                wall_time: wall_start.elapsed().as_secs_f64(),
            },
        ));
        self.core.bus.flush();
        self.core.step += 1;
    }
}

impl Default for ClothSystem {
    fn default() -> Self {
        Self::new()
    }
}
