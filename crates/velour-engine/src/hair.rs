//! The hair simulation system.

use std::time::Instant;

use velour_body::{CollisionProxy, StrandBundle};
use velour_contact::{resolve_proxies, ContactReport};
use velour_forces::WindField;
use velour_io::SimulationStats;
use velour_material::HairPreset;
use velour_math::Vec3;
use velour_solver::{integrate, relax_constraints, SolverConfig};
use velour_telemetry::{EventBus, EventKind, SimulationEvent};
use velour_types::{BodyId, Scalar};

use crate::core::SystemCore;

/// Owns every hair strand bundle of the scene and drives its per-frame
/// pipeline.
///
/// Hair uses the same pipeline as cloth with two differences: an
/// explicit chain tension force layered on top of relaxation keeps
/// strands taut, and relaxation runs as several short sub-stepped
/// rounds instead of one long pass.
pub struct HairSystem {
    core: SystemCore,
    bundles: Vec<(BodyId, StrandBundle)>,
}

impl HairSystem {
    /// Creates a stopped system with default solver configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Creates a stopped system with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            core: SystemCore::new(config),
            bundles: Vec::new(),
        }
    }

    // ─── Lifecycle ────────────────────────────────────────────────

    /// Builds a strand bundle around a head position and registers it,
    /// returning its id.
    ///
    /// The bundle's root scatter is seeded from the generated id, so a
    /// given creation order reproduces identical strands.
    pub fn create_hair(
        &mut self,
        avatar_id: &str,
        head_position: Vec3,
        style: HairPreset,
    ) -> BodyId {
        let id = self.core.allocate_id();
        let bundle = StrandBundle::build(avatar_id, head_position, style, id.0);

        tracing::debug!(
            body_id = id.0,
            style = style.name(),
            strands = bundle.strand_count(),
            "hair bundle created"
        );
        self.core.bus.emit(SimulationEvent::new(
            self.core.step,
            EventKind::BodyCreated {
                body_id: id.0,
                particle_count: bundle.particles.len(),
            },
        ));

        self.bundles.push((id, bundle));
        id
    }

    /// Removes a bundle, releasing its resources. Double removal is a
    /// no-op, not an error.
    pub fn remove_hair(&mut self, id: BodyId) {
        let before = self.bundles.len();
        self.bundles.retain(|(bid, _)| *bid != id);
        if self.bundles.len() != before {
            tracing::debug!(body_id = id.0, "hair bundle removed");
            self.core.bus.emit(SimulationEvent::new(
                self.core.step,
                EventKind::BodyRemoved { body_id: id.0 },
            ));
        }
    }

    /// Read-only access to a bundle. Missing ids return `None`.
    pub fn get_strands(&self, id: BodyId) -> Option<&StrandBundle> {
        self.bundles
            .iter()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b)
    }

    /// Stops the simulation and releases every body and registry.
    /// Idempotent — safe to call multiple times.
    pub fn dispose(&mut self) {
        self.core.dispose();
        self.bundles.clear();
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

    /// Follows a head move: the bundle's fixed roots translate
    /// rigidly. Missing ids are a no-op.
    pub fn set_head_position(&mut self, id: BodyId, position: Vec3) {
        if let Some((_, bundle)) = self.bundles.iter_mut().find(|(bid, _)| *bid == id) {
            bundle.set_head_position(position);
        }
    }

    /// Aggregate counters for monitoring.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            body_count: self.bundles.len(),
            particle_count: self.bundles.iter().map(|(_, b)| b.particles.len()).sum(),
            constraint_count: self
                .bundles
                .iter()
                .map(|(_, b)| b.constraints.len())
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

    /// Advances every bundle by one frame.
    ///
    /// `sim_time` is the explicit simulation clock used for wind
    /// sampling. No-op while Stopped.
    pub fn update(&mut self, delta_time: Scalar, sim_time: Scalar) {
        let Some(dt) = self.core.effective_dt(delta_time) else {
            return;
        };

        let wall_start = Instant::now();
        self.core.bus.emit(SimulationEvent::new(
            self.core.step,
            EventKind::StepBegin {
                sim_time: sim_time as f64,
                body_count: self.bundles.len(),
            },
        ));

        for (id, bundle) in &mut self.bundles {
            self.core.forces.accumulate(
                &mut bundle.particles,
                bundle.properties.wind_response,
                bundle.properties.damping,
                sim_time,
            );
            // Explicit chain tension on top of the relaxation passes.
            bundle.accumulate_tension_forces();

            for _ in 0..self.core.config.hair_substeps {
                relax_constraints(
                    &mut bundle.particles,
                    &bundle.constraints,
                    self.core.config.hair_iterations,
                );
            }

            integrate(&mut bundle.particles, dt);

            let mut report = ContactReport::default();
            if !self.core.colliders.is_empty() || !bundle.local_colliders.is_empty() {
                let proxies: Vec<CollisionProxy> = self
                    .core
                    .colliders
                    .iter()
                    .chain(bundle.local_colliders.iter())
                    .copied()
                    .collect();
                report.merge(resolve_proxies(
                    &mut bundle.particles,
                    &proxies,
                    self.core.config.object_restitution,
                    bundle.properties.friction,
                    dt,
                ));
            }
            report.merge(self.core.bounds.resolve(
                &mut bundle.particles,
                self.core.config.ground_restitution,
                dt,
            ));

            bundle.write_back_geometry();

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
                    kinetic: bundle.kinetic_energy() as f64,
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

impl Default for HairSystem {
    fn default() -> Self {
        Self::new()
    }
}
