//! Shared system plumbing — state machine, registries, telemetry.
//!
//! Both body classes (cloth, hair) carry the same controls: a
//! Stopped/Running state, a clamped speed multiplier, the force
//! registry, the global collider list, world bounds, and the event
//! bus. `SystemCore` holds that shared half so the two systems only
//! differ in their body type and relaxation schedule.

use velour_body::CollisionProxy;
use velour_contact::WorldBounds;
use velour_forces::{ForceRegistry, WindField};
use velour_solver::{clamp_timestep, SolverConfig};
use velour_telemetry::EventBus;
use velour_types::constants::{MAX_SIMULATION_SPEED, MIN_SIMULATION_SPEED};
use velour_types::{BodyId, Scalar};

pub(crate) struct SystemCore {
    pub config: SolverConfig,
    pub forces: ForceRegistry,
    pub colliders: Vec<CollisionProxy>,
    pub bounds: WorldBounds,
    pub bus: EventBus,
    pub step: u64,
    running: bool,
    simulation_speed: Scalar,
    next_id: u64,
}

impl SystemCore {
    pub fn new(config: SolverConfig) -> Self {
        let bounds = WorldBounds::new(config.world_bounds_extent);
        Self {
            config,
            forces: ForceRegistry::new(),
            colliders: Vec::new(),
            bounds,
            bus: EventBus::new(),
            step: 0,
            running: false,
            simulation_speed: 1.0,
            next_id: 0,
        }
    }

    /// Hands out the next monotonic body id.
    pub fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clamps and stores the speed multiplier.
    pub fn set_simulation_speed(&mut self, multiplier: Scalar) {
        self.simulation_speed = multiplier.clamp(MIN_SIMULATION_SPEED, MAX_SIMULATION_SPEED);
    }

    pub fn simulation_speed(&self) -> Scalar {
        self.simulation_speed
    }

    /// Returns the clamped timestep for this frame, or `None` when the
    /// system is stopped or the frame is degenerate.
    pub fn effective_dt(&self, delta_time: Scalar) -> Option<Scalar> {
        if !self.running {
            return None;
        }
        let dt = clamp_timestep(
            delta_time,
            self.simulation_speed,
            self.config.fixed_time_step,
        );
        (dt > 0.0).then_some(dt)
    }

    pub fn add_wind(&mut self, wind: WindField) -> usize {
        self.forces.add_wind(wind)
    }

    pub fn remove_wind(&mut self, index: usize) {
        self.forces.remove_wind(index);
    }

    pub fn add_collider(&mut self, proxy: CollisionProxy) {
        self.colliders.push(proxy);
    }

    /// Removes a collider by value. Unknown proxies are a no-op.
    pub fn remove_collider(&mut self, proxy: CollisionProxy) {
        self.colliders.retain(|c| *c != proxy);
    }

    /// Clears everything the core owns. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        self.running = false;
        self.colliders.clear();
        self.forces.clear_winds();
        self.bus.flush();
    }
}
