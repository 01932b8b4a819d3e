//! Benchmark runner — executes scenarios and collects metrics.

use std::time::Instant;

use velour_math::Vec3;
use velour_types::Scalar;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioRuntime};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario to completion.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> BenchmarkMetrics {
        let mut runtime = scenario.build();

        let initial = positions(&runtime);
        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let total_start = Instant::now();
        let mut sim_time: Scalar = 0.0;

        for step in 0..scenario.timesteps {
            scenario.drive(&mut runtime, step);

            let step_start = Instant::now();
            match &mut runtime {
                ScenarioRuntime::Cloth(system, _) => system.update(scenario.dt, sim_time),
                ScenarioRuntime::Hair(system, _) => system.update(scenario.dt, sim_time),
            }
            step_times.push(step_start.elapsed().as_secs_f64());
            sim_time += scenario.dt;
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let final_positions = positions(&runtime);
        let max_displacement = initial
            .iter()
            .zip(&final_positions)
            .map(|(a, b)| a.distance(*b))
            .fold(0.0_f32, f32::max);

        let final_kinetic_energy = match &runtime {
            ScenarioRuntime::Cloth(system, id) => system
                .get_garment(*id)
                .map(|g| g.kinetic_energy() as f64)
                .unwrap_or(0.0),
            ScenarioRuntime::Hair(system, id) => system
                .get_strands(*id)
                .map(|b| b.kinetic_energy() as f64)
                .unwrap_or(0.0),
        };

        let stats = match &runtime {
            ScenarioRuntime::Cloth(system, _) => system.stats(),
            ScenarioRuntime::Hair(system, _) => system.stats(),
        };

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            timesteps: scenario.timesteps,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            final_kinetic_energy,
            max_displacement,
            particle_count: stats.particle_count,
            constraint_count: stats.constraint_count,
        }
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> Vec<BenchmarkMetrics> {
        use crate::scenarios::ScenarioKind;
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}

fn positions(runtime: &ScenarioRuntime) -> Vec<Vec3> {
    match runtime {
        ScenarioRuntime::Cloth(system, id) => system
            .get_garment(*id)
            .map(|g| g.particles.iter().map(|p| p.position).collect())
            .unwrap_or_default(),
        ScenarioRuntime::Hair(system, id) => system
            .get_strands(*id)
            .map(|b| b.particles.iter().map(|p| p.position).collect())
            .unwrap_or_default(),
    }
}
