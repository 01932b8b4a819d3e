//! CLI command implementations.

use serde::Deserialize;

use velour_bench::metrics::BenchmarkMetrics;
use velour_bench::runner::BenchmarkRunner;
use velour_bench::scenarios::{Scenario, ScenarioKind};
use velour_material::ClothPreset;

/// TOML-configurable simulation run.
#[derive(Debug, Deserialize)]
struct SimulationConfig {
    /// Scenario name (draped_garment, wind_gust, hair_shake).
    scenario: String,
    /// Number of steps to simulate. Defaults to 3 seconds at 60 fps.
    timesteps: Option<u32>,
    /// Cloth material preset name.
    material: Option<String>,
}

/// Run a simulation from a config file.
pub fn simulate(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Velour Simulation");
    println!("─────────────────");
    println!("Config: {config_path}");
    println!();

    let content = std::fs::read_to_string(config_path)?;
    let config: SimulationConfig = toml::from_str(&content)?;

    let kind = parse_scenario(&config.scenario)?;
    let mut scenario = Scenario::from_kind(kind);
    if let Some(steps) = config.timesteps {
        scenario.timesteps = steps;
    }
    if let Some(name) = &config.material {
        scenario = scenario.with_material(ClothPreset::from_name(name));
    }

    let metrics = BenchmarkRunner::run(&scenario);
    print_metrics(&metrics);
    Ok(())
}

/// Run benchmark suite.
pub fn bench(
    scenario_name: &str,
    material_name: Option<&str>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Velour Benchmark Suite");
    println!("══════════════════════");
    println!();

    let material = material_name.map(ClothPreset::from_name);
    if let Some(name) = material_name {
        println!("Material: {name}");
        println!();
    }

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![parse_scenario(scenario_name)?]
    };

    let mut all_metrics = Vec::new();
    for &kind in &kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(preset) = material {
            scenario = scenario.with_material(preset);
        }

        println!("Running: {} ({} steps)", kind.name(), scenario.timesteps);
        let metrics = BenchmarkRunner::run(&scenario);
        print_metrics(&metrics);
        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a config or body spec file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Velour Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let content = std::fs::read_to_string(path)?;
        let _config: velour_solver::SolverConfig = toml::from_str(&content)?;
        println!("Config is valid.");
    } else if path.ends_with(".json") {
        println!("Validating body spec: {path}");
        let content = std::fs::read_to_string(path)?;
        if let Ok(spec) = serde_json::from_str::<velour_io::GarmentSpec>(&content) {
            velour_io::validate_garment_spec(&spec)?;
            println!(
                "Garment spec is valid ({} attachment points).",
                spec.attachments.len()
            );
        } else {
            let spec: velour_io::HairSpec = serde_json::from_str(&content)?;
            velour_io::validate_hair_spec(&spec)?;
            println!("Hair spec is valid.");
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (body spec).");
    }

    Ok(())
}

fn parse_scenario(name: &str) -> Result<ScenarioKind, String> {
    match name {
        "draped_garment" => Ok(ScenarioKind::DrapedGarment),
        "wind_gust" => Ok(ScenarioKind::WindGust),
        "hair_shake" => Ok(ScenarioKind::HairShake),
        other => Err(format!(
            "Unknown scenario: '{other}'. Available: draped_garment, wind_gust, hair_shake, all"
        )),
    }
}

fn print_metrics(metrics: &BenchmarkMetrics) {
    println!("  Wall time:     {:.3}s", metrics.total_wall_time);
    println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
    println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
    println!("  Max displace:  {:.4}m", metrics.max_displacement);
    println!();
}
