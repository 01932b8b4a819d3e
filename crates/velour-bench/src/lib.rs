//! # velour-bench
//!
//! Canonical benchmark scenarios for regression testing the Velour
//! pipeline, a runner that executes them, and CSV metrics output.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
