//! Integration tests for velour-forces.

use velour_body::Particle;
use velour_forces::{wind_force, ForceRegistry, WindField};
use velour_math::Vec3;

// ─── Wind Determinism ─────────────────────────────────────────

#[test]
fn two_particles_same_position_same_force() {
    let wind = WindField::new(Vec3::new(1.0, 0.0, 0.5), 3.0, 1.2, 2.0);
    let position = Vec3::new(0.2, 1.6, -0.1);
    let time = 4.75;

    let a = wind_force(position, time, &wind);
    let b = wind_force(position, time, &wind);
    assert_eq!(a, b);
}

#[test]
fn multiple_winds_sum_linearly() {
    let mut registry = ForceRegistry::new();
    registry.gravity = Vec3::ZERO;
    registry.add_wind(WindField::new(Vec3::X, 2.0, 0.0, 1.0));
    registry.add_wind(WindField::new(Vec3::X, 3.0, 0.0, 1.0));

    let mut particles = vec![Particle::new(Vec3::ZERO, 1.0)];
    registry.accumulate(&mut particles, 1.0, 0.0, 0.0);

    // Two steady winds along +X with strengths 2 and 3, unit mass.
    assert!((particles[0].acceleration - Vec3::X * 5.0).length() < 1e-5);
}

// ─── Registry Accumulation ────────────────────────────────────

#[test]
fn gravity_applies_to_free_particles() {
    let registry = ForceRegistry::new();
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.5)];
    registry.accumulate(&mut particles, 0.0, 0.0, 0.0);
    assert!((particles[0].acceleration.y + 9.81).abs() < 1e-4);
}

#[test]
fn fixed_particles_accumulate_nothing() {
    let mut registry = ForceRegistry::new();
    registry.add_wind(WindField::breeze(Vec3::X, 5.0));
    let mut particles = vec![Particle::fixed_at(Vec3::ZERO, 1.0)];
    registry.accumulate(&mut particles, 1.0, 0.5, 1.0);
    assert_eq!(particles[0].acceleration, Vec3::ZERO);
}

#[test]
fn drag_opposes_velocity() {
    let mut registry = ForceRegistry::new();
    registry.gravity = Vec3::ZERO;
    let mut particles = vec![Particle::new(Vec3::ZERO, 1.0)];
    particles[0].velocity = Vec3::new(2.0, 0.0, 0.0);

    registry.accumulate(&mut particles, 0.0, 0.5, 0.0);
    assert!(particles[0].acceleration.x < 0.0);
    assert_eq!(particles[0].acceleration.y, 0.0);
}

#[test]
fn wind_response_scales_coupling() {
    let mut registry = ForceRegistry::new();
    registry.gravity = Vec3::ZERO;
    registry.add_wind(WindField::new(Vec3::X, 4.0, 0.0, 1.0));

    let mut full = vec![Particle::new(Vec3::ZERO, 1.0)];
    let mut half = vec![Particle::new(Vec3::ZERO, 1.0)];
    registry.accumulate(&mut full, 1.0, 0.0, 0.0);
    registry.accumulate(&mut half, 0.5, 0.0, 0.0);

    assert!((full[0].acceleration.x - 2.0 * half[0].acceleration.x).abs() < 1e-5);
}

// ─── Wind List CRUD ───────────────────────────────────────────

#[test]
fn add_returns_index_and_remove_shifts() {
    let mut registry = ForceRegistry::new();
    let first = registry.add_wind(WindField::breeze(Vec3::X, 1.0));
    let second = registry.add_wind(WindField::breeze(Vec3::Z, 2.0));
    assert_eq!(first, 0);
    assert_eq!(second, 1);

    registry.remove_wind(0);
    assert_eq!(registry.winds().len(), 1);
    assert!((registry.winds()[0].strength - 2.0).abs() < 1e-6);
}

#[test]
fn remove_out_of_range_is_noop() {
    let mut registry = ForceRegistry::new();
    registry.add_wind(WindField::breeze(Vec3::X, 1.0));
    registry.remove_wind(7);
    assert_eq!(registry.winds().len(), 1);
}
