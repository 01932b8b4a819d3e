//! Integration tests for velour-body.

use std::collections::HashMap;

use velour_body::{
    Constraint, ConstraintKind, Garment, GarmentDimensions, GarmentKind, Particle, StrandBundle,
};
use velour_material::{ClothPreset, HairPreset};
use velour_math::Vec3;

const SEGMENTS: usize = 10;

fn small_dims() -> GarmentDimensions {
    GarmentDimensions {
        width: 0.3,
        height: 0.3,
        cols: 4,
        rows: 4,
    }
}

fn one_corner() -> HashMap<String, Vec3> {
    let mut attachments = HashMap::new();
    attachments.insert("corner".to_string(), Vec3::new(-0.15, 0.0, 0.0));
    attachments
}

// ─── Particle Tests ───────────────────────────────────────────

#[test]
fn new_particle_starts_at_rest() {
    let p = Particle::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
    assert_eq!(p.position, p.previous_position);
    assert_eq!(p.velocity, Vec3::ZERO);
    assert!(!p.fixed);
}

#[test]
fn fixed_particle_ignores_forces() {
    let mut p = Particle::fixed_at(Vec3::ZERO, 1.0);
    p.apply_force(Vec3::new(100.0, 0.0, 0.0));
    p.apply_acceleration(Vec3::new(0.0, -9.81, 0.0));
    assert_eq!(p.acceleration, Vec3::ZERO);
}

#[test]
fn reposition_only_moves_fixed_particles() {
    let mut free = Particle::new(Vec3::ZERO, 1.0);
    free.reposition(Vec3::ONE);
    assert_eq!(free.position, Vec3::ZERO);

    let mut fixed = Particle::fixed_at(Vec3::ZERO, 1.0);
    fixed.reposition(Vec3::ONE);
    assert_eq!(fixed.position, Vec3::ONE);
}

#[test]
fn force_scales_by_inverse_mass() {
    let mut heavy = Particle::new(Vec3::ZERO, 2.0);
    let mut light = Particle::new(Vec3::ZERO, 0.5);
    heavy.apply_force(Vec3::X);
    light.apply_force(Vec3::X);
    assert!((heavy.acceleration.x - 0.5).abs() < 1e-6);
    assert!((light.acceleration.x - 2.0).abs() < 1e-6);
}

// ─── Constraint Tests ─────────────────────────────────────────

#[test]
fn distance_constraint_captures_rest_length() {
    let particles = vec![
        Particle::new(Vec3::ZERO, 1.0),
        Particle::new(Vec3::new(0.0, 2.0, 0.0), 1.0),
    ];
    let c = Constraint::distance(0, 1, &particles, 0.9, 0.02);
    assert_eq!(c.kind, ConstraintKind::Distance);
    assert!((c.rest_length - 2.0).abs() < 1e-6);
}

#[test]
fn bend_constraint_softens_material_parameters() {
    let particles = vec![
        Particle::new(Vec3::ZERO, 1.0),
        Particle::new(Vec3::X, 1.0),
    ];
    let c = Constraint::bend(0, 1, &particles, 0.8, 0.04);
    assert_eq!(c.kind, ConstraintKind::Bend);
    assert!((c.stiffness - 0.08).abs() < 1e-6); // 10% of structural
    assert!((c.damping - 0.02).abs() < 1e-6); // 50% of material
}

// ─── Garment Construction ─────────────────────────────────────

#[test]
fn garment_particle_count_is_cols_times_rows() {
    let garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        small_dims(),
        ClothPreset::Cotton,
        &one_corner(),
    );
    assert_eq!(garment.particles.len(), 16);
    assert_eq!(garment.geometry.vertex_count(), 16);
    assert_eq!(garment.geometry.primitive_count(), 18); // 3×3 cells × 2
}

#[test]
fn garment_constraint_counts() {
    let dims = small_dims();
    let garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        dims,
        ClothPreset::Cotton,
        &one_corner(),
    );

    let cells = (dims.cols - 1) * (dims.rows - 1);
    // Unique triangulation edges: horizontal + vertical + one diagonal
    // per cell.
    let expected_distance =
        (dims.cols - 1) * dims.rows + dims.cols * (dims.rows - 1) + cells;
    // Two bend diagonals per interior cell pairing.
    let expected_bend = 2 * cells;

    let distance = garment
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Distance)
        .count();
    let bend = garment
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Bend)
        .count();

    assert_eq!(distance, expected_distance);
    assert_eq!(bend, expected_bend);
}

#[test]
fn garment_constraints_reference_valid_particles() {
    let garment = Garment::build(
        "avatar-1",
        GarmentKind::Dress,
        ClothPreset::Silk,
        &one_corner(),
    );
    let n = garment.particles.len();
    for c in &garment.constraints {
        assert_ne!(c.a, c.b);
        assert!(c.a < n && c.b < n);
        assert!(c.rest_length > 0.0);
    }
}

#[test]
fn attachment_pins_nearest_particle() {
    let attachments = one_corner();
    let garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        small_dims(),
        ClothPreset::Cotton,
        &attachments,
    );

    let index = garment.attachments["corner"];
    assert!(garment.particles[index].fixed);
    assert_eq!(garment.particles[index].position, attachments["corner"]);
    // Exactly one attachment, so exactly one fixed particle.
    assert_eq!(garment.particles.iter().filter(|p| p.fixed).count(), 1);
}

#[test]
fn garment_construction_is_deterministic() {
    let a = Garment::build(
        "avatar-1",
        GarmentKind::Jacket,
        ClothPreset::Wool,
        &one_corner(),
    );
    let b = Garment::build(
        "avatar-1",
        GarmentKind::Jacket,
        ClothPreset::Wool,
        &one_corner(),
    );
    assert_eq!(a.particles.len(), b.particles.len());
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
    }
}

#[test]
fn unknown_garment_name_falls_back() {
    assert_eq!(GarmentKind::from_name("tuxedo"), GarmentKind::Shirt);
    assert_eq!(GarmentKind::from_name("DRESS"), GarmentKind::Dress);
}

#[test]
fn every_kind_has_sane_dimensions() {
    for &kind in GarmentKind::all() {
        let dims = kind.dimensions();
        assert!(dims.width > 0.0 && dims.height > 0.0, "{}", kind.name());
        assert!(dims.cols >= 2 && dims.rows >= 2);
        assert_eq!(GarmentKind::from_name(kind.name()), kind);
    }
}

#[test]
fn garment_records_grid_shape() {
    let garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        small_dims(),
        ClothPreset::Cotton,
        &one_corner(),
    );
    assert_eq!(garment.cols(), 4);
    assert_eq!(garment.rows(), 4);
    assert_eq!(garment.particles.len(), garment.cols() * garment.rows());
}

#[test]
fn set_attachment_position_moves_pinned_particle() {
    let mut garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        small_dims(),
        ClothPreset::Cotton,
        &one_corner(),
    );
    let target = Vec3::new(0.5, 1.0, 0.2);
    garment.set_attachment_position("corner", target);
    let index = garment.attachments["corner"];
    assert_eq!(garment.particles[index].position, target);

    // Unknown names are a no-op.
    garment.set_attachment_position("elbow", Vec3::ZERO);
}

#[test]
fn write_back_copies_positions_and_marks_dirty() {
    let mut garment = Garment::build_with_dimensions(
        "avatar-1",
        GarmentKind::Shirt,
        small_dims(),
        ClothPreset::Cotton,
        &one_corner(),
    );
    garment.particles[5].position = Vec3::new(9.0, 9.0, 9.0);
    garment.write_back_geometry();

    assert_eq!(garment.geometry.position(5), Vec3::new(9.0, 9.0, 9.0));
    assert!(garment.geometry.dirty);
    assert!(garment.geometry.validate().is_ok());
}

// ─── Strand Bundle Construction ───────────────────────────────

#[test]
fn bundle_counts_match_preset() {
    let head = Vec3::new(0.0, 1.6, 0.0);
    let bundle = StrandBundle::build("avatar-1", head, HairPreset::LongWavy, 7);
    let strands = HairPreset::LongWavy.properties().strand_count;

    assert_eq!(bundle.strand_count(), strands);
    assert_eq!(bundle.particles.len(), strands * SEGMENTS);
    assert_eq!(bundle.constraints.len(), strands * (SEGMENTS - 1));
}

#[test]
fn every_root_is_fixed_and_only_roots() {
    let bundle = StrandBundle::build(
        "avatar-1",
        Vec3::new(0.0, 1.6, 0.0),
        HairPreset::CurlyAfro,
        1,
    );
    for strand in 0..bundle.strand_count() {
        let root = bundle.root_index(strand);
        assert!(bundle.particles[root].fixed, "strand {strand} root free");
        for segment in 1..SEGMENTS {
            assert!(!bundle.particles[root + segment].fixed);
        }
    }
}

#[test]
fn roots_scatter_on_the_scalp_sphere() {
    let head = Vec3::new(0.0, 1.6, 0.0);
    let bundle = StrandBundle::build("avatar-1", head, HairPreset::ShortStraight, 3);
    for strand in 0..bundle.strand_count() {
        let root = bundle.particles[bundle.root_index(strand)].position;
        let dist = root.distance(head);
        assert!((0.09..=0.12).contains(&dist), "root at distance {dist}");
    }
}

#[test]
fn bundle_construction_is_seed_deterministic() {
    let head = Vec3::new(0.0, 1.6, 0.0);
    let a = StrandBundle::build("avatar-1", head, HairPreset::Braided, 42);
    let b = StrandBundle::build("avatar-1", head, HairPreset::Braided, 42);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
    }

    let c = StrandBundle::build("avatar-1", head, HairPreset::Braided, 43);
    let differs = a
        .particles
        .iter()
        .zip(&c.particles)
        .any(|(pa, pc)| pa.position != pc.position);
    assert!(differs, "different seeds should scatter differently");
}

#[test]
fn curly_strands_deviate_laterally() {
    let head = Vec3::new(0.0, 1.6, 0.0);
    let straight = StrandBundle::build("avatar-1", head, HairPreset::ShortStraight, 5);
    // Straight preset has zero curliness: every segment lies on the
    // root-direction line, so the tip-to-root vector has no curl
    // wobble. Curly hair must not be collinear.
    let curly = StrandBundle::build("avatar-1", head, HairPreset::CurlyAfro, 5);
    assert!(curly.properties.curliness > straight.properties.curliness);

    let root = curly.root_index(0);
    let p0 = curly.particles[root].position;
    let p1 = curly.particles[root + SEGMENTS / 2].position;
    let p2 = curly.particles[root + SEGMENTS - 1].position;
    let cross = (p1 - p0).cross(p2 - p0).length();
    assert!(cross > 1e-6, "curly strand is collinear");
}

#[test]
fn head_move_translates_roots_rigidly() {
    let head = Vec3::new(0.0, 1.6, 0.0);
    let mut bundle = StrandBundle::build("avatar-1", head, HairPreset::LongWavy, 11);
    let before: Vec<Vec3> = (0..bundle.strand_count())
        .map(|s| bundle.particles[bundle.root_index(s)].position)
        .collect();

    let delta = Vec3::new(0.3, 0.1, -0.2);
    bundle.set_head_position(head + delta);

    for (strand, &old) in before.iter().enumerate() {
        let now = bundle.particles[bundle.root_index(strand)].position;
        assert!((now - (old + delta)).length() < 1e-5);
    }
    // Free segments did not teleport.
    assert!(!bundle.particles[1].fixed);
}

#[test]
fn tension_pulls_stretched_segments_back() {
    let mut bundle = StrandBundle::build(
        "avatar-1",
        Vec3::new(0.0, 1.6, 0.0),
        HairPreset::ShortStraight,
        2,
    );
    // Stretch segment 1 of strand 0 away from its root.
    let root = bundle.particles[0].position;
    bundle.particles[1].position = root + Vec3::new(0.0, -1.0, 0.0);

    bundle.accumulate_tension_forces();

    // The accumulated force points back toward the root (upward).
    assert!(bundle.particles[1].acceleration.y > 0.0);
}

#[test]
fn bundle_geometry_is_line_segments() {
    let bundle = StrandBundle::build(
        "avatar-1",
        Vec3::new(0.0, 1.6, 0.0),
        HairPreset::Braided,
        9,
    );
    assert_eq!(
        bundle.geometry.primitive_count(),
        bundle.constraints.len()
    );
    assert!(bundle.geometry.validate().is_ok());
}
