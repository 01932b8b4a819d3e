//! Integration tests for velour-mesh.

use velour_math::Vec3;
use velour_mesh::normals::compute_vertex_normals;
use velour_mesh::{GeometryTopology, RenderGeometry};

// ─── RenderGeometry Tests ─────────────────────────────────────

fn make_single_triangle() -> RenderGeometry {
    let mut geometry = RenderGeometry::with_capacity(3, 1, GeometryTopology::Triangles);
    geometry.push_vertex(Vec3::new(0.0, 0.0, 0.0));
    geometry.push_vertex(Vec3::new(1.0, 0.0, 0.0));
    geometry.push_vertex(Vec3::new(0.0, 1.0, 0.0));
    geometry.indices = vec![0, 1, 2];
    geometry
}

#[test]
fn basic_counts() {
    let geometry = make_single_triangle();
    assert_eq!(geometry.vertex_count(), 3);
    assert_eq!(geometry.primitive_count(), 1);
}

#[test]
fn position_access() {
    let geometry = make_single_triangle();
    assert_eq!(geometry.position(1), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn set_position_overwrites() {
    let mut geometry = make_single_triangle();
    geometry.set_position(2, Vec3::new(5.0, 6.0, 7.0));
    assert_eq!(geometry.position(2), Vec3::new(5.0, 6.0, 7.0));
}

#[test]
fn dirty_handshake() {
    let mut geometry = make_single_triangle();
    assert!(!geometry.dirty);
    geometry.mark_dirty();
    assert!(geometry.take_dirty());
    assert!(!geometry.dirty);
    assert!(!geometry.take_dirty());
}

#[test]
fn validate_ok() {
    let geometry = make_single_triangle();
    assert!(geometry.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut geometry = make_single_triangle();
    geometry.pos_y.push(99.0);
    assert!(geometry.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut geometry = make_single_triangle();
    geometry.indices[2] = 99;
    assert!(geometry.validate().is_err());
}

#[test]
fn validate_catches_degenerate_triangle() {
    let mut geometry = make_single_triangle();
    geometry.indices = vec![0, 0, 1];
    assert!(geometry.validate().is_err());
}

#[test]
fn validate_catches_ragged_index_count() {
    let mut geometry = make_single_triangle();
    geometry.indices.push(1);
    assert!(geometry.validate().is_err());
}

// ─── Line Topology Tests ──────────────────────────────────────

#[test]
fn line_topology_counts_segments() {
    let mut geometry = RenderGeometry::with_capacity(3, 2, GeometryTopology::Lines);
    geometry.push_vertex(Vec3::ZERO);
    geometry.push_vertex(Vec3::new(0.0, -0.1, 0.0));
    geometry.push_vertex(Vec3::new(0.0, -0.2, 0.0));
    geometry.indices = vec![0, 1, 1, 2];
    assert_eq!(geometry.primitive_count(), 2);
    assert!(geometry.validate().is_ok());
}

#[test]
fn line_topology_allows_repeated_indices() {
    // A degenerate (zero-length) segment is legal for lines.
    let mut geometry = RenderGeometry::with_capacity(2, 1, GeometryTopology::Lines);
    geometry.push_vertex(Vec3::ZERO);
    geometry.push_vertex(Vec3::ONE);
    geometry.indices = vec![0, 0];
    assert!(geometry.validate().is_ok());
}

// ─── Normal Computation Tests ─────────────────────────────────

#[test]
fn flat_triangle_normal_faces_z() {
    let mut geometry = make_single_triangle();
    compute_vertex_normals(&mut geometry);
    for i in 0..3 {
        let n = geometry.normal(i);
        assert!((n - Vec3::Z).length() < 1e-6, "vertex {i}: {n:?}");
    }
}

#[test]
fn normals_are_unit_length() {
    let mut geometry = RenderGeometry::with_capacity(4, 2, GeometryTopology::Triangles);
    geometry.push_vertex(Vec3::new(0.0, 0.0, 0.0));
    geometry.push_vertex(Vec3::new(1.0, 0.0, 0.0));
    geometry.push_vertex(Vec3::new(1.0, 1.0, 0.5));
    geometry.push_vertex(Vec3::new(0.0, 1.0, 0.0));
    geometry.indices = vec![0, 1, 2, 0, 2, 3];
    compute_vertex_normals(&mut geometry);
    for i in 0..4 {
        assert!((geometry.normal(i).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn line_geometry_normals_untouched() {
    let mut geometry = RenderGeometry::with_capacity(2, 1, GeometryTopology::Lines);
    geometry.push_vertex(Vec3::ZERO);
    geometry.push_vertex(Vec3::ONE);
    geometry.indices = vec![0, 1];
    compute_vertex_normals(&mut geometry);
    assert_eq!(geometry.normal(0), Vec3::ZERO);
}
