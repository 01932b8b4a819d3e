//! Vertex normal computation from triangle geometry.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use crate::geometry::{GeometryTopology, RenderGeometry};

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex, then normalized. Line topologies are left untouched —
/// strand shading does not use vertex normals.
///
/// This modifies the geometry's `normal_x`, `normal_y`, `normal_z`
/// arrays in place.
pub fn compute_vertex_normals(geometry: &mut RenderGeometry) {
    if geometry.topology != GeometryTopology::Triangles {
        return;
    }

    let n = geometry.vertex_count();

    for i in 0..n {
        geometry.normal_x[i] = 0.0;
        geometry.normal_y[i] = 0.0;
        geometry.normal_z[i] = 0.0;
    }

    // Accumulate area-weighted face normals
    let tri_count = geometry.primitive_count();
    for t in 0..tri_count {
        let [ia, ib, ic] = geometry.triangle(t);
        let a = ia as usize;
        let b = ib as usize;
        let c = ic as usize;

        // Edge vectors
        let e1x = geometry.pos_x[b] - geometry.pos_x[a];
        let e1y = geometry.pos_y[b] - geometry.pos_y[a];
        let e1z = geometry.pos_z[b] - geometry.pos_z[a];

        let e2x = geometry.pos_x[c] - geometry.pos_x[a];
        let e2y = geometry.pos_y[c] - geometry.pos_y[a];
        let e2z = geometry.pos_z[c] - geometry.pos_z[a];

        // Cross product (magnitude = 2 × triangle area)
        let nx = e1y * e2z - e1z * e2y;
        let ny = e1z * e2x - e1x * e2z;
        let nz = e1x * e2y - e1y * e2x;

        geometry.normal_x[a] += nx;
        geometry.normal_y[a] += ny;
        geometry.normal_z[a] += nz;

        geometry.normal_x[b] += nx;
        geometry.normal_y[b] += ny;
        geometry.normal_z[b] += nz;

        geometry.normal_x[c] += nx;
        geometry.normal_y[c] += ny;
        geometry.normal_z[c] += nz;
    }

    // Normalize
    for i in 0..n {
        let x = geometry.normal_x[i];
        let y = geometry.normal_y[i];
        let z = geometry.normal_z[i];
        let len = (x * x + y * y + z * z).sqrt();
        if len > 1e-10 {
            let inv = 1.0 / len;
            geometry.normal_x[i] = x * inv;
            geometry.normal_y[i] = y * inv;
            geometry.normal_z[i] = z * inv;
        }
    }
}
