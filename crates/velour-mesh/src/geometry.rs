//! Render geometry buffer with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! which maps directly onto the flat vertex buffers the rendering
//! collaborator re-uploads when the dirty flag is set.

use serde::{Deserialize, Serialize};
use velour_math::Vec3;
use velour_types::{VelourError, VelourResult};

/// Primitive topology of the index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryTopology {
    /// Indices are triples — cloth surfaces.
    Triangles,
    /// Indices are pairs — hair strand polylines.
    Lines,
}

impl GeometryTopology {
    /// Indices per primitive for this topology.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            GeometryTopology::Triangles => 3,
            GeometryTopology::Lines => 2,
        }
    }
}

/// Vertex buffer the renderer consumes, stored in SoA layout.
///
/// Positions are overwritten by the simulation every frame; normals
/// are recomputed on demand for triangle topologies. The `dirty` flag
/// tells the renderer a re-upload is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderGeometry {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    /// Primitive indices, stored flat. Triples for [`GeometryTopology::Triangles`],
    /// pairs for [`GeometryTopology::Lines`].
    pub indices: Vec<u32>,

    /// Primitive topology of `indices`.
    pub topology: GeometryTopology,

    /// Set when positions changed since the renderer last uploaded.
    pub dirty: bool,
}

impl RenderGeometry {
    /// Creates an empty geometry with pre-allocated capacity.
    pub fn with_capacity(
        vertex_capacity: usize,
        primitive_capacity: usize,
        topology: GeometryTopology,
    ) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(primitive_capacity * topology.arity()),
            topology,
            dirty: false,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of primitives (triangles or line segments).
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.arity()
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    ///
    /// Only meaningful for triangle topology.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Appends a vertex with a zero normal, returning its index.
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        let idx = self.pos_x.len() as u32;
        self.pos_x.push(position.x);
        self.pos_y.push(position.y);
        self.pos_z.push(position.z);
        self.normal_x.push(0.0);
        self.normal_y.push(0.0);
        self.normal_z.push(0.0);
        idx
    }

    /// Overwrites the position of vertex `i` without touching the dirty flag.
    #[inline]
    pub fn set_position(&mut self, i: usize, position: Vec3) {
        self.pos_x[i] = position.x;
        self.pos_y[i] = position.y;
        self.pos_z[i] = position.z;
    }

    /// Marks the buffer as needing re-upload.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears and returns the dirty flag — the renderer's handshake.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Validates geometry integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Index count is divisible by the topology arity
    /// - Indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> VelourResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(VelourError::InvalidGeometry(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(VelourError::InvalidGeometry(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        let arity = self.topology.arity();
        if self.indices.len() % arity != 0 {
            return Err(VelourError::InvalidGeometry(format!(
                "Index count {} is not divisible by {}",
                self.indices.len(),
                arity
            )));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(VelourError::InvalidGeometry(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        if self.topology == GeometryTopology::Triangles {
            for t in 0..self.primitive_count() {
                let [a, b, c] = self.triangle(t);
                if a == b || b == c || a == c {
                    return Err(VelourError::InvalidGeometry(format!(
                        "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                        t, a, b, c
                    )));
                }
            }
        }

        Ok(())
    }
}
