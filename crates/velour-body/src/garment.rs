//! Cloth garment construction — geometry → particles → constraints.
//!
//! A garment is a rectangular particle grid. Structural constraints
//! come from the edges of the grid's triangulation (deduplicated with
//! canonical edge keys); bend constraints run along both diagonals of
//! interior cells; named attachment points pin the nearest particle.

use std::collections::{HashMap, HashSet};

use velour_material::{ClothPreset, ClothProperties};
use velour_math::Vec3;
use velour_mesh::{compute_vertex_normals, GeometryTopology, RenderGeometry};
use velour_types::Scalar;

use crate::constraint::Constraint;
use crate::particle::Particle;
use crate::proxy::CollisionProxy;

/// The garment wardrobe. Each kind maps to a fixed dimension table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentKind {
    Shirt,
    Pants,
    Skirt,
    Dress,
    Jacket,
}

/// Physical size and grid resolution of a garment panel.
///
/// `cols`/`rows` count grid **vertices**; particle count is
/// `cols × rows`.
#[derive(Debug, Clone, Copy)]
pub struct GarmentDimensions {
    /// Panel width in meters.
    pub width: Scalar,
    /// Panel height in meters.
    pub height: Scalar,
    /// Vertex columns.
    pub cols: usize,
    /// Vertex rows.
    pub rows: usize,
}

impl GarmentKind {
    /// Returns all garment kinds.
    pub fn all() -> &'static [GarmentKind] {
        &[
            GarmentKind::Shirt,
            GarmentKind::Pants,
            GarmentKind::Skirt,
            GarmentKind::Dress,
            GarmentKind::Jacket,
        ]
    }

    /// Returns the kind's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            GarmentKind::Shirt => "shirt",
            GarmentKind::Pants => "pants",
            GarmentKind::Skirt => "skirt",
            GarmentKind::Dress => "dress",
            GarmentKind::Jacket => "jacket",
        }
    }

    /// Resolves a kind from a host-supplied name.
    ///
    /// Unknown names fall back to [`GarmentKind::Shirt`], whose
    /// dimension table is the engine default — garment creation never
    /// fails on a bad type name.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "shirt" => GarmentKind::Shirt,
            "pants" => GarmentKind::Pants,
            "skirt" => GarmentKind::Skirt,
            "dress" => GarmentKind::Dress,
            "jacket" => GarmentKind::Jacket,
            _ => GarmentKind::Shirt,
        }
    }

    /// Returns the dimension table entry for this kind.
    pub fn dimensions(self) -> GarmentDimensions {
        match self {
            GarmentKind::Shirt => GarmentDimensions {
                width: 0.55,
                height: 0.70,
                cols: 12,
                rows: 14,
            },
            GarmentKind::Pants => GarmentDimensions {
                width: 0.45,
                height: 1.00,
                cols: 10,
                rows: 20,
            },
            GarmentKind::Skirt => GarmentDimensions {
                width: 0.60,
                height: 0.55,
                cols: 14,
                rows: 12,
            },
            GarmentKind::Dress => GarmentDimensions {
                width: 0.60,
                height: 1.20,
                cols: 14,
                rows: 24,
            },
            GarmentKind::Jacket => GarmentDimensions {
                width: 0.60,
                height: 0.75,
                cols: 12,
                rows: 15,
            },
        }
    }
}

/// A simulated cloth garment.
///
/// Owns its particle arena, constraint list, a copy of the material,
/// the attachment map, body-local collision proxies, and the render
/// geometry it writes back into each frame.
#[derive(Debug)]
pub struct Garment {
    /// The avatar this garment is dressed on.
    pub avatar_id: String,
    /// Wardrobe kind this garment was built from.
    pub kind: GarmentKind,
    /// Material copy. Immutable after creation — constraints captured
    /// material-derived stiffness at build time.
    pub material: ClothProperties,
    /// Particle arena; indices are stable for the body's lifetime.
    pub particles: Vec<Particle>,
    /// Constraints, relaxed in insertion order.
    pub constraints: Vec<Constraint>,
    /// Named attachment point → particle index.
    pub attachments: HashMap<String, usize>,
    /// Colliders that travel with this body (e.g. the torso proxy).
    pub local_colliders: Vec<CollisionProxy>,
    /// Render buffer the geometry write-back targets.
    pub geometry: RenderGeometry,

    cols: usize,
    rows: usize,
}

impl Garment {
    /// Builds a garment for an avatar using the kind's dimension
    /// table.
    pub fn build(
        avatar_id: &str,
        kind: GarmentKind,
        material: ClothPreset,
        attachments: &HashMap<String, Vec3>,
    ) -> Self {
        Self::build_with_dimensions(avatar_id, kind, kind.dimensions(), material, attachments)
    }

    /// Builds a garment with explicit dimensions.
    ///
    /// Deterministic given identical inputs: the grid is laid out in a
    /// vertical plane centered on the attachment points' centroid,
    /// triangulated, constrained, and pinned. Unknown garment or
    /// material names were already resolved by the preset enums.
    pub fn build_with_dimensions(
        avatar_id: &str,
        kind: GarmentKind,
        dims: GarmentDimensions,
        material: ClothPreset,
        attachments: &HashMap<String, Vec3>,
    ) -> Self {
        let properties = material.properties();
        let mass = properties.particle_mass();

        let origin = attachment_centroid(attachments);

        // Particle grid, top row first, left to right.
        let mut particles = Vec::with_capacity(dims.cols * dims.rows);
        let half_w = dims.width / 2.0;
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let u = col as Scalar / (dims.cols - 1) as Scalar;
                let v = row as Scalar / (dims.rows - 1) as Scalar;
                let position = origin
                    + Vec3::new(-half_w + u * dims.width, -v * dims.height, 0.0);
                particles.push(Particle::new(position, mass));
            }
        }

        // Triangulated grid geometry, two triangles per cell.
        let cell_cols = dims.cols - 1;
        let cell_rows = dims.rows - 1;
        let mut geometry = RenderGeometry::with_capacity(
            particles.len(),
            cell_cols * cell_rows * 2,
            GeometryTopology::Triangles,
        );
        for particle in &particles {
            geometry.push_vertex(particle.position);
        }
        for row in 0..cell_rows {
            for col in 0..cell_cols {
                let top_left = (row * dims.cols + col) as u32;
                let top_right = top_left + 1;
                let bot_left = top_left + dims.cols as u32;
                let bot_right = bot_left + 1;

                geometry.indices.extend_from_slice(&[top_left, bot_left, top_right]);
                geometry.indices.extend_from_slice(&[top_right, bot_left, bot_right]);
            }
        }

        // One structural constraint per unique triangle edge. The
        // solver is stable under duplicates, but canonical (min, max)
        // keys keep the constraint count at one per edge.
        let mut constraints = Vec::new();
        let mut seen_edges: HashSet<(u32, u32)> = HashSet::new();
        for t in 0..geometry.primitive_count() {
            let [a, b, c] = geometry.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                if seen_edges.insert(key) {
                    constraints.push(Constraint::distance(
                        v0 as usize,
                        v1 as usize,
                        &particles,
                        properties.stiffness,
                        properties.damping,
                    ));
                }
            }
        }

        // Bend constraints along both diagonals of interior cells.
        for row in 0..cell_rows {
            for col in 0..dims.cols {
                let current = row * dims.cols + col;
                if col + 1 < dims.cols {
                    let down_right = current + dims.cols + 1;
                    constraints.push(Constraint::bend(
                        current,
                        down_right,
                        &particles,
                        properties.stiffness,
                        properties.damping,
                    ));
                }
                if col >= 1 {
                    let down_left = current + dims.cols - 1;
                    constraints.push(Constraint::bend(
                        current,
                        down_left,
                        &particles,
                        properties.stiffness,
                        properties.damping,
                    ));
                }
            }
        }

        // Pin the nearest particle to each named attachment point and
        // snap it to the authoritative position. Sorted by name so two
        // attachments competing for one particle resolve the same way
        // every run.
        let mut named: Vec<(&String, &Vec3)> = attachments.iter().collect();
        named.sort_by(|a, b| a.0.cmp(b.0));
        let mut attachment_map = HashMap::new();
        for (name, &point) in named {
            if let Some(index) = nearest_particle(&particles, point) {
                particles[index].position = point;
                particles[index].pin();
                attachment_map.insert(name.clone(), index);
            }
        }

        Self {
            avatar_id: avatar_id.to_string(),
            kind,
            material: properties,
            particles,
            constraints,
            attachments: attachment_map,
            local_colliders: Vec::new(),
            geometry,
            cols: dims.cols,
            rows: dims.rows,
        }
    }

    /// Grid vertex columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid vertex rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Moves a named attachment's pinned particle to an authoritative
    /// external position. Unknown names are a no-op.
    pub fn set_attachment_position(&mut self, name: &str, position: Vec3) {
        if let Some(&index) = self.attachments.get(name) {
            self.particles[index].reposition(position);
        }
    }

    /// Copies particle positions into the render buffer, recomputes
    /// normals, and marks it dirty for re-upload.
    pub fn write_back_geometry(&mut self) {
        for (i, particle) in self.particles.iter().enumerate() {
            self.geometry.set_position(i, particle.position);
        }
        compute_vertex_normals(&mut self.geometry);
        self.geometry.mark_dirty();
    }

    /// Total kinetic energy of the free particles.
    pub fn kinetic_energy(&self) -> Scalar {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}

/// Centroid of the attachment points, or the origin when none exist.
fn attachment_centroid(attachments: &HashMap<String, Vec3>) -> Vec3 {
    if attachments.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = attachments.values().copied().sum();
    sum / attachments.len() as Scalar
}

/// Index of the particle nearest to `point`, by Euclidean distance.
fn nearest_particle(particles: &[Particle], point: Vec3) -> Option<usize> {
    let mut best: Option<(usize, Scalar)> = None;
    for (i, particle) in particles.iter().enumerate() {
        let dist = particle.position.distance_squared(point);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
