//! Hair strand bundle construction — scalp scatter → segment chains.
//!
//! Each strand is a chain of particles: a fixed root on a sphere
//! around the head, then free segments following a jittered downward
//! direction with curl-driven lateral offsets. Roots are sampled from
//! a seeded RNG so construction is reproducible.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;

use velour_material::{HairPreset, HairProperties};
use velour_math::sampling;
use velour_math::Vec3;
use velour_mesh::{GeometryTopology, RenderGeometry};
use velour_types::constants::SEGMENTS_PER_STRAND;
use velour_types::Scalar;

use crate::constraint::Constraint;
use crate::particle::Particle;
use crate::proxy::CollisionProxy;

/// Radius of the scalp sphere roots are scattered on (meters).
const SCALP_RADIUS: Scalar = 0.1;

/// Maximum random outward offset added to each root (meters).
const ROOT_OFFSET: Scalar = 0.01;

/// Lateral jitter applied to the initial strand direction.
const DIRECTION_SPREAD: Scalar = 0.35;

/// Curl lateral amplitude at `curliness = 1` (meters).
const CURL_AMPLITUDE: Scalar = 0.03;

/// A simulated bundle of hair strands.
///
/// All strands share one particle arena; strand `s` occupies indices
/// `[s · SEGMENTS_PER_STRAND, (s + 1) · SEGMENTS_PER_STRAND)` with the
/// root (segment 0) first.
#[derive(Debug)]
pub struct StrandBundle {
    /// The avatar this bundle is attached to.
    pub avatar_id: String,
    /// Style preset this bundle was built from.
    pub style: HairPreset,
    /// Property copy. Immutable after creation.
    pub properties: HairProperties,
    /// Particle arena; indices are stable for the body's lifetime.
    pub particles: Vec<Particle>,
    /// Chain constraints, relaxed in insertion order.
    pub constraints: Vec<Constraint>,
    /// Colliders that travel with this body (e.g. the head proxy).
    pub local_colliders: Vec<CollisionProxy>,
    /// Render buffer the geometry write-back targets (line segments).
    pub geometry: RenderGeometry,

    head_position: Vec3,
}

impl StrandBundle {
    /// Builds a hair bundle around a head position.
    ///
    /// Root positions use inverse-cosine polar sampling for a uniform
    /// spherical distribution; the seed makes construction
    /// deterministic given identical inputs.
    pub fn build(avatar_id: &str, head_position: Vec3, style: HairPreset, seed: u64) -> Self {
        let properties = style.properties();
        let mut rng = StdRng::seed_from_u64(seed);

        let strand_count = properties.strand_count;
        let particle_count = strand_count * SEGMENTS_PER_STRAND;
        let mut particles = Vec::with_capacity(particle_count);
        let mut constraints = Vec::with_capacity(strand_count * (SEGMENTS_PER_STRAND - 1));
        let mut geometry = RenderGeometry::with_capacity(
            particle_count,
            strand_count * (SEGMENTS_PER_STRAND - 1),
            GeometryTopology::Lines,
        );

        let curl_amplitude = properties.curliness * CURL_AMPLITUDE;

        for _ in 0..strand_count {
            let scatter = sampling::unit_sphere_surface(&mut rng);
            let outward = sampling::uniform(&mut rng, ROOT_OFFSET);
            let root = head_position + scatter * (SCALP_RADIUS + outward);
            let direction = sampling::jittered_down(&mut rng, DIRECTION_SPREAD);

            let first = particles.len();
            for segment in 0..SEGMENTS_PER_STRAND {
                let t = segment as Scalar / (SEGMENTS_PER_STRAND - 1) as Scalar;
                let phase = t * 4.0 * PI;
                let curl = Vec3::new(phase.sin(), 0.0, phase.cos()) * curl_amplitude * t;
                let position = root + direction * (t * properties.strand_length) + curl;

                if segment == 0 {
                    particles.push(Particle::fixed_at(root, properties.segment_mass));
                } else {
                    particles.push(Particle::new(position, properties.segment_mass));
                }
                geometry.push_vertex(particles[first + segment].position);
            }

            for segment in 1..SEGMENTS_PER_STRAND {
                let a = first + segment - 1;
                let b = first + segment;
                constraints.push(Constraint::distance(
                    a,
                    b,
                    &particles,
                    properties.stiffness,
                    properties.damping,
                ));
                geometry.indices.extend_from_slice(&[a as u32, b as u32]);
            }
        }

        Self {
            avatar_id: avatar_id.to_string(),
            style,
            properties,
            particles,
            constraints,
            local_colliders: Vec::new(),
            geometry,
            head_position,
        }
    }

    /// Number of strands in the bundle.
    #[inline]
    pub fn strand_count(&self) -> usize {
        self.particles.len() / SEGMENTS_PER_STRAND
    }

    /// Arena index of strand `s`'s root particle.
    #[inline]
    pub fn root_index(&self, strand: usize) -> usize {
        strand * SEGMENTS_PER_STRAND
    }

    /// Current head position the roots follow.
    #[inline]
    pub fn head_position(&self) -> Vec3 {
        self.head_position
    }

    /// Follows a head move: every fixed root translates rigidly by the
    /// head's displacement. Free segments catch up via the solver.
    pub fn set_head_position(&mut self, position: Vec3) {
        let delta = position - self.head_position;
        self.head_position = position;
        if delta == Vec3::ZERO {
            return;
        }
        for strand in 0..self.strand_count() {
            let root = self.root_index(strand);
            let target = self.particles[root].position + delta;
            self.particles[root].reposition(target);
        }
    }

    /// Explicit chain tension, layered on top of constraint relaxation
    /// to keep strands taut between passes. Recomputed from the
    /// current distance to the previous segment relative to rest
    /// length; pulls only the free downstream endpoint.
    pub fn accumulate_tension_forces(&mut self) {
        for c in &self.constraints {
            let delta = self.particles[c.a].position - self.particles[c.b].position;
            let dist = delta.length();
            if dist <= f32::EPSILON {
                continue;
            }
            let stretch = dist - c.rest_length;
            if stretch <= 0.0 {
                continue;
            }
            let force = delta / dist * stretch * c.stiffness;
            let b = c.b;
            self.particles[b].apply_force(force);
        }
    }

    /// Copies particle positions into the render buffer and marks it
    /// dirty. Strand polylines carry no vertex normals.
    pub fn write_back_geometry(&mut self) {
        for (i, particle) in self.particles.iter().enumerate() {
            self.geometry.set_position(i, particle.position);
        }
        self.geometry.mark_dirty();
    }

    /// Total kinetic energy of the free particles.
    pub fn kinetic_energy(&self) -> Scalar {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}
