//! Piece state — SoA buffers for one cloth panel.
//!
//! A piece owns its vertex positions, velocities, per-vertex force
//! accumulator, and the three rest-edge graphs built at construction.
//! The vertex count and rest graphs never change afterwards; only the
//! integrator and collision resolution mutate positions/velocities.

use glam::Vec3;
use sartor_mesh::{Topology, TriangleMesh};
use sartor_types::{SartorError, SartorResult};

use crate::config::PhysicsConfig;
use crate::rest_graph::RestGraph;

/// One simulated cloth panel.
///
/// # Layout
///
/// All arrays have length `vertex_count`. Channels are stored
/// contiguously, matching the mesh layout:
/// ```text
/// pos_x: [x0, x1, x2, ...]
/// pos_y: [y0, y1, y2, ...]
/// ...
/// ```
pub struct Piece {
    /// Piece name, used in frames and error reports.
    pub name: String,

    /// Number of vertices.
    pub vertex_count: usize,

    // ─── Position ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    // ─── Net-force accumulator (cleared each step) ───
    pub force_x: Vec<f32>,
    pub force_y: Vec<f32>,
    pub force_z: Vec<f32>,

    /// Per-vertex mass (uniform, from config).
    pub mass: f32,

    /// The structural/shear/bend rest graphs. Immutable after build.
    pub rest: RestGraph,
}

impl Piece {
    /// Build a piece from a parsed garment panel.
    ///
    /// Validates the mesh and the config, derives the topology, and
    /// precomputes all rest lengths and angles. Velocities start at
    /// zero. Fails fast before any stepping begins.
    pub fn new(name: &str, mesh: &TriangleMesh, config: &PhysicsConfig) -> SartorResult<Self> {
        config.validate()?;
        mesh.validate()
            .map_err(|e| SartorError::InvalidMesh(format!("Piece '{}': {}", name, e)))?;

        let topology = Topology::build(mesh);
        let rest = RestGraph::build(mesh, &topology);
        let n = mesh.vertex_count();

        Ok(Self {
            name: name.to_string(),
            vertex_count: n,
            pos_x: mesh.pos_x.clone(),
            pos_y: mesh.pos_y.clone(),
            pos_z: mesh.pos_z.clone(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            force_x: vec![0.0; n],
            force_y: vec![0.0; n],
            force_z: vec![0.0; n],
            mass: config.vertex_mass,
            rest,
        })
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Velocity of vertex `i`.
    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    /// Adds `f` to vertex `i`'s force accumulator.
    #[inline]
    pub fn add_force(&mut self, i: usize, f: Vec3) {
        self.force_x[i] += f.x;
        self.force_y[i] += f.y;
        self.force_z[i] += f.z;
    }

    /// Zeroes the force accumulator. Called at the start of each step.
    pub fn clear_forces(&mut self) {
        self.force_x.fill(0.0);
        self.force_y.fill(0.0);
        self.force_z.fill(0.0);
    }

    /// Current positions as flat triples `[x0, y0, z0, x1, ...]`,
    /// for frame recording and playback.
    pub fn positions_flat(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count * 3);
        for i in 0..self.vertex_count {
            out.push(self.pos_x[i]);
            out.push(self.pos_y[i]);
            out.push(self.pos_z[i]);
        }
        out
    }

    /// Clamp every vertex to `y ≥ 0` (ground-plane floor).
    ///
    /// A cheap global safety net applied every step regardless of body
    /// collision. Downward velocity of clamped vertices is zeroed so
    /// they do not accumulate speed into the floor.
    pub fn clamp_above_ground(&mut self) {
        for i in 0..self.vertex_count {
            if self.pos_y[i] < 0.0 {
                self.pos_y[i] = 0.0;
                if self.vel_y[i] < 0.0 {
                    self.vel_y[i] = 0.0;
                }
            }
        }
    }

    /// Verify every position and velocity is finite.
    ///
    /// A non-finite value signals a modeling or configuration defect
    /// (e.g. dt too large for the weightings); it is surfaced as a hard
    /// failure naming the offending vertex, not silently clamped.
    pub fn check_finite(&self) -> SartorResult<()> {
        for i in 0..self.vertex_count {
            let finite = self.pos_x[i].is_finite()
                && self.pos_y[i].is_finite()
                && self.pos_z[i].is_finite()
                && self.vel_x[i].is_finite()
                && self.vel_y[i].is_finite()
                && self.vel_z[i].is_finite();
            if !finite {
                return Err(SartorError::NumericalInstability {
                    piece: self.name.clone(),
                    vertex: i,
                });
            }
        }
        Ok(())
    }

    /// Total kinetic energy: 0.5 * Σ m * ‖v‖².
    pub fn kinetic_energy(&self) -> f64 {
        let m = self.mass as f64;
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            energy += 0.5 * m * (vx * vx + vy * vy + vz * vz);
        }
        energy
    }
}
