//! Triangle mesh storage.
//!
//! Vertex data lives in one `Vec<f32>` per coordinate channel
//! (`pos_x`, `pos_y`, `pos_z`, and the same for normals). The force,
//! integration, and collision kernels each sweep a handful of channels
//! end to end, so per-channel storage keeps those sweeps on contiguous
//! memory.

use serde::{Deserialize, Serialize};
use sartor_types::{SartorError, SartorResult};

/// A triangle mesh in per-channel (SoA) layout.
///
/// The same type carries both garment panels (the rest geometry a
/// piece is built from) and the static avatar body. `indices` holds
/// flat `[v0, v1, v2]` triples, one per triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,
    pub normal_x: Vec<f32>,
    pub normal_y: Vec<f32>,
    pub normal_z: Vec<f32>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// An empty mesh with room for the given counts.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertices),
            pos_y: Vec::with_capacity(vertices),
            pos_z: Vec::with_capacity(vertices),
            normal_x: Vec::with_capacity(vertices),
            normal_y: Vec::with_capacity(vertices),
            normal_z: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Builds a mesh from interleaved `[x0, y0, z0, x1, ...]` positions.
    ///
    /// Normals come out zeroed; run
    /// [`normals::compute_vertex_normals`](crate::normals::compute_vertex_normals)
    /// before using the mesh as a collision body.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> SartorResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(SartorError::InvalidMesh(format!(
                "interleaved position data has length {}, not a multiple of 3",
                positions.len()
            )));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for v in positions.chunks_exact(3) {
            mesh.pos_x.push(v[0]);
            mesh.pos_y.push(v[1]);
            mesh.pos_z.push(v[2]);
        }
        mesh.normal_x.resize(n, 0.0);
        mesh.normal_y.resize(n, 0.0);
        mesh.normal_z.resize(n, 0.0);
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> glam::Vec3 {
        glam::Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// The three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let mut tri = [0u32; 3];
        tri.copy_from_slice(&self.indices[t * 3..t * 3 + 3]);
        tri
    }

    /// Checks structural integrity: channel lengths agree, every index
    /// is in range, and no triangle repeats a vertex.
    pub fn validate(&self) -> SartorResult<()> {
        let n = self.vertex_count();
        let channels = [
            ("pos_y", self.pos_y.len()),
            ("pos_z", self.pos_z.len()),
            ("normal_x", self.normal_x.len()),
            ("normal_y", self.normal_y.len()),
            ("normal_z", self.normal_z.len()),
        ];
        for (name, len) in channels {
            if len != n {
                return Err(SartorError::InvalidMesh(format!(
                    "channel {name} has {len} entries, expected {n}"
                )));
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(SartorError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        for (t, tri) in self.indices.chunks_exact(3).enumerate() {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            if a as usize >= n || b as usize >= n || c as usize >= n {
                return Err(SartorError::InvalidMesh(format!(
                    "triangle {t} references a vertex outside 0..{n}: [{a}, {b}, {c}]"
                )));
            }
            if a == b || b == c || a == c {
                return Err(SartorError::InvalidMesh(format!(
                    "triangle {t} is degenerate: [{a}, {b}, {c}]"
                )));
            }
        }

        Ok(())
    }

    /// Scales every position by a constant, e.g. authoring units to
    /// world metres.
    pub fn scale_vertices(&mut self, scalar: f32) {
        for c in [&mut self.pos_x, &mut self.pos_y, &mut self.pos_z] {
            for v in c.iter_mut() {
                *v *= scalar;
            }
        }
    }

    /// Translates every position by a fixed offset.
    pub fn offset_vertices(&mut self, offset: glam::Vec3) {
        for (c, delta) in [
            (&mut self.pos_x, offset.x),
            (&mut self.pos_y, offset.y),
            (&mut self.pos_z, offset.z),
        ] {
            for v in c.iter_mut() {
                *v += delta;
            }
        }
    }

    /// Stands the mesh upright at the origin: lowest point at y = 0,
    /// x and z centred on their mean.
    pub fn place_at_origin(&mut self) {
        let n = self.vertex_count();
        if n == 0 {
            return;
        }

        let x_mean = self.pos_x.iter().sum::<f32>() / n as f32;
        let z_mean = self.pos_z.iter().sum::<f32>() / n as f32;
        let y_min = self.pos_y.iter().copied().fold(f32::INFINITY, f32::min);

        self.offset_vertices(glam::Vec3::new(-x_mean, -y_min, -z_mean));
    }
}
