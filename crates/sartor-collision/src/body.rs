//! Static body collider — the avatar surface pieces drape against.
//!
//! Wraps a triangulated mesh with a uniform grid built once at
//! construction. The query returns the nearest surface point, the
//! outward normal there, and whether the query point is inside the
//! closed surface (sign test against the summed normals of the
//! nearest-tied faces).
//!
//! The collider assumes the body mesh is closed and manifold; this is
//! a contract with the geometry-loading collaborator and is not
//! validated here.

use glam::Vec3;
use sartor_engine::{Collider, ContactSummary, Piece};
use sartor_mesh::TriangleMesh;
use sartor_types::{constants, SartorError, SartorResult};

use crate::grid::TriangleGrid;
use crate::triangle::{closest_point_on_triangle, face_normal};

/// Result of a nearest-surface query.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Nearest point on the surface.
    pub point: Vec3,
    /// Outward unit normal at that point (pseudonormal at edges/vertices).
    pub normal: Vec3,
    /// Unsigned distance from the query point to the surface.
    pub distance: f32,
    /// Whether the query point lies inside the closed surface.
    pub inside: bool,
}

/// A static triangulated collision surface with precomputed
/// acceleration structure.
pub struct BodyCollider {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    face_normals: Vec<Vec3>,
    grid: TriangleGrid,
    /// Gap left between corrected vertices and the surface.
    surface_offset: f32,
}

impl BodyCollider {
    /// Build a collider from a body mesh.
    ///
    /// Validates the mesh, extracts face normals from winding, and
    /// constructs the spatial grid eagerly.
    pub fn new(mesh: &TriangleMesh) -> SartorResult<Self> {
        mesh.validate()
            .map_err(|e| SartorError::InvalidMesh(format!("Body mesh: {}", e)))?;
        if mesh.triangle_count() == 0 {
            return Err(SartorError::InvalidMesh(
                "Body mesh has no triangles".into(),
            ));
        }

        let positions: Vec<Vec3> = (0..mesh.vertex_count()).map(|i| mesh.position(i)).collect();

        let tri_count = mesh.triangle_count();
        let mut triangles = Vec::with_capacity(tri_count);
        let mut face_normals = Vec::with_capacity(tri_count);
        let mut bounds = Vec::with_capacity(tri_count);

        for t in 0..tri_count {
            let idx = mesh.triangle(t);
            let a = positions[idx[0] as usize];
            let b = positions[idx[1] as usize];
            let c = positions[idx[2] as usize];

            triangles.push(idx);
            // Degenerate triangles get a zero normal; they still take part
            // in closest-point queries but never decide the sign.
            face_normals.push(face_normal(a, b, c).unwrap_or(Vec3::ZERO));
            bounds.push((a.min(b).min(c), a.max(b).max(c)));
        }

        let cell_size = TriangleGrid::pick_cell_size(&bounds);
        let grid = TriangleGrid::build(cell_size, &bounds);

        Ok(Self {
            positions,
            triangles,
            face_normals,
            grid,
            surface_offset: constants::SURFACE_OFFSET,
        })
    }

    /// Number of triangles in the collision surface.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Nearest surface point, outward normal, and inside/outside
    /// classification for `p`.
    ///
    /// The sign test sums the face normals of the distinct triangles
    /// tied for the nearest point — an unweighted approximation of the
    /// pseudonormal that keeps the sign well defined at shared edges
    /// and vertices of a closed manifold surface.
    pub fn query(&self, p: Vec3) -> SurfaceHit {
        let mut best_sq = f32::INFINITY;
        let mut best_point = Vec3::ZERO;
        let mut ties: Vec<u32> = Vec::new();

        self.grid.for_candidates(p, |t| {
            let [ia, ib, ic] = self.triangles[t as usize];
            let cp = closest_point_on_triangle(
                p,
                self.positions[ia as usize],
                self.positions[ib as usize],
                self.positions[ic as usize],
            );
            let d_sq = (p - cp).length_squared();

            // Tie band relative to the best distance: triangles sharing
            // the nearest edge or vertex reach the same point through
            // different arithmetic, so exact equality cannot be
            // relied on.
            let tol = if best_sq.is_finite() {
                best_sq * 1e-4 + 1e-12
            } else {
                0.0
            };
            if d_sq < best_sq - tol {
                best_sq = d_sq;
                best_point = cp;
                ties.clear();
                ties.push(t);
            } else if d_sq <= best_sq + tol && !ties.contains(&t) {
                // The shell walk offers a triangle once per grid cell
                // it overlaps; count its normal once.
                ties.push(t);
            }
            best_sq
        });

        let mut pseudonormal = Vec3::ZERO;
        for &t in &ties {
            pseudonormal += self.face_normals[t as usize];
        }
        let normal = if pseudonormal.length() > 1e-10 {
            pseudonormal.normalize()
        } else {
            Vec3::Y
        };

        let distance = best_sq.sqrt();
        let to_point = p - best_point;
        // Points exactly on the surface count as inside so they get
        // pushed out to the offset shell.
        let inside = to_point.dot(normal) <= 0.0;

        SurfaceHit {
            point: best_point,
            normal,
            distance,
            inside,
        }
    }
}

impl Collider for BodyCollider {
    /// Project penetrating vertices to just outside the surface and
    /// remove their inward normal velocity component — a purely
    /// positional correction would re-penetrate under continued
    /// gravity on the next step.
    fn resolve(&self, piece: &mut Piece) -> ContactSummary {
        let mut resolved = 0u32;
        let mut max_penetration = 0.0f32;

        for i in 0..piece.vertex_count {
            let p = piece.position(i);
            let hit = self.query(p);
            if !hit.inside {
                continue;
            }

            let corrected = hit.point + hit.normal * self.surface_offset;
            piece.pos_x[i] = corrected.x;
            piece.pos_y[i] = corrected.y;
            piece.pos_z[i] = corrected.z;

            let v = piece.velocity(i);
            let v_dot_n = v.dot(hit.normal);
            if v_dot_n < 0.0 {
                let v_corrected = v - hit.normal * v_dot_n;
                piece.vel_x[i] = v_corrected.x;
                piece.vel_y[i] = v_corrected.y;
                piece.vel_z[i] = v_corrected.z;
            }

            resolved += 1;
            max_penetration = max_penetration.max(hit.distance);
        }

        ContactSummary {
            resolved_count: resolved,
            max_penetration,
        }
    }

    fn name(&self) -> &str {
        "body_collider"
    }
}
