//! Vertex normal computation.
//!
//! Area-weighted vertex normals, accumulated from incident triangle
//! faces. The collision crate relies on these pointing outward for a
//! correctly wound body mesh.

use glam::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry, in place.
///
/// Each incident face contributes its unnormalized cross product
/// (magnitude 2x the triangle area), so larger faces weigh more; the
/// per-vertex sum is then normalized. Vertices with no incident
/// triangles, or only degenerate ones, get a zero normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let mut accum = vec![Vec3::ZERO; mesh.vertex_count()];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let pa = mesh.position(a as usize);
        let pb = mesh.position(b as usize);
        let pc = mesh.position(c as usize);

        let face = (pb - pa).cross(pc - pa);
        accum[a as usize] += face;
        accum[b as usize] += face;
        accum[c as usize] += face;
    }

    for (i, sum) in accum.iter().enumerate() {
        let len = sum.length();
        let normal = if len > 1e-10 { *sum / len } else { Vec3::ZERO };
        mesh.normal_x[i] = normal.x;
        mesh.normal_y[i] = normal.y;
        mesh.normal_z[i] = normal.z;
    }
}
