//! Procedural mesh generators for scenarios and testing.
//!
//! Both generators are deterministic for a given argument set, so
//! scenario runs built from them reproduce exactly.

use std::f32::consts::PI;

use crate::mesh::TriangleMesh;

/// A flat cloth panel: a `cols` x `rows` quad grid in the XZ plane at
/// `y = 0`, centred on the origin, `width` metres along X and `depth`
/// metres along Z. Face winding puts the surface normal at +Y.
///
/// # Example
/// ```
/// use sartor_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, depth: f32) -> TriangleMesh {
    let nx = cols + 1;
    let nz = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(nx * nz, cols * rows * 2);

    for j in 0..nz {
        let z = depth * (j as f32 / rows as f32 - 0.5);
        for i in 0..nx {
            let x = width * (i as f32 / cols as f32 - 0.5);
            mesh.pos_x.push(x);
            mesh.pos_y.push(0.0);
            mesh.pos_z.push(z);
            mesh.normal_x.push(0.0);
            mesh.normal_y.push(1.0);
            mesh.normal_z.push(0.0);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let near = (j * nx + i) as u32; // smaller z
            let far = near + nx as u32; // larger z
            mesh.indices.extend_from_slice(&[near, far, near + 1]);
            mesh.indices.extend_from_slice(&[near + 1, far, far + 1]);
        }
    }

    mesh
}

/// A UV sphere centred at the origin, used as a stand-in collision
/// body. `stacks` latitude bands, `slices` longitude divisions. Face
/// winding puts face normals outward; vertex normals are exact
/// (position over radius).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let ring = slices + 1; // seam column duplicated
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * ring, stacks * slices * 2);

    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        for j in 0..=slices {
            let theta = 2.0 * PI * j as f32 / slices as f32;
            let dir = glam::Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.pos_x.push(radius * dir.x);
            mesh.pos_y.push(radius * dir.y);
            mesh.pos_z.push(radius * dir.z);
            mesh.normal_x.push(dir.x);
            mesh.normal_y.push(dir.y);
            mesh.normal_z.push(dir.z);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * ring + j) as u32;
            let b = a + ring as u32;
            // Pole bands get one triangle per quad, not two. This
            // winding keeps face normals pointing outward.
            if i != 0 {
                mesh.indices.extend_from_slice(&[a, a + 1, b]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }

    mesh
}
