//! Mesh topology queries.
//!
//! Builds adjacency data from the triangle index buffer. The engine
//! derives its three rest-edge graphs from this: structural edges from
//! the unique edge list, shear edges from the wing-vertex pairs across
//! interior edges, and bend elements from the interior edges
//! themselves.

use std::collections::BTreeMap;

use crate::mesh::TriangleMesh;

/// Adjacency data for a triangle mesh, built once at load time and
/// never touched during simulation.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges, each as `[v_min, v_max]`, in sorted order.
    pub edges: Vec<[u32; 2]>,
    /// Triangles adjacent to each edge, parallel to `edges`. Boundary
    /// edges list one triangle, interior edges two.
    pub edge_triangles: Vec<Vec<u32>>,
    /// Edges with exactly two adjacent triangles. These carry the bend
    /// elements and define the shear diagonals.
    pub interior_edges: Vec<InteriorEdge>,
}

/// An interior edge together with its adjacent triangle pair.
///
/// `wing_a` and `wing_b` are the off-edge vertices of the two
/// triangles; the segment between them is the cross diagonal of the
/// quad the pair forms.
#[derive(Debug, Clone, Copy)]
pub struct InteriorEdge {
    pub v0: u32,
    pub v1: u32,
    pub wing_a: u32,
    pub wing_b: u32,
    pub tri_a: u32,
    pub tri_b: u32,
}

impl Topology {
    pub fn build(mesh: &TriangleMesh) -> Self {
        // Canonicalized edge → triangle map. A BTreeMap keyed by
        // (v_min, v_max) gives sorted iteration for free, which fixes
        // the rest-graph ordering and therefore the force accumulation
        // order across runs.
        let mut edge_map: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();
        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = (v0.min(v1), v0.max(v1));
                edge_map.entry(key).or_default().push(t as u32);
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_triangles = Vec::with_capacity(edge_map.len());
        let mut interior_edges = Vec::new();

        for (&(v0, v1), tris) in &edge_map {
            edges.push([v0, v1]);

            // Exactly 2 adjacent triangles makes the edge interior.
            if let [tri_a, tri_b] = tris[..] {
                interior_edges.push(InteriorEdge {
                    v0,
                    v1,
                    wing_a: wing_of(mesh, tri_a, v0, v1),
                    wing_b: wing_of(mesh, tri_b, v0, v1),
                    tri_a,
                    tri_b,
                });
            }
            edge_triangles.push(tris.clone());
        }

        Self {
            edges,
            edge_triangles,
            interior_edges,
        }
    }

    /// Edges bordered by a single triangle.
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles.iter().filter(|t| t.len() == 1).count()
    }

    /// A closed surface has no boundary edges.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}

/// The vertex of `tri` that lies off the `v0`-`v1` edge.
fn wing_of(mesh: &TriangleMesh, tri: u32, v0: u32, v1: u32) -> u32 {
    let tri = mesh.triangle(tri as usize);
    tri.into_iter().find(|&v| v != v0 && v != v1).unwrap_or(tri[0])
}
