//! Rest-edge graphs — the precomputed reference state of a piece.
//!
//! Three logically distinct adjacency graphs share the piece's vertex
//! index space:
//!
//! - **structural** — the mesh's unique edges, resisting stretch
//! - **shear** — the wing-vertex diagonals across interior edges
//!   (the cross diagonal of each quad), resisting skew
//! - **bend** — the interior edges themselves, with the two wing
//!   vertices and the rest dihedral measure, resisting folding
//!
//! Rest lengths and angles are computed once at piece construction
//! from the initial vertex layout and are immutable thereafter. This
//! is required both for performance and for the zero-force-at-rest
//! invariant to hold exactly.

use glam::Vec3;
use sartor_mesh::{Topology, TriangleMesh};

/// A spring edge with its rest length.
#[derive(Debug, Clone, Copy)]
pub struct RestEdge {
    /// First vertex index.
    pub i: u32,
    /// Second vertex index.
    pub j: u32,
    /// Distance between the endpoints at construction (metres).
    pub rest_length: f32,
}

/// A bend element across one interior edge.
///
/// ```text
///        wa
///       / \
///      /   \
///    v0 ─── v1
///      \   /
///       \ /
///        wb
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BendElement {
    /// Shared edge vertex A.
    pub v0: u32,
    /// Shared edge vertex B.
    pub v1: u32,
    /// Wing vertex of triangle A.
    pub wing_a: u32,
    /// Wing vertex of triangle B.
    pub wing_b: u32,
    /// Sine of the angle between the adjacent triangle normals at
    /// construction. Zero for a flat panel.
    pub rest_sin: f32,
}

/// The three rest-edge graphs of one piece.
#[derive(Debug, Clone, Default)]
pub struct RestGraph {
    /// Stretch-resisting edges.
    pub structural: Vec<RestEdge>,
    /// Skew-resisting diagonals.
    pub shear: Vec<RestEdge>,
    /// Fold-resisting elements.
    pub bend: Vec<BendElement>,
}

impl RestGraph {
    /// Build all three graphs from the initial mesh layout.
    ///
    /// `topology` must have been built from `mesh`; the index spaces
    /// are assumed identical.
    pub fn build(mesh: &TriangleMesh, topology: &Topology) -> Self {
        let structural = topology
            .edges
            .iter()
            .map(|&[i, j]| RestEdge {
                i,
                j,
                rest_length: edge_length(mesh, i, j),
            })
            .collect();

        let shear = topology
            .interior_edges
            .iter()
            .map(|ie| RestEdge {
                i: ie.wing_a,
                j: ie.wing_b,
                rest_length: edge_length(mesh, ie.wing_a, ie.wing_b),
            })
            .collect();

        let bend = topology
            .interior_edges
            .iter()
            .map(|ie| {
                let p0 = mesh.position(ie.v0 as usize);
                let p1 = mesh.position(ie.v1 as usize);
                let pa = mesh.position(ie.wing_a as usize);
                let pb = mesh.position(ie.wing_b as usize);

                BendElement {
                    v0: ie.v0,
                    v1: ie.v1,
                    wing_a: ie.wing_a,
                    wing_b: ie.wing_b,
                    rest_sin: dihedral_sine(p0, p1, pa, pb),
                }
            })
            .collect();

        Self {
            structural,
            shear,
            bend,
        }
    }

    /// Number of structural edges.
    pub fn structural_count(&self) -> usize {
        self.structural.len()
    }

    /// Number of shear diagonals.
    pub fn shear_count(&self) -> usize {
        self.shear.len()
    }

    /// Number of bend elements.
    pub fn bend_count(&self) -> usize {
        self.bend.len()
    }
}

fn edge_length(mesh: &TriangleMesh, i: u32, j: u32) -> f32 {
    (mesh.position(j as usize) - mesh.position(i as usize)).length()
}

/// Sine of the angle between the two triangle normals across an
/// interior edge.
///
/// Normals are taken as `edge × (wing − v0)` for each side, so for a
/// flat quad the two normals are anti-parallel and the sine is zero;
/// it grows as the quad folds either way. Degenerate triangles
/// (near-zero area) report zero, contributing no bend force.
pub fn dihedral_sine(p0: Vec3, p1: Vec3, pa: Vec3, pb: Vec3) -> f32 {
    let edge = p1 - p0;

    let n1 = edge.cross(pa - p0);
    let n2 = edge.cross(pb - p0);

    let len1 = n1.length();
    let len2 = n2.length();
    if len1 < 1e-10 || len2 < 1e-10 {
        return 0.0;
    }

    (n1 / len1).cross(n2 / len2).length().clamp(0.0, 1.0)
}
