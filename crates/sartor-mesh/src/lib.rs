//! # sartor-mesh
//!
//! Triangle mesh container and topology queries for the Sartor engine.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — SoA vertex/index container shared by pieces and bodies
//! - [`topology::Topology`] — precomputed edge/adjacency data
//! - [`generators`] — deterministic procedural meshes for scenarios and tests

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::TriangleMesh;
pub use topology::{InteriorEdge, Topology};
