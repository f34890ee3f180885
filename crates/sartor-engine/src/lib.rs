//! # sartor-engine
//!
//! The cloth physics core: force accumulation, time integration,
//! collision resolution hooks, and the simulation driver.
//!
//! ## Key Types
//!
//! - [`PhysicsConfig`] — validated, immutable physical constants
//! - [`Piece`] — one cloth panel: SoA vertex state + precomputed rest graphs
//! - [`Collider`] — seam for the collision crate's body/analytic colliders
//! - [`Simulation`] — advances named pieces step by step, recording frames
//!
//! ## Step anatomy
//!
//! ```text
//! For each step:
//!   1. Accumulate forces for every piece (stress, shear, bend,
//!      gravity, friction)
//!   2. Per piece: semi-implicit Euler integration (velocity first,
//!      damped and speed-clamped, then position)
//!   3. Per piece: collision resolution + ground clamp
//!   4. Finite-state check (hard failure on NaN/Inf)
//!   5. Snapshot all piece positions into the frame buffer
//! ```

pub mod collider;
pub mod config;
pub mod forces;
pub mod integrator;
pub mod piece;
pub mod rest_graph;
pub mod simulation;

pub use collider::{Collider, ContactSummary};
pub use config::PhysicsConfig;
pub use piece::Piece;
pub use rest_graph::{BendElement, RestEdge, RestGraph};
pub use simulation::Simulation;
