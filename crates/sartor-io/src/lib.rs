//! # sartor-io
//!
//! Simulation input contract and validation.
//!
//! Defines the boundary types that external systems (CLI, asset
//! pipeline) use to describe a draping run, and validates them before
//! the engine receives anything.

pub mod contract;
pub mod validator;

pub use contract::{DrapeInput, PieceInput, RunParams, RunSummary};
pub use validator::validate_input;
