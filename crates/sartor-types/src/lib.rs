//! # sartor-types
//!
//! Shared error types and physical constants for the Sartor garment
//! draping engine. This crate has zero domain logic; it defines the
//! vocabulary the other Sartor crates share.

pub mod constants;
pub mod error;

pub use error::{SartorError, SartorResult};
