//! Error types shared across the Sartor crates.

use thiserror::Error;

/// Everything that can go wrong while assembling or running a drape.
#[derive(Debug, Error)]
pub enum SartorError {
    /// Mesh data is malformed: mismatched channel lengths, indices out
    /// of range, or degenerate triangles.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A configuration value is non-physical or out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two pieces were registered under the same name.
    #[error("Duplicate piece name: {0}")]
    DuplicatePiece(String),

    /// A step produced a non-finite position or velocity. This signals
    /// a modeling defect (e.g. dt too large for the chosen weightings)
    /// and halts the simulation rather than propagating corrupted state.
    #[error("Non-finite state in piece '{piece}' at vertex {vertex}")]
    NumericalInstability { piece: String, vertex: usize },
}

/// Convenience alias for `Result<T, SartorError>`.
pub type SartorResult<T> = Result<T, SartorError>;
