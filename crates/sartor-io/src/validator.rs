//! Input validation.
//!
//! Validates a complete drape input before the engine receives it,
//! catching data-level errors early with clear diagnostics.

use std::collections::HashSet;

use sartor_types::{SartorError, SartorResult};

use crate::contract::{DrapeInput, RunParams};

/// Validates a complete drape input.
///
/// Checks:
/// - At least one piece, with unique names
/// - Every piece mesh has intact SoA arrays and valid indices
/// - Body mesh integrity (if present), and that it carries triangles
/// - Run parameters are physically reasonable
pub fn validate_input(input: &DrapeInput) -> SartorResult<()> {
    if input.pieces.is_empty() {
        return Err(SartorError::InvalidConfig(
            "Input contains no garment pieces".into(),
        ));
    }

    let mut seen = HashSet::new();
    for piece in &input.pieces {
        if piece.name.is_empty() {
            return Err(SartorError::InvalidConfig(
                "Piece name must be non-empty".into(),
            ));
        }
        if !seen.insert(piece.name.as_str()) {
            return Err(SartorError::DuplicatePiece(piece.name.clone()));
        }
        piece.mesh.validate().map_err(|e| {
            SartorError::InvalidMesh(format!("Piece '{}': {}", piece.name, e))
        })?;
        if piece.mesh.triangle_count() == 0 {
            return Err(SartorError::InvalidMesh(format!(
                "Piece '{}' has no triangles",
                piece.name
            )));
        }
        for c in &piece.offset {
            if !c.is_finite() {
                return Err(SartorError::InvalidConfig(format!(
                    "Piece '{}' has a non-finite offset",
                    piece.name
                )));
            }
        }
    }

    if let Some(ref body) = input.body {
        body.validate()
            .map_err(|e| SartorError::InvalidMesh(format!("Body mesh: {}", e)))?;
        if body.triangle_count() == 0 {
            return Err(SartorError::InvalidMesh(
                "Body mesh has no triangles".into(),
            ));
        }
    }

    validate_params(&input.params)?;

    Ok(())
}

fn validate_params(params: &RunParams) -> SartorResult<()> {
    if params.steps == 0 {
        return Err(SartorError::InvalidConfig(
            "Run must execute at least one step".into(),
        ));
    }
    if !(params.body_scale > 0.0) {
        return Err(SartorError::InvalidConfig(
            "Body scale must be positive".into(),
        ));
    }
    params.config.validate()
}
