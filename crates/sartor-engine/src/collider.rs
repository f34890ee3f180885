//! Collision seam between the engine and the collision crate.
//!
//! The engine drives collision resolution through this trait without
//! knowing the geometry behind it; the collision crate implements it
//! for the static body, analytic spheres, and ground planes.

use crate::piece::Piece;

/// Summary of one collider's resolution pass over one piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSummary {
    /// Number of vertices corrected.
    pub resolved_count: u32,
    /// Deepest penetration encountered before correction (metres).
    pub max_penetration: f32,
}

impl ContactSummary {
    /// Merge another summary into this one.
    pub fn merge(&mut self, other: ContactSummary) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
    }
}

/// A static obstacle that pieces collide with.
///
/// `resolve` runs after the position update of a step: it detects
/// penetrating vertices, projects them back to (or just outside) the
/// surface, and removes the inward normal velocity component so the
/// vertex does not re-penetrate next step. This is a discrete,
/// per-step test: fast-moving vertices can tunnel through thin
/// geometry between steps, an accepted limitation given the small
/// timestep and the velocity cap.
pub trait Collider: Send {
    /// Detect and correct penetrating vertices of `piece` in place.
    fn resolve(&self, piece: &mut Piece) -> ContactSummary;

    /// Returns the collider's name for diagnostics.
    fn name(&self) -> &str;
}
