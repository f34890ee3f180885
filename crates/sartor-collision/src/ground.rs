//! Ground plane collision.
//!
//! The engine already clamps every vertex to `y ≥ 0`; this collider
//! covers raised or lowered floors at an arbitrary height.

use sartor_engine::{Collider, ContactSummary, Piece};

/// Ground plane collider at a fixed Y height.
///
/// Projects any vertex below `y = height` back onto the plane and
/// zeroes its downward velocity.
pub struct GroundPlane {
    /// Height of the ground plane (Y coordinate).
    pub height: f32,
}

impl GroundPlane {
    /// Creates a new ground plane at the given height.
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Collider for GroundPlane {
    fn resolve(&self, piece: &mut Piece) -> ContactSummary {
        let mut resolved = 0u32;
        let mut max_penetration = 0.0f32;

        for i in 0..piece.vertex_count {
            let depth = self.height - piece.pos_y[i];
            if depth <= 0.0 {
                continue;
            }

            piece.pos_y[i] = self.height;
            if piece.vel_y[i] < 0.0 {
                piece.vel_y[i] = 0.0;
            }

            resolved += 1;
            max_penetration = max_penetration.max(depth);
        }

        ContactSummary {
            resolved_count: resolved,
            max_penetration,
        }
    }

    fn name(&self) -> &str {
        "ground_plane"
    }
}
