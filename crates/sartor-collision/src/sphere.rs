//! Analytical sphere collision.
//!
//! A simple collision object that prevents vertices from penetrating
//! a sphere of a given radius and center. Used by drape scenarios
//! and as a convex reference surface in tests.

use glam::Vec3;
use sartor_engine::{Collider, ContactSummary, Piece};
use sartor_types::constants;

/// Analytical sphere collider.
///
/// Generates contacts for any vertex inside the sphere and applies
/// direct position correction to push them to the surface.
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
    /// Gap left between corrected vertices and the surface.
    surface_offset: f32,
}

impl SphereCollider {
    /// Creates a new sphere collider.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            surface_offset: constants::SURFACE_OFFSET,
        }
    }
}

impl Collider for SphereCollider {
    fn resolve(&self, piece: &mut Piece) -> ContactSummary {
        let mut resolved = 0u32;
        let mut max_penetration = 0.0f32;

        let r2 = self.radius * self.radius;

        for i in 0..piece.vertex_count {
            let delta = piece.position(i) - self.center;
            let dist_sq = delta.length_squared();

            if dist_sq >= r2 {
                continue;
            }

            if dist_sq > 1e-12 {
                let dist = dist_sq.sqrt();
                let normal = delta / dist;
                let depth = self.radius - dist;

                let corrected = self.center + normal * (self.radius + self.surface_offset);
                piece.pos_x[i] = corrected.x;
                piece.pos_y[i] = corrected.y;
                piece.pos_z[i] = corrected.z;

                // Remove velocity component pointing into the sphere.
                let v = piece.velocity(i);
                let v_dot_n = v.dot(normal);
                if v_dot_n < 0.0 {
                    let v_corrected = v - normal * v_dot_n;
                    piece.vel_x[i] = v_corrected.x;
                    piece.vel_y[i] = v_corrected.y;
                    piece.vel_z[i] = v_corrected.z;
                }

                resolved += 1;
                max_penetration = max_penetration.max(depth);
            } else {
                // Exactly at center: push straight up and stop the vertex.
                piece.pos_y[i] = self.center.y + self.radius + self.surface_offset;
                piece.vel_x[i] = 0.0;
                piece.vel_y[i] = 0.0;
                piece.vel_z[i] = 0.0;

                resolved += 1;
                max_penetration = max_penetration.max(self.radius);
            }
        }

        ContactSummary {
            resolved_count: resolved,
            max_penetration,
        }
    }

    fn name(&self) -> &str {
        "sphere_collider"
    }
}
