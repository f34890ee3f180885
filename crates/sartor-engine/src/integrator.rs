//! Semi-implicit (symplectic) Euler integration.
//!
//! Velocity is updated first, damped, and magnitude-clamped; the
//! position update then uses the *new* velocity. This ordering is
//! load-bearing for stability with stiff spring forces — plain
//! explicit Euler (position from the old velocity) diverges at the
//! same timestep.

use crate::config::PhysicsConfig;
use crate::piece::Piece;

/// Advance every vertex of a piece by one timestep.
///
/// ```text
/// v' = (v + f/m · Δt) × damping,   ‖v'‖ clamped to max_velocity
/// x' = x + v' · Δt
/// ```
///
/// Purely deterministic; no error conditions.
pub fn integrate(piece: &mut Piece, config: &PhysicsConfig) {
    let dt = config.dt;
    let inv_mass = 1.0 / piece.mass;
    let damping = config.damping;
    let max_velocity = config.max_velocity;
    let max_sq = max_velocity * max_velocity;

    for i in 0..piece.vertex_count {
        let mut vx = (piece.vel_x[i] + piece.force_x[i] * inv_mass * dt) * damping;
        let mut vy = (piece.vel_y[i] + piece.force_y[i] * inv_mass * dt) * damping;
        let mut vz = (piece.vel_z[i] + piece.force_z[i] * inv_mass * dt) * damping;

        // Clamp magnitude, preserve direction.
        let speed_sq = vx * vx + vy * vy + vz * vz;
        if speed_sq > max_sq {
            let scale = max_velocity / speed_sq.sqrt();
            vx *= scale;
            vy *= scale;
            vz *= scale;
        }

        piece.vel_x[i] = vx;
        piece.vel_y[i] = vy;
        piece.vel_z[i] = vz;

        piece.pos_x[i] += vx * dt;
        piece.pos_y[i] += vy * dt;
        piece.pos_z[i] += vz * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sartor_mesh::generators::quad_grid;

    fn free_piece(config: &PhysicsConfig) -> Piece {
        let mesh = quad_grid(1, 1, 1.0, 1.0);
        Piece::new("quad", &mesh, config).unwrap()
    }

    #[test]
    fn gravity_step_matches_closed_form() {
        let config = PhysicsConfig::default();
        let mut piece = free_piece(&config);
        let y0 = piece.pos_y[0];

        // Single vertex under gravity alone.
        let fg = piece.mass * config.gravity;
        for i in 0..piece.vertex_count {
            piece.force_y[i] = -fg;
        }
        integrate(&mut piece, &config);

        let expected_vy = -config.gravity * config.dt * config.damping;
        assert!((piece.vel_y[0] - expected_vy).abs() < 1e-6);
        assert!((piece.pos_y[0] - (y0 + expected_vy * config.dt)).abs() < 1e-6);
    }

    #[test]
    fn velocity_never_exceeds_cap() {
        let config = PhysicsConfig::default();

        for magnitude in [0.0, 1.0, 1.0e3, 1.0e6, 1.0e12] {
            let mut piece = free_piece(&config);
            piece.force_x[0] = magnitude;
            piece.force_y[0] = -magnitude;
            integrate(&mut piece, &config);

            let speed = (piece.vel_x[0].powi(2)
                + piece.vel_y[0].powi(2)
                + piece.vel_z[0].powi(2))
            .sqrt();
            assert!(
                speed <= config.max_velocity + 1e-5,
                "force {} produced speed {}",
                magnitude,
                speed
            );
        }
    }

    #[test]
    fn clamp_preserves_direction() {
        let config = PhysicsConfig::default();
        let mut piece = free_piece(&config);
        piece.force_x[0] = 3.0e4;
        piece.force_y[0] = 4.0e4;
        integrate(&mut piece, &config);

        let vx = piece.vel_x[0];
        let vy = piece.vel_y[0];
        assert!((vy / vx - 4.0 / 3.0).abs() < 1e-4);
    }
}
