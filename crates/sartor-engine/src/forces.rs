//! Force accumulation — the net force on every vertex for one step.
//!
//! Five contributions, written into the piece's accumulator:
//! stretch (structural edges), shear (quad diagonals), bend (dihedral
//! deviation), gravity, and velocity-opposing friction. Spring-type
//! forces carry a relative-deformation dead zone so edges near their
//! rest state contribute exactly zero, avoiding force-induced jitter
//! at equilibrium.
//!
//! Each edge writes equal and opposite forces to its two endpoints;
//! bend elements balance wing forces against the shared edge.

use crate::config::PhysicsConfig;
use crate::piece::Piece;
use crate::rest_graph::{BendElement, RestEdge};

/// Clears the accumulator and adds all five force contributions.
pub fn accumulate(piece: &mut Piece, config: &PhysicsConfig) {
    piece.clear_forces();

    accumulate_edges(
        piece,
        EdgeSet::Structural,
        config.stress_weighting,
        config.stress_threshold,
    );
    accumulate_edges(
        piece,
        EdgeSet::Shear,
        config.shear_weighting,
        config.shear_threshold,
    );
    accumulate_bend(piece, config.bend_weighting, config.bend_threshold);
    apply_gravity(piece, config.gravity);
    apply_friction(piece, config.friction);
}

/// Which rest-edge set a spring pass runs over.
#[derive(Clone, Copy)]
enum EdgeSet {
    Structural,
    Shear,
}

/// Spring force over one rest-edge set.
///
/// For each edge (i, j): relative deformation `s = (L − L0) / L0`.
/// When `|s|` strictly exceeds the threshold, a force of magnitude
/// `weighting × s` is applied along the edge direction — pulling the
/// endpoints together when stretched, pushing apart when compressed.
/// Within the dead zone (including exactly at rest) the edge
/// contributes zero.
fn accumulate_edges(piece: &mut Piece, set: EdgeSet, weighting: f32, threshold: f32) {
    let count = match set {
        EdgeSet::Structural => piece.rest.structural.len(),
        EdgeSet::Shear => piece.rest.shear.len(),
    };

    for idx in 0..count {
        let RestEdge { i, j, rest_length } = match set {
            EdgeSet::Structural => piece.rest.structural[idx],
            EdgeSet::Shear => piece.rest.shear[idx],
        };
        let i = i as usize;
        let j = j as usize;

        let delta = piece.position(j) - piece.position(i);
        let length = delta.length();
        if length < 1e-10 || rest_length < 1e-10 {
            continue;
        }

        let strain = (length - rest_length) / rest_length;
        if strain.abs() <= threshold {
            continue;
        }

        let force = delta / length * (weighting * strain);
        piece.add_force(i, force);
        piece.add_force(j, -force);
    }
}

/// Bend force over the interior-edge elements.
///
/// The deviation is the current sine of the angle between the two
/// adjacent triangle normals minus the value recorded at rest. When
/// the deviation strictly exceeds the threshold, each wing vertex is
/// pushed toward the plane of the opposite triangle with magnitude
/// `weighting × deviation`; the shared edge vertices take the
/// balancing reaction so the element exerts no net force.
fn accumulate_bend(piece: &mut Piece, weighting: f32, threshold: f32) {
    for idx in 0..piece.rest.bend.len() {
        let BendElement {
            v0,
            v1,
            wing_a,
            wing_b,
            rest_sin,
        } = piece.rest.bend[idx];
        let v0 = v0 as usize;
        let v1 = v1 as usize;
        let wa = wing_a as usize;
        let wb = wing_b as usize;

        let p0 = piece.position(v0);
        let p1 = piece.position(v1);
        let pa = piece.position(wa);
        let pb = piece.position(wb);

        let edge = p1 - p0;
        let n1 = edge.cross(pa - p0);
        let n2 = edge.cross(pb - p0);
        let len1 = n1.length();
        let len2 = n2.length();
        if len1 < 1e-10 || len2 < 1e-10 {
            continue;
        }
        let n1 = n1 / len1;
        let n2 = n2 / len2;

        let sin_current = n1.cross(n2).length().clamp(0.0, 1.0);
        let deviation = sin_current - rest_sin;
        if deviation <= threshold {
            continue;
        }

        let magnitude = weighting * deviation;

        // Push each wing toward the opposite triangle's plane.
        let side_a = n2.dot(pa - p0);
        let side_b = n1.dot(pb - p0);
        let f_a = -n2 * (magnitude * side_a.signum());
        let f_b = -n1 * (magnitude * side_b.signum());

        piece.add_force(wa, f_a);
        piece.add_force(wb, f_b);

        // Balancing reaction split across the shared edge.
        let reaction = -(f_a + f_b) * 0.5;
        piece.add_force(v0, reaction);
        piece.add_force(v1, reaction);
    }
}

/// Constant downward gravity: `f_y −= m · g` per vertex.
fn apply_gravity(piece: &mut Piece, gravity: f32) {
    let fg = piece.mass * gravity;
    for fy in &mut piece.force_y {
        *fy -= fg;
    }
}

/// Friction opposing current velocity: `f −= k · v` per vertex.
///
/// Accumulated before integration (and therefore before collision
/// correction), damping sliding contact.
fn apply_friction(piece: &mut Piece, friction: f32) {
    if friction == 0.0 {
        return;
    }
    for i in 0..piece.vertex_count {
        let v = piece.velocity(i);
        piece.add_force(i, -v * friction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sartor_mesh::generators::quad_grid;

    #[test]
    fn at_rest_panel_has_only_gravity_and_no_spring_force() {
        let mesh = quad_grid(2, 2, 1.0, 1.0);
        let config = PhysicsConfig::default();
        let mut piece = Piece::new("flat", &mesh, &config).unwrap();

        accumulate(&mut piece, &config);

        let fg = config.vertex_mass * config.gravity;
        for i in 0..piece.vertex_count {
            assert_eq!(piece.force_x[i], 0.0, "vertex {} has lateral force", i);
            assert_eq!(piece.force_z[i], 0.0, "vertex {} has lateral force", i);
            assert!(
                (piece.force_y[i] + fg).abs() < 1e-6,
                "vertex {} force_y {} != -{}",
                i,
                piece.force_y[i],
                fg
            );
        }
    }

    #[test]
    fn stretched_edge_pulls_endpoints_together() {
        let mesh = quad_grid(1, 1, 1.0, 1.0);
        let config = PhysicsConfig {
            gravity: 0.0,
            friction: 0.0,
            bend_weighting: 0.0,
            shear_weighting: 0.0,
            ..Default::default()
        };
        let mut piece = Piece::new("quad", &mesh, &config).unwrap();

        // Stretch vertex 0 away from the grid along −x.
        piece.pos_x[0] -= 0.5;
        accumulate(&mut piece, &config);

        // Net force on vertex 0 should point back toward +x.
        assert!(piece.force_x[0] > 0.0);
    }

    #[test]
    fn folded_quad_pushes_wings_flat_with_zero_net_force() {
        let mesh = quad_grid(1, 1, 1.0, 1.0);
        let config = PhysicsConfig {
            gravity: 0.0,
            friction: 0.0,
            stress_weighting: 0.0,
            shear_weighting: 0.0,
            ..Default::default()
        };
        let mut piece = Piece::new("fold", &mesh, &config).unwrap();

        // The single interior edge is the diagonal (1, 2); its wings
        // are vertices 0 and 3. Lift one wing out of the plane.
        piece.pos_y[0] = 0.3;
        accumulate(&mut piece, &config);

        // The lifted wing is pushed back down toward the opposite
        // triangle's plane.
        assert!(piece.force_y[0] < 0.0, "force_y[0] = {}", piece.force_y[0]);

        // The element exerts zero net force: wing forces are balanced
        // by the reaction on the shared edge.
        let (mut fx, mut fy, mut fz) = (0.0f32, 0.0f32, 0.0f32);
        for i in 0..piece.vertex_count {
            fx += piece.force_x[i];
            fy += piece.force_y[i];
            fz += piece.force_z[i];
        }
        assert!(fx.abs() < 1e-5, "net fx = {}", fx);
        assert!(fy.abs() < 1e-5, "net fy = {}", fy);
        assert!(fz.abs() < 1e-5, "net fz = {}", fz);
    }

    #[test]
    fn bend_dead_zone_includes_exact_threshold() {
        // A hinge: edge (0, 1) on the x axis with symmetric wings.
        // Swinging wing 2 straight up keeps its distance to both edge
        // endpoints and makes the dihedral sine exactly 1.
        let positions = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.5, 0.0, -1.0, //
            0.5, 0.0, 1.0,
        ];
        let indices = [0, 2, 1, 0, 1, 3];
        let mesh = sartor_mesh::TriangleMesh::from_interleaved(&positions, &indices).unwrap();

        let config = PhysicsConfig {
            gravity: 0.0,
            friction: 0.0,
            stress_weighting: 0.0,
            shear_weighting: 0.0,
            bend_threshold: 1.0,
            ..Default::default()
        };
        let mut piece = Piece::new("hinge", &mesh, &config).unwrap();
        piece.pos_y[2] = 1.0;
        piece.pos_z[2] = 0.0;
        accumulate(&mut piece, &config);

        // Deviation equals the threshold exactly; the dead zone is
        // inclusive, so no force at all.
        for i in 0..piece.vertex_count {
            assert_eq!(piece.force_x[i], 0.0, "vertex {}", i);
            assert_eq!(piece.force_y[i], 0.0, "vertex {}", i);
            assert_eq!(piece.force_z[i], 0.0, "vertex {}", i);
        }

        // Below the boundary the same fold does produce a force.
        let config = PhysicsConfig {
            bend_threshold: 0.5,
            ..config
        };
        let mut piece = Piece::new("hinge", &mesh, &config).unwrap();
        piece.pos_y[2] = 1.0;
        piece.pos_z[2] = 0.0;
        accumulate(&mut piece, &config);
        assert!(piece.force_y[2] < 0.0, "force_y[2] = {}", piece.force_y[2]);
    }

    #[test]
    fn skewed_quad_shear_pulls_diagonal_back() {
        let mesh = quad_grid(1, 1, 1.0, 1.0);
        let config = PhysicsConfig {
            gravity: 0.0,
            friction: 0.0,
            stress_weighting: 0.0,
            bend_weighting: 0.0,
            ..Default::default()
        };
        let mut piece = Piece::new("skew", &mesh, &config).unwrap();

        // Stretch the wing diagonal (vertices 0 and 3) by dragging
        // vertex 0 outward along it. The panel stays flat, so only
        // shear reacts.
        piece.pos_x[0] -= 0.3;
        piece.pos_z[0] -= 0.3;
        accumulate(&mut piece, &config);

        assert!(piece.force_x[0] > 0.0 && piece.force_z[0] > 0.0);
        // Equal and opposite on the far end of the diagonal.
        assert!(piece.force_x[3] < 0.0 && piece.force_z[3] < 0.0);
        assert!((piece.force_x[0] + piece.force_x[3]).abs() < 1e-6);
    }

    #[test]
    fn friction_opposes_velocity() {
        let mesh = quad_grid(1, 1, 1.0, 1.0);
        let config = PhysicsConfig {
            gravity: 0.0,
            stress_weighting: 0.0,
            shear_weighting: 0.0,
            bend_weighting: 0.0,
            friction: 0.05,
            ..Default::default()
        };
        let mut piece = Piece::new("quad", &mesh, &config).unwrap();
        piece.vel_x[0] = 2.0;

        accumulate(&mut piece, &config);
        assert!((piece.force_x[0] + 0.1).abs() < 1e-6);
    }
}
