//! Integration tests for sartor-collision.

use glam::Vec3;
use sartor_collision::{BodyCollider, GroundPlane, SphereCollider};
use sartor_engine::{Collider, PhysicsConfig, Piece};
use sartor_mesh::generators::{quad_grid, uv_sphere};

fn flat_piece() -> Piece {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    Piece::new("panel", &mesh, &PhysicsConfig::default()).unwrap()
}

// ─── Body Collider Tests ──────────────────────────────────────

#[test]
fn body_query_outside_point() {
    let body = BodyCollider::new(&uv_sphere(1.0, 16, 24)).unwrap();

    let hit = body.query(Vec3::new(2.0, 0.0, 0.0));
    assert!(!hit.inside);
    assert!((hit.distance - 1.0).abs() < 0.05);
    // Nearest surface point is on the +X side of the sphere.
    assert!((hit.point.x - 1.0).abs() < 0.05);
    assert!(hit.normal.x > 0.9);
}

#[test]
fn body_query_inside_point() {
    let body = BodyCollider::new(&uv_sphere(1.0, 16, 24)).unwrap();

    let hit = body.query(Vec3::new(0.5, 0.0, 0.0));
    assert!(hit.inside);
    assert!((hit.distance - 0.5).abs() < 0.05);
    assert!(hit.normal.x > 0.9, "normal should point outward");
}

#[test]
fn ridge_query_counts_each_tied_face_once() {
    // Two triangles meeting at a ridge along the x axis, sloping down
    // symmetrically in ±z. Each triangle overlaps several grid cells,
    // so the shell walk offers it to the query more than once.
    let positions = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.5, -1.0, -1.0, //
        0.5, -1.0, 1.0,
    ];
    let indices = [0, 1, 2, 1, 0, 3];
    let mesh = sartor_mesh::TriangleMesh::from_interleaved(&positions, &indices).unwrap();
    let body = BodyCollider::new(&mesh).unwrap();

    // Directly above the ridge midpoint both faces tie for the nearest
    // point. Counting either face twice would tilt the summed normal
    // off the symmetry plane.
    let hit = body.query(Vec3::new(0.5, 0.5, 0.0));
    assert!(!hit.inside);
    assert!((hit.point - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
    assert!(hit.normal.y > 0.999, "normal {:?} should bisect the ridge", hit.normal);
    assert!(hit.normal.z.abs() < 1e-3, "normal {:?} is skewed", hit.normal);
}

#[test]
fn body_resolve_pushes_deep_vertex_out() {
    let radius = 1.0;
    let body = BodyCollider::new(&uv_sphere(radius, 16, 24)).unwrap();

    let mut piece = flat_piece();
    // Bury every vertex well inside the sphere.
    for i in 0..piece.vertex_count {
        piece.pos_x[i] *= 0.1;
        piece.pos_y[i] = 0.05 * i as f32 / piece.vertex_count as f32;
        piece.pos_z[i] *= 0.1;
    }

    let summary = body.resolve(&mut piece);
    assert!(summary.resolved_count > 0);

    // A faceted UV sphere is slightly smaller than the ideal sphere,
    // so check against the inscribed radius with tolerance.
    for i in 0..piece.vertex_count {
        let dist = piece.position(i).length();
        assert!(
            dist >= radius - 0.05,
            "vertex {} still inside at distance {}",
            i,
            dist
        );
    }
}

#[test]
fn body_resolve_removes_inward_velocity() {
    let body = BodyCollider::new(&uv_sphere(1.0, 16, 24)).unwrap();

    let mut piece = flat_piece();
    for i in 0..piece.vertex_count {
        piece.pos_x[i] = 0.5;
        piece.pos_y[i] = 0.0;
        piece.pos_z[i] = 0.0;
        piece.vel_x[i] = -1.0; // Moving toward the center
    }

    body.resolve(&mut piece);

    for i in 0..piece.vertex_count {
        assert!(
            piece.vel_x[i] >= -1e-4,
            "vertex {} kept inward velocity {}",
            i,
            piece.vel_x[i]
        );
    }
}

#[test]
fn body_rejects_mesh_without_triangles() {
    let mesh = sartor_mesh::TriangleMesh::from_interleaved(&[0.0, 0.0, 0.0], &[]).unwrap();
    assert!(BodyCollider::new(&mesh).is_err());
}

// ─── Spatial Grid Tests ───────────────────────────────────────

#[test]
fn grid_shell_search_finds_nearest_triangle() {
    use sartor_collision::TriangleGrid;

    // Two unit boxes far apart on the X axis.
    let bounds = vec![
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
        (Vec3::new(10.0, 0.0, 0.0), Vec3::new(11.0, 1.0, 1.0)),
    ];
    let grid = TriangleGrid::build(1.0, &bounds);
    assert!(grid.occupied_cells() > 0);

    // Query near the far box; record which candidates show up before
    // the shell walk terminates.
    let mut seen = Vec::new();
    grid.for_candidates(Vec3::new(10.5, 0.5, 0.5), |t| {
        seen.push(t);
        let center = if t == 0 {
            Vec3::new(0.5, 0.5, 0.5)
        } else {
            Vec3::new(10.5, 0.5, 0.5)
        };
        (Vec3::new(10.5, 0.5, 0.5) - center).length_squared()
    });

    assert!(seen.contains(&1));
    // The near box is 9 cells away; the search must stop long before.
    assert!(!seen.contains(&0));
}

#[test]
fn grid_cell_size_scales_with_triangle_extent() {
    use sartor_collision::TriangleGrid;

    let small = vec![(Vec3::ZERO, Vec3::splat(0.01))];
    let large = vec![(Vec3::ZERO, Vec3::splat(1.0))];
    assert!(TriangleGrid::pick_cell_size(&small) < TriangleGrid::pick_cell_size(&large));
}

// ─── Sphere Collider Tests ────────────────────────────────────

#[test]
fn sphere_projects_interior_vertices_to_surface() {
    let radius = 0.5;
    let sphere = SphereCollider::new(Vec3::ZERO, radius);

    let mut piece = flat_piece();
    for i in 0..piece.vertex_count {
        // Scatter vertices strictly inside the sphere.
        piece.pos_x[i] *= 0.2;
        piece.pos_y[i] = 0.1;
        piece.pos_z[i] *= 0.2;
    }

    let summary = sphere.resolve(&mut piece);
    assert_eq!(summary.resolved_count as usize, piece.vertex_count);

    for i in 0..piece.vertex_count {
        let dist = piece.position(i).length();
        assert!(
            dist >= radius - 1e-5,
            "vertex {} at distance {} < r",
            i,
            dist
        );
    }
}

#[test]
fn sphere_leaves_exterior_vertices_alone() {
    let sphere = SphereCollider::new(Vec3::ZERO, 0.25);
    let mut piece = flat_piece();
    for i in 0..piece.vertex_count {
        piece.pos_y[i] = 2.0;
    }
    let before = piece.positions_flat();

    let summary = sphere.resolve(&mut piece);
    assert_eq!(summary.resolved_count, 0);
    assert_eq!(piece.positions_flat(), before);
}

#[test]
fn sphere_handles_vertex_at_center() {
    let sphere = SphereCollider::new(Vec3::new(0.0, 1.0, 0.0), 0.3);
    let mut piece = flat_piece();
    piece.pos_x[0] = 0.0;
    piece.pos_y[0] = 1.0;
    piece.pos_z[0] = 0.0;
    piece.vel_y[0] = -2.0;

    sphere.resolve(&mut piece);
    assert!(piece.pos_y[0] >= 1.3);
    assert_eq!(piece.vel_y[0], 0.0);
}

// ─── Ground Plane Tests ───────────────────────────────────────

#[test]
fn ground_plane_lifts_buried_vertices() {
    let ground = GroundPlane::new(0.5);
    let mut piece = flat_piece();
    for i in 0..piece.vertex_count {
        piece.pos_y[i] = -1.0;
        piece.vel_y[i] = -3.0;
    }

    let summary = ground.resolve(&mut piece);
    assert_eq!(summary.resolved_count as usize, piece.vertex_count);
    assert!((summary.max_penetration - 1.5).abs() < 1e-5);

    for i in 0..piece.vertex_count {
        assert_eq!(piece.pos_y[i], 0.5);
        assert_eq!(piece.vel_y[i], 0.0);
    }
}

#[test]
fn ground_plane_ignores_vertices_above() {
    let ground = GroundPlane::new(0.0);
    let mut piece = flat_piece();
    for i in 0..piece.vertex_count {
        piece.pos_y[i] = 0.2;
    }
    let summary = ground.resolve(&mut piece);
    assert_eq!(summary.resolved_count, 0);
}
