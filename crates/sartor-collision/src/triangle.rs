//! Point-triangle closest-point computation.
//!
//! The workhorse of the body collider's narrow phase. Voronoi-region
//! closest point on a triangle, plus the face normal from winding.

use glam::Vec3;

/// Closest point on triangle (a, b, c) to point `p`.
///
/// Handles all Voronoi regions: vertex, edge, and face. Degenerate
/// triangles still return a sensible point on one of the edges.
pub fn closest_point_on_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    // Vertex region A
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    // Vertex region B
    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    // Edge region AB
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    // Vertex region C
    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    // Edge region AC
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    // Edge region BC
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    // Face region
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Face normal from winding order, or `None` for a degenerate triangle.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    let n = (b - a).cross(c - a);
    let len = n.length();
    if len < 1e-12 {
        None
    } else {
        Some(n / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    #[test]
    fn face_region_projects_to_plane() {
        let p = Vec3::new(0.25, 0.25, 3.0);
        let cp = closest_point_on_triangle(p, A, B, C);
        assert!((cp - Vec3::new(0.25, 0.25, 0.0)).length() < 1e-6);
    }

    #[test]
    fn vertex_region_returns_vertex() {
        let p = Vec3::new(-1.0, -1.0, 0.5);
        let cp = closest_point_on_triangle(p, A, B, C);
        assert!((cp - A).length() < 1e-6);
    }

    #[test]
    fn edge_region_projects_to_edge() {
        let p = Vec3::new(0.5, -2.0, 0.0);
        let cp = closest_point_on_triangle(p, A, B, C);
        assert!((cp - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn winding_defines_normal() {
        let n = face_normal(A, B, C).unwrap();
        assert!((n - Vec3::Z).length() < 1e-6);
        let n_flipped = face_normal(A, C, B).unwrap();
        assert!((n_flipped + Vec3::Z).length() < 1e-6);
    }
}
