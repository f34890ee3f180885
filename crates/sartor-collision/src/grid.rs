//! Uniform spatial grid over the body's triangles.
//!
//! Partitions space into cells and bins each triangle into every cell
//! its bounding box overlaps. Built exactly once when the body is
//! loaded — an explicit construction step, not memoized on first
//! query — so ownership and initialization order stay visible.
//!
//! Closest-triangle queries walk Chebyshev shells outward from the
//! query point's cell and stop once no closer cell can exist.

use std::collections::HashMap;

use glam::Vec3;

type CellKey = (i32, i32, i32);

/// Uniform grid binning triangle indices by cell.
pub struct TriangleGrid {
    /// Inverse cell size (cached for hashing).
    inv_cell_size: f32,
    /// Cell size in metres.
    cell_size: f32,
    /// Occupied cells → triangle indices.
    cells: HashMap<CellKey, Vec<u32>>,
    /// Lowest occupied cell coordinate per axis.
    min_cell: CellKey,
    /// Highest occupied cell coordinate per axis.
    max_cell: CellKey,
}

impl TriangleGrid {
    /// Build a grid over triangles given as (min, max) bounding boxes.
    ///
    /// `cell_size` should be on the order of the mean triangle extent;
    /// [`TriangleGrid::pick_cell_size`] derives a reasonable value.
    pub fn build(cell_size: f32, triangle_bounds: &[(Vec3, Vec3)]) -> Self {
        let cell_size = cell_size.max(1e-6);
        let inv = 1.0 / cell_size;
        let mut cells: HashMap<CellKey, Vec<u32>> = HashMap::new();
        let mut min_cell = (i32::MAX, i32::MAX, i32::MAX);
        let mut max_cell = (i32::MIN, i32::MIN, i32::MIN);

        for (t, (lo, hi)) in triangle_bounds.iter().enumerate() {
            let c_lo = cell_of(*lo, inv);
            let c_hi = cell_of(*hi, inv);
            for cx in c_lo.0..=c_hi.0 {
                for cy in c_lo.1..=c_hi.1 {
                    for cz in c_lo.2..=c_hi.2 {
                        cells.entry((cx, cy, cz)).or_default().push(t as u32);
                    }
                }
            }
            min_cell = (
                min_cell.0.min(c_lo.0),
                min_cell.1.min(c_lo.1),
                min_cell.2.min(c_lo.2),
            );
            max_cell = (
                max_cell.0.max(c_hi.0),
                max_cell.1.max(c_hi.1),
                max_cell.2.max(c_hi.2),
            );
        }

        Self {
            inv_cell_size: inv,
            cell_size,
            cells,
            min_cell,
            max_cell,
        }
    }

    /// Derive a cell size from the mean triangle bounding-box diagonal.
    pub fn pick_cell_size(triangle_bounds: &[(Vec3, Vec3)]) -> f32 {
        if triangle_bounds.is_empty() {
            return 1.0;
        }
        let sum: f32 = triangle_bounds
            .iter()
            .map(|(lo, hi)| (*hi - *lo).length())
            .sum();
        (2.0 * sum / triangle_bounds.len() as f32).max(1e-4)
    }

    /// The configured cell size.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Visit candidate triangles in shells of increasing distance from
    /// `p`, calling `visit(triangle_index)` for each. The callback
    /// returns the current best squared distance; shell expansion stops
    /// once every remaining cell is provably farther than that.
    pub fn for_candidates<F>(&self, p: Vec3, mut visit: F)
    where
        F: FnMut(u32) -> f32,
    {
        if self.cells.is_empty() {
            return;
        }

        let center = cell_of(p, self.inv_cell_size);

        // Start at the shell that first touches the occupied region.
        let start = chebyshev_to_box(center, self.min_cell, self.max_cell);
        let max_radius = max_chebyshev_to_box(center, self.min_cell, self.max_cell);

        let mut best_sq = f32::INFINITY;

        for radius in start..=max_radius {
            // Every cell in shell `radius` is at least this far away.
            let lower = (radius.max(1) - 1) as f32 * self.cell_size;
            if lower * lower > best_sq {
                break;
            }

            self.visit_shell(center, radius, |tri| {
                let d = visit(tri);
                if d < best_sq {
                    best_sq = d;
                }
            });
        }
    }

    /// Visit every occupied cell at exactly Chebyshev radius `r`.
    fn visit_shell<F>(&self, center: CellKey, r: i32, mut f: F)
    where
        F: FnMut(u32),
    {
        let lo = (
            (center.0 - r).max(self.min_cell.0),
            (center.1 - r).max(self.min_cell.1),
            (center.2 - r).max(self.min_cell.2),
        );
        let hi = (
            (center.0 + r).min(self.max_cell.0),
            (center.1 + r).min(self.max_cell.1),
            (center.2 + r).min(self.max_cell.2),
        );

        for cx in lo.0..=hi.0 {
            for cy in lo.1..=hi.1 {
                for cz in lo.2..=hi.2 {
                    let cheb = (cx - center.0)
                        .abs()
                        .max((cy - center.1).abs())
                        .max((cz - center.2).abs());
                    if cheb != r {
                        continue;
                    }
                    if let Some(tris) = self.cells.get(&(cx, cy, cz)) {
                        for &t in tris {
                            f(t);
                        }
                    }
                }
            }
        }
    }
}

#[inline]
fn cell_of(p: Vec3, inv_cell_size: f32) -> CellKey {
    (
        (p.x * inv_cell_size).floor() as i32,
        (p.y * inv_cell_size).floor() as i32,
        (p.z * inv_cell_size).floor() as i32,
    )
}

/// Chebyshev distance from a cell to the occupied cell box (0 if inside).
fn chebyshev_to_box(c: CellKey, lo: CellKey, hi: CellKey) -> i32 {
    let dx = (lo.0 - c.0).max(c.0 - hi.0).max(0);
    let dy = (lo.1 - c.1).max(c.1 - hi.1).max(0);
    let dz = (lo.2 - c.2).max(c.2 - hi.2).max(0);
    dx.max(dy).max(dz)
}

/// Largest Chebyshev distance from a cell to any corner of the box.
fn max_chebyshev_to_box(c: CellKey, lo: CellKey, hi: CellKey) -> i32 {
    let dx = (c.0 - lo.0).abs().max((hi.0 - c.0).abs());
    let dy = (c.1 - lo.1).abs().max((hi.1 - c.1).abs());
    let dz = (c.2 - lo.2).abs().max((hi.2 - c.2).abs());
    dx.max(dy).max(dz)
}
