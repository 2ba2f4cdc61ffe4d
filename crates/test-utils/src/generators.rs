//! Synthetic survey grids for tests and benchmarks.
//!
//! Every generator lays points out on a regular lattice: the point in
//! column `j`, row `i` sits at `(j * spacing, i * spacing)` and carries
//! sequence number `j * height + i`, the order in which a surveyor walking
//! column by column would record it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use terrain_common::{DeclaredPoint, Grid};

/// Builds a grid from heights indexed `[column][row]`.
///
/// # Panics
///
/// Panics if the heights do not form a valid grid (fewer than 2 columns or
/// rows, or ragged columns).
///
/// # Example
///
/// ```
/// use test_utils::grid_from_heights;
///
/// let grid = grid_from_heights(10, &[vec![0, 10], vec![20, 30]]);
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// ```
pub fn grid_from_heights(spacing: i64, heights: &[Vec<i64>]) -> Grid {
    let height = heights.first().map(Vec::len).unwrap_or(0);
    let columns = heights
        .iter()
        .enumerate()
        .map(|(j, column)| {
            column
                .iter()
                .enumerate()
                .map(|(i, &z)| lattice_point(spacing, height, j, i, z))
                .collect()
        })
        .collect();
    Grid::new(columns).expect("heights must form a valid grid")
}

fn lattice_point(spacing: i64, height: usize, j: usize, i: usize, z: i64) -> DeclaredPoint {
    DeclaredPoint::from_i64(
        j as i64 * spacing,
        i as i64 * spacing,
        z,
        j,
        i,
        (j * height + i) as u64,
    )
}

fn generate(
    width: usize,
    height: usize,
    spacing: i64,
    mut z: impl FnMut(usize, usize) -> i64,
) -> Grid {
    let heights: Vec<Vec<i64>> = (0..width)
        .map(|j| (0..height).map(|i| z(j, i)).collect())
        .collect();
    grid_from_heights(spacing, &heights)
}

/// A plane rising by `gradient` per column; every row is identical.
pub fn slope_grid(width: usize, height: usize, spacing: i64, gradient: i64) -> Grid {
    generate(width, height, spacing, |j, _| j as i64 * gradient)
}

/// A square pyramid: `peak` at the centre, falling by `slope` per step of
/// Manhattan distance.
pub fn cone_grid(size: usize, spacing: i64, peak: i64, slope: i64) -> Grid {
    let centre = (size / 2) as i64;
    generate(size, size, spacing, |j, i| {
        let distance = (j as i64 - centre).abs() + (i as i64 - centre).abs();
        peak - slope * distance
    })
}

/// Every point at the same height.
pub fn flat_grid(width: usize, height: usize, spacing: i64, z: i64) -> Grid {
    generate(width, height, spacing, |_, _| z)
}

/// A slope grid with every `every`-th point (in sequence order) replaced by
/// the absent sentinel.
pub fn sparse_grid(width: usize, height: usize, spacing: i64, gradient: i64, every: usize) -> Grid {
    let mut grid = slope_grid(width, height, spacing, gradient);
    let every = every.max(1);
    for j in 0..width {
        for i in 0..height {
            if (j * height + i) % every == every - 1 {
                grid.set(j, i, DeclaredPoint::absent())
                    .expect("index is inside the grid");
            }
        }
    }
    grid
}

/// Random terrain with heights in `0..amplitude`, reproducible from `seed`.
pub fn noisy_grid(width: usize, height: usize, spacing: i64, amplitude: i64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(width, height, spacing, |_, _| rng.gen_range(0..amplitude.max(1)))
}
