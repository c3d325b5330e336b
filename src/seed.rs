//! Initial generations to start an engine with.

use crate::grid::BoundedGrid;
use crate::grid::GridResult;

/// A cell is born dead if its index is a multiple of any of these
const DIVISORS: [usize; 5] = [3, 5, 7, 9, 13];

/// Deterministic, dense pattern that quickly breaks up into lots of activity.
///
/// Cell `(r, c)` gets the column-major index `i = r + rows * c` and starts dead when `i` is
/// divisible by 3, 5, 7, 9 or 13, alive otherwise.
pub fn divisors(rows: usize, cols: usize) -> GridResult<BoundedGrid<bool>> {
    let mut grid = BoundedGrid::new(rows, cols)?;

    for r in 0..rows {
        for c in 0..cols {
            let i = r + rows * c;
            let dead = DIVISORS.iter().any(|d| i % d == 0);

            grid.set(r, c, !dead)?;
        }
    }

    Ok(grid)
}

/// Every cell dead
pub fn blank(rows: usize, cols: usize) -> GridResult<BoundedGrid<bool>> {
    BoundedGrid::new(rows, cols)
}
