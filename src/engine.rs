use std::fmt;

use tracing::debug;
use tracing::trace;

use crate::grid::BoundedGrid;
use crate::grid::GridError;
use crate::grid::GridResult;
use crate::rule_set::RuleSet;

/// Relative coordinates of the 8 cells surrounding a cell
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded Life universe.
///
/// Cells past the edge of the grid don't exist: they are neither alive nor dead, and simply don't
/// count as neighbours. There is no wraparound.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    /// Which cells are alive in the current generation
    alive: BoundedGrid<bool>,

    /// Scratch buffer holding the neighbour count of every cell. Only meaningful during `step`.
    neighbours: BoundedGrid<u8>,

    rules: RuleSet,

    generation: u64,
}

impl LifeEngine {
    /// Create an engine running Conway's rules from an initial generation
    pub fn new(initial: BoundedGrid<bool>) -> GridResult<Self> {
        Self::with_rules(initial, RuleSet::default())
    }

    pub fn with_rules(initial: BoundedGrid<bool>, rules: RuleSet) -> GridResult<Self> {
        if !initial.is_initialized() {
            return Err(GridError::Uninitialized);
        }

        let neighbours = BoundedGrid::new(initial.rows(), initial.cols())?;

        debug!(
            rows = initial.rows(),
            cols = initial.cols(),
            %rules,
            "Created life engine"
        );

        Ok(Self {
            alive: initial,
            neighbours,
            rules,
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.alive.rows()
    }

    pub fn cols(&self) -> usize {
        self.alive.cols()
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of times [`LifeEngine::step`] was called
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// The current generation
    pub fn state(&self) -> &BoundedGrid<bool> {
        &self.alive
    }

    /// Whether the cell at `(row, col)` is alive
    pub fn cell_at(&self, row: usize, col: usize) -> GridResult<bool> {
        self.alive.get(row, col).copied()
    }

    /// Advance the universe by one generation.
    pub fn step(&mut self) -> GridResult<()> {
        let (rows, cols) = (self.rows(), self.cols());

        // All counts must come from the previous generation, so they're computed in full before
        // any cell changes.
        for row in 0..rows {
            for col in 0..cols {
                let n = self.count_neighbours(row, col)?;
                self.neighbours.set(row, col, n)?;
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                let n = *self.neighbours.get(row, col)?;
                let cell = self.alive.get_mut(row, col)?;

                *cell = self.rules.next(*cell, n);
            }
        }

        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            "Stepped"
        );

        Ok(())
    }

    /// Count the alive cells around `(row, col)`, skipping those past the edge
    fn count_neighbours(&self, row: usize, col: usize) -> GridResult<u8> {
        let mut sum = 0;

        for (dr, dc) in NEIGHBOURHOOD {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };

            if r >= self.rows() || c >= self.cols() {
                continue;
            }

            if *self.alive.get(r, c)? {
                sum += 1;
            }
        }

        Ok(sum)
    }
}

impl fmt::Display for LifeEngine {
    /// One line per row, `o` for alive cells and `.` for dead ones
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let alive = self.cell_at(row, col).map_err(|_| fmt::Error)?;
                f.write_str(if alive { "o" } else { "." })?;
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::LifeEngine;
    use crate::grid::BoundedGrid;
    use crate::grid::GridError;

    fn engine_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> LifeEngine {
        let mut grid = BoundedGrid::new(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, true).unwrap();
        }

        LifeEngine::new(grid).unwrap()
    }

    fn alive_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
        let mut cells = vec![];
        for r in 0..engine.rows() {
            for c in 0..engine.cols() {
                if engine.cell_at(r, c).unwrap() {
                    cells.push((r, c));
                }
            }
        }

        cells
    }

    #[test]
    fn placeholder_grid_is_rejected() {
        let res = LifeEngine::new(BoundedGrid::default());
        assert!(matches!(res, Err(GridError::Uninitialized)));
    }

    #[test]
    fn lonely_cell_dies() {
        let mut engine = engine_with(3, 3, &[(1, 1)]);
        engine.step().unwrap();

        assert!(alive_cells(&engine).is_empty());
    }

    #[test]
    fn blinker_turns_vertical() {
        let mut engine = engine_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        engine.step().unwrap();

        assert_eq!(alive_cells(&engine), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn block_is_still() {
        let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut engine = engine_with(3, 3, &block);
        engine.step().unwrap();

        assert_eq!(alive_cells(&engine), block.to_vec());
    }

    #[test]
    fn corner_has_three_neighbours() {
        let engine = engine_with(4, 4, &[(0, 1), (1, 0), (1, 1), (3, 3)]);

        assert_eq!(engine.count_neighbours(0, 0), Ok(3));
        assert_eq!(engine.count_neighbours(3, 3), Ok(0));
        assert_eq!(engine.count_neighbours(2, 2), Ok(2));
    }

    #[test]
    fn generation_and_population() {
        let mut engine = engine_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 3);

        engine.step().unwrap();
        engine.step().unwrap();

        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn cell_at_reports_bounds() {
        let engine = engine_with(2, 2, &[]);
        assert!(matches!(
            engine.cell_at(2, 0),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}
