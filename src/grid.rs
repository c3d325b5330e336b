use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GridError {
    #[error("Invalid grid dimensions {rows}x{cols}, both must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Cannot operate on a grid that was never given dimensions")]
    Uninitialized,

    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Expected {expected} initial values, got {got}")]
    SizeMismatch { expected: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;

/// A fixed size, bounds checked 2D array.
///
/// Cells are stored row-major, so the cell at `(row, col)` lives at `row * cols + col`. The
/// dimensions are set once at construction and never change.
///
/// A `BoundedGrid::default()` has no dimensions at all. It is a placeholder meant to be replaced
/// by assignment, and every indexed access on it fails with [`GridError::Uninitialized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    /// Number of rows. `0` only for the dimensionless placeholder.
    rows: usize,

    /// Number of columns. `0` only for the dimensionless placeholder.
    cols: usize,

    cells: Vec<T>,
}

impl<T> Default for BoundedGrid<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Default + Clone> BoundedGrid<T> {
    /// Create a `rows x cols` grid where every cell is `T::default()`
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Clone> BoundedGrid<T> {
    /// Create a `rows x cols` grid where every cell is a copy of `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> GridResult<Self> {
        let len = Self::checked_len(rows, cols)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![value; len],
        })
    }
}

impl<T> BoundedGrid<T> {
    /// Create a grid from `values`, given in row-major order. There must be exactly
    /// `rows * cols` of them.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<T>) -> GridResult<Self> {
        let expected = Self::checked_len(rows, cols)?;

        if values.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                got: values.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: values,
        })
    }

    fn checked_len(rows: usize, cols: usize) -> GridResult<usize> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        rows.checked_mul(cols).ok_or(GridError::InvalidDimension { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether this grid was given dimensions
    pub fn is_initialized(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// Map `(row, col)` to an index into `cells`
    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if !self.is_initialized() {
            return Err(GridError::Uninitialized);
        }

        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<&T> {
        let i = self.index(row, col)?;
        Ok(&self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> GridResult<&mut T> {
        let i = self.index(row, col)?;
        Ok(&mut self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> GridResult<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// All cells, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}
