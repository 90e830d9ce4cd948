//! Shape checks and traversal for the row-major 2D grids passed between the
//! mapper and the serializer. Rows run along Z, columns along X.

pub mod iter;

use std::fmt::{Display, Formatter};

/// Error generated when a grid is not a non-empty rectangle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridShapeError {
    /// The grid has no rows, so there is no first row to take the width from
    EmptyInput,
    /// Row `row` has `actual` cells where the first row has `expected`
    RowShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl Display for GridShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::EmptyInput => f.write_str("grid is empty: first row is undefined"),
            Self::RowShapeMismatch {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {} length mismatch: expected {} but got {}",
                row, expected, actual
            ),
        }
    }
}

impl std::error::Error for GridShapeError {}

/// Verify `grid` has at least one row and that all rows share the first
/// row's length. Returns `(width, length)`, i.e. (columns, rows).
pub fn check_rectangular<T>(grid: &[Vec<T>]) -> Result<(usize, usize), GridShapeError> {
    let first = grid.first().ok_or(GridShapeError::EmptyInput)?;
    let width = first.len();

    if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(GridShapeError::RowShapeMismatch {
            row,
            expected: width,
            actual: r.len(),
        });
    }

    Ok((width, grid.len()))
}

#[cfg(test)]
mod tests;
