use super::iter::iter_cell_coords;
use super::*;

#[test]
fn rectangular_grid_reports_width_and_length() {
    let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(check_rectangular(&grid), Ok((3, 2)));
}

#[test]
fn empty_grid_is_rejected() {
    let grid: Vec<Vec<u8>> = vec![];
    assert_eq!(check_rectangular(&grid), Err(GridShapeError::EmptyInput));
}

#[test]
fn zero_width_rows_are_accepted() {
    let grid: Vec<Vec<u8>> = vec![vec![], vec![]];
    assert_eq!(check_rectangular(&grid), Ok((0, 2)));
}

#[test]
fn ragged_grid_reports_first_bad_row() {
    let grid = vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7, 8]];
    assert_eq!(
        check_rectangular(&grid),
        Err(GridShapeError::RowShapeMismatch {
            row: 2,
            expected: 2,
            actual: 1,
        })
    );
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(
        GridShapeError::EmptyInput.to_string(),
        "grid is empty: first row is undefined"
    );
    assert_eq!(
        GridShapeError::RowShapeMismatch {
            row: 1,
            expected: 4,
            actual: 3
        }
        .to_string(),
        "row 1 length mismatch: expected 4 but got 3"
    );
}

#[test]
fn cells_are_visited_row_major() {
    let grid = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']];
    let visited: Vec<_> = iter_cell_coords(&grid).map(|(pos, c)| (pos, *c)).collect();

    assert_eq!(
        visited,
        [
            ((0, 0), 'a'),
            ((1, 0), 'b'),
            ((0, 1), 'c'),
            ((1, 1), 'd'),
            ((0, 2), 'e'),
            ((1, 2), 'f'),
        ]
    );
}

#[test]
fn iteration_skips_empty_rows() {
    let grid: Vec<Vec<u8>> = vec![vec![], vec![]];
    assert_eq!(iter_cell_coords(&grid).count(), 0);
}
