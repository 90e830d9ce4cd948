/// Walks a grid in row-major order (z outer, x inner), yielding each cell
/// with its `(x, z)` coordinates.
pub struct CellCoordIter<'a, T> {
    rows: std::iter::Enumerate<std::slice::Iter<'a, Vec<T>>>,
    current: Option<(usize, std::iter::Enumerate<std::slice::Iter<'a, T>>)>,
}

impl<'a, T> CellCoordIter<'a, T> {
    pub fn new(grid: &'a [Vec<T>]) -> Self {
        Self {
            rows: grid.iter().enumerate(),
            current: None,
        }
    }
}

impl<'a, T> Iterator for CellCoordIter<'a, T> {
    type Item = ((usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((z, ref mut cells)) = self.current {
                if let Some((x, cell)) = cells.next() {
                    return Some(((x, z), cell));
                }
            }
            let (z, row) = self.rows.next()?;
            self.current = Some((z, row.iter().enumerate()));
        }
    }
}

pub fn iter_cell_coords<T>(grid: &[Vec<T>]) -> CellCoordIter<'_, T> {
    CellCoordIter::new(grid)
}
