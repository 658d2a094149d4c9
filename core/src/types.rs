use ndarray::Array2;

/// Single coordinate axis, used for row/column positions and board dimensions.
pub type Coord = u8;

/// Count type used for mine counts, revealed counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Shape of an `Array2` as `(rows, columns)`.
pub(crate) fn dim_of<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, columns) = grid.dim();
    // boards are only ever built from `Coord` sized dimensions
    (rows as Coord, columns as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        NeighborIter::new(center, dim_of(self))
    }
}

/// Row/column offsets of the 8 surrounding cells, row-major.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the in-bounds neighbors of a cell, never yielding the cell itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    next_offset: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next_offset: 0,
        }
    }

    fn shifted(&self, (d_row, d_col): (i8, i8)) -> Option<Coord2> {
        let (row, col) = self.center;
        let (rows, columns) = self.bounds;

        let row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
        let col = col.checked_add_signed(d_col).filter(|&c| c < columns)?;
        Some((row, col))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next_offset) {
            self.next_offset += 1;
            if let Some(pos) = self.shifted(offset) {
                return Some(pos);
            }
        }
        None
    }
}
