//! Plain-text dumps of a board's hidden state, for debugging and cheating.

use core::fmt;
use ndarray::Array2;

/// Mine layout as `| X | O |` rows, `X` marking a mine.
#[derive(Copy, Clone, Debug)]
pub struct MineSheet<'a> {
    mines: &'a Array2<bool>,
}

impl<'a> MineSheet<'a> {
    pub(crate) fn new(mines: &'a Array2<bool>) -> Self {
        Self { mines }
    }
}

impl fmt::Display for MineSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.mines, |&is_mine| if is_mine { 'X' } else { 'O' })
    }
}

/// Adjacency counts as `| 0 | 1 |` rows.
#[derive(Copy, Clone, Debug)]
pub struct CountSheet<'a> {
    counts: &'a Array2<u8>,
}

impl<'a> CountSheet<'a> {
    pub(crate) fn new(counts: &'a Array2<u8>) -> Self {
        Self { counts }
    }
}

impl fmt::Display for CountSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.counts, |&count| char::from(b'0' + count))
    }
}

fn write_rows<T>(
    f: &mut fmt::Formatter<'_>,
    grid: &Array2<T>,
    symbol: impl Fn(&T) -> char,
) -> fmt::Result {
    for row in grid.rows() {
        f.write_str("|")?;
        for cell in row {
            write!(f, " {} |", symbol(cell))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
