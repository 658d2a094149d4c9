#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use sheet::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod sheet;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 {
            return Err(ConfigProblem::NoRows.into());
        }
        if columns == 0 {
            return Err(ConfigProblem::NoColumns.into());
        }
        if mines >= mult(rows, columns) {
            log::warn!(
                "Rejected {} mines on a {}x{} board, only {} cells",
                mines,
                rows,
                columns,
                mult(rows, columns)
            );
            return Err(ConfigProblem::TooManyMines.into());
        }
        Ok(Self {
            rows,
            columns,
            mines,
        })
    }

    pub const fn beginner() -> Self {
        Self {
            rows: 9,
            columns: 9,
            mines: 10,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            rows: 16,
            columns: 16,
            mines: 40,
        }
    }

    pub const fn expert() -> Self {
        Self {
            rows: 16,
            columns: 30,
            mines: 99,
        }
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Immutable mine layout with the adjacency count of every cell cached at construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: BoardConfig,
    mine_mask: Array2<bool>,
    counts: Array2<u8>,
}

impl Board {
    /// Places `config.mines()` mines with a Fisher-Yates shuffle over the flattened grid.
    ///
    /// This is the only place randomness enters a game; pass a seeded `rng` for a
    /// reproducible layout.
    pub fn generate<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let total = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let mut cells: Vec<bool> = (0..total).map(|i| i < mines).collect();
        for i in (1..total).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        let mine_mask = Array2::from_shape_vec(config.size().to_nd_index(), cells)
            .expect("flat cell list always matches the board shape");
        log::debug!(
            "Generated {}x{} board with {} mines",
            config.rows(),
            config.columns(),
            config.mines()
        );
        Self::with_config(config, mine_mask)
    }

    /// Builds a board from an explicit mine mask, indexed `[row, col]`.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        let rows = Coord::try_from(rows).map_err(|_| GameError::OutOfBounds)?;
        let columns = Coord::try_from(columns).map_err(|_| GameError::OutOfBounds)?;
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        // at most 255 * 255 cells, always fits
        let config = BoardConfig::new(rows, columns, mines as CellCount)?;
        Ok(Self::with_config(config, mine_mask))
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, columns) = size;
        if rows == 0 {
            return Err(ConfigProblem::NoRows.into());
        }
        if columns == 0 {
            return Err(ConfigProblem::NoColumns.into());
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= rows || coords.1 >= columns {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    fn with_config(config: BoardConfig, mine_mask: Array2<bool>) -> Self {
        let counts = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            mine_mask
                .iter_neighbors((row as Coord, col as Coord))
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8
        });
        Self {
            config,
            mine_mask,
            counts,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Number of mines among the up to 8 neighbors of `coords`.
    ///
    /// Only meaningful for safe cells; for a mine cell it still excludes the cell itself.
    pub fn adjacency_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.counts[coords.to_nd_index()])
    }

    /// Copy of the mine layout, `true` where a mine is.
    pub fn snapshot_mines(&self) -> Array2<bool> {
        self.mine_mask.clone()
    }

    /// Copy of the cached adjacency counts.
    pub fn snapshot_counts(&self) -> Array2<u8> {
        self.counts.clone()
    }

    pub fn mine_sheet(&self) -> MineSheet<'_> {
        MineSheet::new(&self.mine_mask)
    }

    pub fn count_sheet(&self) -> CountSheet<'_> {
        CountSheet::new(&self.counts)
    }

    pub(crate) fn count_at(&self, coords: Coord2) -> u8 {
        self.counts[coords.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a single `reveal` call, including every cell the flood fill touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub revealed: Vec<Coord2>,
}

impl RevealReport {
    pub(crate) fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            revealed: Vec::new(),
        }
    }

    pub const fn exposed_mine(&self) -> bool {
        matches!(self.outcome, RevealOutcome::HitMine)
    }

    pub const fn triggered_win(&self) -> bool {
        matches!(self.outcome, RevealOutcome::Won)
    }
}
