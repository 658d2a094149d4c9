use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One play session over a [`Board`], tracking which cells the player has seen.
///
/// `rng` is only used to draw the next board on [`Game::restart`].
#[derive(Clone, Debug)]
pub struct Game<R = SmallRng> {
    rng: R,
    board: Board,
    cells: Array2<CellState>,
    revealed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Game<SmallRng> {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: BoardConfig, mut rng: R) -> Self {
        let board = Board::generate(config, &mut rng);
        Self::from_board(board, rng)
    }

    /// Starts a session on a prepared board; `rng` still drives later restarts.
    pub fn from_board(board: Board, rng: R) -> Self {
        let cells = Array2::default(board.size().to_nd_index());
        Self {
            rng,
            board,
            cells,
            revealed_count: 0,
            status: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    /// Throws away the current board and session, dealing a fresh layout.
    pub fn restart(&mut self, config: BoardConfig) {
        let board = Board::generate(config, &mut self.rng);
        self.replace_board(board);
    }

    /// Like [`Game::restart`] but with a board built elsewhere.
    pub fn replace_board(&mut self, board: Board) {
        log::debug!(
            "New game {}x{} with {} mines",
            board.size().0,
            board.size().1,
            board.mine_count()
        );
        self.cells = Array2::default(board.size().to_nd_index());
        self.board = board;
        self.revealed_count = 0;
        self.status = GameStatus::InProgress;
        self.triggered_mine = None;
    }
}

impl<R> Game<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> BoardConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        self.cell_at(coords).map(CellState::is_revealed)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        self.board.is_mine(coords)
    }

    pub fn adjacency_count(&self, coords: Coord2) -> Result<u8> {
        self.board.adjacency_count(coords)
    }

    /// Opens `coords`, flood filling through zero-count cells.
    ///
    /// Already revealed cells are left untouched and report `NoChange`, even on a
    /// finished game. Opening a hidden cell after the game ended is an error.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.board.validate_coords(coords)?;

        if self.cells[coords.to_nd_index()].is_revealed() {
            return Ok(RevealReport::unchanged());
        }
        if self.status.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        if self.board[coords] {
            self.open(coords);
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            log::debug!("Hit mine at {:?}", coords);
            return Ok(RevealReport {
                outcome: RevealOutcome::HitMine,
                revealed: Vec::from([coords]),
            });
        }

        let revealed = self.flood_open(coords);
        log::trace!("Reveal at {:?} opened {} cells", coords, revealed.len());

        let outcome = if self.revealed_count == self.board.safe_cell_count() {
            self.status = GameStatus::Won;
            log::debug!("All {} safe cells open, game won", self.revealed_count);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        Ok(RevealReport { outcome, revealed })
    }

    /// Opens every still hidden cell after a loss, returning them in row-major order.
    pub fn loss_sweep(&mut self) -> Result<Vec<Coord2>> {
        if self.status != GameStatus::Lost {
            return Err(GameError::NotLost);
        }

        let (rows, columns) = self.size();
        let mut swept = Vec::new();
        for row in 0..rows {
            for col in 0..columns {
                if !self.cells[(row, col).to_nd_index()].is_revealed() {
                    self.open((row, col));
                    swept.push((row, col));
                }
            }
        }
        Ok(swept)
    }

    /// Opens a safe cell and, when it has no adjacent mines, everything
    /// reachable from it through other zero-count cells.
    fn flood_open(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            // the cell state matrix is the visited set
            if self.cells[coords.to_nd_index()].is_revealed() || self.board[coords] {
                continue;
            }

            self.open(coords);
            revealed.push(coords);

            if self.board.count_at(coords) == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.cells[pos.to_nd_index()].is_revealed()),
                );
            }
        }

        revealed
    }

    fn open(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()] = if self.board[coords] {
            CellState::Mine
        } else {
            CellState::Open(self.board.count_at(coords))
        };
        self.revealed_count += 1;
    }
}
