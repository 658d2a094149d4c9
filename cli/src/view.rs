use std::fmt;

use minesweep_core::{CellState, Coord2, Game};

/// Text rendering of the player-visible board with row and column headers.
pub struct BoardView<'a, R> {
    game: &'a Game<R>,
}

impl<'a, R> BoardView<'a, R> {
    pub fn new(game: &'a Game<R>) -> Self {
        Self { game }
    }

    fn symbol(&self, coords: Coord2) -> char {
        match self.game.cell_at(coords) {
            Ok(CellState::Hidden) | Err(_) => '#',
            Ok(CellState::Open(0)) => '.',
            Ok(CellState::Open(count)) => char::from(b'0' + count),
            Ok(CellState::Mine) if self.game.triggered_mine() == Some(coords) => 'X',
            Ok(CellState::Mine) => '*',
        }
    }
}

impl<R> fmt::Display for BoardView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.game.size();

        write!(f, "    ")?;
        for col in 0..columns {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{row:>3} ")?;
            for col in 0..columns {
                write!(f, "{:>3}", self.symbol((row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::Board;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        let board = Board::from_mine_coords(size, mines).unwrap();
        Game::from_board(board, SmallRng::seed_from_u64(0))
    }

    #[test]
    fn hidden_board() {
        let game = game((2, 3), &[(0, 0)]);
        assert_eq!(
            BoardView::new(&game).to_string(),
            "      0  1  2\n  0   #  #  #\n  1   #  #  #\n"
        );
    }

    #[test]
    fn shows_counts_and_mines_after_loss() {
        let mut game = game((2, 3), &[(0, 0), (1, 2)]);
        game.reveal((1, 2)).unwrap();
        game.loss_sweep().unwrap();
        assert_eq!(
            BoardView::new(&game).to_string(),
            "      0  1  2\n  0   *  2  1\n  1   1  2  X\n"
        );
    }

    #[test]
    fn zero_cells_render_as_dots() {
        let mut game = game((1, 4), &[(0, 3)]);
        game.reveal((0, 0)).unwrap();
        assert_eq!(
            BoardView::new(&game).to_string(),
            "      0  1  2  3\n  0   .  .  1  #\n"
        );
    }
}
