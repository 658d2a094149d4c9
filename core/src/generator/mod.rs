use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board>;
}

/// Replays a known layout, ignoring the requested mine count but not its size.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedBoardGenerator<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl BoardGenerator for FixedBoardGenerator<'_> {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        Board::from_mine_coords(config.size(), self.mines)
    }
}
