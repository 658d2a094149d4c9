use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random layout drawn from a seeded generator; the same seed and
/// config always produce the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Ok(Board::generate(config, &mut rng))
    }
}
