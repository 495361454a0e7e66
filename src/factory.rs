use rand::Rng;
use uuid::{Builder, Uuid};

use crate::board::BoardContent;
use crate::common::{BoardError, SquareContent};
use crate::config::SHIPS;
use crate::filler::BoardFiller;
use crate::game::SinglePlayerGame;

/// Creates new games with the standard fleet placed by a [`BoardFiller`].
pub struct SinglePlayerGameFactory<F: BoardFiller, R: Rng> {
    filler: F,
    rng: R,
}

impl<F: BoardFiller, R: Rng> SinglePlayerGameFactory<F, R> {
    /// `rng` is used for game ids only; placement randomness belongs to the filler.
    pub fn new(filler: F, rng: R) -> Self {
        Self { filler, rng }
    }

    pub fn filler(&self) -> &F {
        &self.filler
    }

    /// Create a game for `player_index` with freshly placed ships.
    pub fn create(&mut self, player_index: i32) -> Result<SinglePlayerGame, BoardError> {
        let mut board = BoardContent::new(SquareContent::Water);
        self.filler.fill(&SHIPS, &mut board)?;

        let game_id: Uuid = Builder::from_random_bytes(self.rng.random()).into_uuid();
        log::info!("created game {} for player {}", game_id, player_index);
        Ok(SinglePlayerGame::new(game_id, player_index, board))
    }
}
