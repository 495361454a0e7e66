use alloc::vec::Vec;
use uuid::Uuid;

use crate::{
    board::{BoardContent, BoardIndex},
    common::SquareContent,
    config::MAX_SHOTS,
};

/// One entry of a game's shot log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShotRecord {
    pub location: BoardIndex,
    pub result: SquareContent,
}

impl ShotRecord {
    pub const fn new(location: BoardIndex, result: SquareContent) -> Self {
        Self { location, result }
    }
}

/// Current state of a single-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinglePlayerGameState {
    InProgress,
    AllShipsSunken,
    /// More than [`MAX_SHOTS`] shots were taken; the game is aborted.
    TooManyShots,
}

/// A single-player Battleship game.
///
/// One shooter fires at a fixed ship board until every ship is sunk. The
/// number of shots it needs is the score of its strategy, so there is no
/// second player. The ship board is never modified after creation; the
/// shooting board records what the shooter has learned so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglePlayerGame {
    game_id: Uuid,
    player_index: i32,
    board: BoardContent,
    shooting_board: BoardContent,
    log: Vec<ShotRecord>,
}

impl SinglePlayerGame {
    /// Create a fresh game: shooting board all unknown and an empty log.
    pub fn new(game_id: Uuid, player_index: i32, board: BoardContent) -> Self {
        Self::from_parts(
            game_id,
            player_index,
            board,
            BoardContent::new(SquareContent::Unknown),
            Vec::new(),
        )
    }

    /// Restore a game from previously saved parts.
    pub fn from_parts(
        game_id: Uuid,
        player_index: i32,
        board: BoardContent,
        shooting_board: BoardContent,
        log: Vec<ShotRecord>,
    ) -> Self {
        Self {
            game_id,
            player_index,
            board,
            shooting_board,
            log,
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn player_index(&self) -> i32 {
        self.player_index
    }

    /// Board with the ships the player has to sink.
    pub fn board(&self) -> &BoardContent {
        &self.board
    }

    /// Board with the outcome of every shot so far.
    pub fn shooting_board(&self) -> &BoardContent {
        &self.shooting_board
    }

    /// Shot history, oldest first.
    pub fn log(&self) -> &[ShotRecord] {
        &self.log
    }

    pub fn number_of_shots(&self) -> usize {
        self.log.len()
    }

    /// Location of the most recent shot, if any.
    pub fn last_shot(&self) -> Option<BoardIndex> {
        self.log.last().map(|r| r.location)
    }

    /// Shoot at `ix` and return what the shooter learns.
    ///
    /// A hit turns the square into `HitShip`. When the hit completes a ship,
    /// every square of that ship becomes `SunkenShip` and so does the result.
    /// Repeated shots are allowed and are evaluated against the ship board.
    pub fn shoot(&mut self, ix: BoardIndex) -> SquareContent {
        let mut content = self.board[ix];
        self.shooting_board[ix] = content;
        if content == SquareContent::Ship {
            content = SquareContent::HitShip;
            self.shooting_board[ix] = content;

            let ship = self.board.find_ship(ix);
            if ship.is_complete()
                && ship
                    .squares
                    .iter()
                    .all(|&s| self.shooting_board[s] == SquareContent::HitShip)
            {
                content = SquareContent::SunkenShip;
                for &s in &ship.squares {
                    self.shooting_board[s] = SquareContent::SunkenShip;
                }
                log::debug!(
                    "game {}: ship of length {} sunk at {}",
                    self.game_id,
                    ship.len(),
                    ix
                );
            }
        }

        self.log.push(ShotRecord::new(ix, content));
        log::trace!("game {}: shot #{} at {} -> {:?}", self.game_id, self.log.len(), ix, content);
        content
    }

    /// Evaluate the game against the expected fleet `ships`.
    ///
    /// The shot cap is checked first: a game with more than [`MAX_SHOTS`]
    /// shots is `TooManyShots` even if the last shot sank the last ship.
    pub fn game_state(&self, ships: &[usize]) -> SinglePlayerGameState {
        if self.number_of_shots() > MAX_SHOTS {
            SinglePlayerGameState::TooManyShots
        } else if self.shooting_board.has_lost(ships) {
            SinglePlayerGameState::AllShipsSunken
        } else {
            SinglePlayerGameState::InProgress
        }
    }
}
