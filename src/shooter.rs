use alloc::vec::Vec;
use rand::Rng;

use crate::board::{BoardContent, BoardIndex};
use crate::common::SquareContent;

/// A shooting strategy under benchmark.
pub trait Shooter {
    /// Choose the next square given everything learned so far.
    fn next_shot(&mut self, shooting_board: &BoardContent, last_shot: Option<BoardIndex>) -> BoardIndex;
}

/// Baseline strategy: a uniformly random square that has not been shot yet.
pub struct RandomShooter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomShooter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shooter for RandomShooter<R> {
    fn next_shot(&mut self, shooting_board: &BoardContent, _last_shot: Option<BoardIndex>) -> BoardIndex {
        let mut open: Vec<BoardIndex> = BoardIndex::all()
            .filter(|&ix| shooting_board[ix] == SquareContent::Unknown)
            .collect();
        if open.is_empty() {
            open = BoardIndex::all().collect();
        }
        open[self.rng.random_range(0..open.len())]
    }
}
