//! Ship placement onto an empty board.

use rand::Rng;

use crate::board::{BoardContent, BoardIndex};
use crate::common::{BoardError, SquareContent};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Attempts per ship before a random placement gives up.
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// A board that ships can be placed on.
pub trait FillableBoard {
    /// Place a ship of `length` starting at `start`. Returns `false` and
    /// leaves the board untouched if the ship would leave the grid, overlap
    /// another ship or touch one.
    fn try_place_ship(&mut self, start: BoardIndex, length: usize, orientation: Orientation) -> bool;
}

/// Strategy that places a fleet of ships.
pub trait BoardFiller {
    /// Place one ship for every entry of `ships` (the ship lengths).
    fn fill(&mut self, ships: &[usize], board: &mut dyn FillableBoard) -> Result<(), BoardError>;
}

impl FillableBoard for BoardContent {
    fn try_place_ship(&mut self, start: BoardIndex, length: usize, orientation: Orientation) -> bool {
        if length == 0 || length > BOARD_SIZE as usize {
            return false;
        }
        let (dc, dr) = orientation.step();
        let end = start.offset(dc * (length as isize - 1), dr * (length as isize - 1));
        if end.is_none() {
            return false;
        }

        let cells = (0..length as isize).filter_map(|k| start.offset(dc * k, dr * k));
        for cell in cells.clone() {
            for (nc, nr) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
                if cell.offset(nc, nr).is_some_and(|n| self[n].is_ship()) {
                    return false;
                }
            }
        }
        for cell in cells {
            self[cell] = SquareContent::Ship;
        }
        true
    }
}

/// Places ships at random positions and orientations.
pub struct RandomBoardFiller<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBoardFiller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardFiller for RandomBoardFiller<R> {
    fn fill(&mut self, ships: &[usize], board: &mut dyn FillableBoard) -> Result<(), BoardError> {
        let size = BOARD_SIZE as usize;
        // longest first, while the board is still empty
        let mut lengths = ships.to_vec();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        for length in lengths {
            if length == 0 || length > size {
                return Err(BoardError::UnableToPlaceShip);
            }
            let mut attempts = 0;
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    log::warn!("gave up placing ship of length {}", length);
                    return Err(BoardError::UnableToPlaceShip);
                }
                let orientation = if self.rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_c, max_r) = match orientation {
                    Orientation::Horizontal => (size - length, size - 1),
                    Orientation::Vertical => (size - 1, size - length),
                };
                let c = self.rng.random_range(0..=max_c);
                let r = self.rng.random_range(0..=max_r);
                let start = BoardIndex::from_col_row(c, r)?;
                if board.try_place_ship(start, length, orientation) {
                    break;
                }
            }
        }
        Ok(())
    }
}
