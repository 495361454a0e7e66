//! Ship contiguity: finding the run of squares that forms one ship.
//!
//! Ship identity is never stored on a board. A ship is recovered from a hit
//! square by walking the adjacent ship-like squares in a straight line.

use alloc::vec::Vec;

use crate::board::{BoardContent, BoardIndex};
use crate::common::SquareContent;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Column and row step along the ship.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Outcome of [`find_ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipFindingResult {
    /// Straight run enclosed by water or the board edge.
    CompleteShip,
    /// Straight run with at least one unknown neighbour; it may continue.
    Incomplete,
    /// Start square is not a ship, or the run touches other ship squares.
    NotAShip,
}

/// A run of ship squares in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRun {
    pub status: ShipFindingResult,
    pub orientation: Orientation,
    pub squares: Vec<BoardIndex>,
}

impl ShipRun {
    fn not_a_ship() -> Self {
        ShipRun {
            status: ShipFindingResult::NotAShip,
            orientation: Orientation::Horizontal,
            squares: Vec::new(),
        }
    }

    /// `true` when the run is a whole, well-formed ship.
    pub fn is_complete(&self) -> bool {
        self.status == ShipFindingResult::CompleteShip
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

fn is_ship_at(board: &BoardContent, ix: Option<BoardIndex>) -> bool {
    ix.is_some_and(|ix| board[ix].is_ship())
}

/// Collects the ship-like squares through `ix` along `orientation`.
fn run_along(board: &BoardContent, ix: BoardIndex, orientation: Orientation) -> Vec<BoardIndex> {
    let (dc, dr) = orientation.step();
    let mut start = ix;
    while let Some(prev) = start.offset(-dc, -dr).filter(|&p| board[p].is_ship()) {
        start = prev;
    }
    let mut squares = Vec::new();
    let mut cur = Some(start);
    while let Some(c) = cur.filter(|&c| board[c].is_ship()) {
        squares.push(c);
        cur = c.offset(dc, dr);
    }
    squares
}

/// Find the ship containing `ix` on `board`.
pub fn find_ship(board: &BoardContent, ix: BoardIndex) -> ShipRun {
    if !board[ix].is_ship() {
        return ShipRun::not_a_ship();
    }

    let mut orientation = Orientation::Horizontal;
    let mut squares = run_along(board, ix, orientation);
    let vertical_neighbour =
        is_ship_at(board, ix.offset(0, -1)) || is_ship_at(board, ix.offset(0, 1));
    if squares.len() == 1 && vertical_neighbour {
        orientation = Orientation::Vertical;
        squares = run_along(board, ix, orientation);
    }

    let mut status = ShipFindingResult::CompleteShip;
    for &sq in &squares {
        for (dc, dr) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let Some(n) = sq.offset(dc, dr) else { continue };
            if squares.contains(&n) {
                continue;
            }
            match board[n] {
                c if c.is_ship() => return ShipRun::not_a_ship(),
                SquareContent::Unknown => status = ShipFindingResult::Incomplete,
                _ => {}
            }
        }
    }

    ShipRun {
        status,
        orientation,
        squares,
    }
}
