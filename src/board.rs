//! Board addressing and the flat 10×10 square array used for both the ship
//! board and the shooting board.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::common::{BoardError, SquareContent};
use crate::config::{BOARD_SIZE, BOARD_SQUARES};
use crate::ship::{self, ShipRun};

const SIZE: usize = BOARD_SIZE as usize;

/// Linear position of a square, always in `0..100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardIndex(u8);

impl BoardIndex {
    /// Checked constructor from a linear index.
    pub fn new(index: usize) -> Result<Self, BoardError> {
        if index >= BOARD_SQUARES {
            return Err(BoardError::InvalidIndex);
        }
        Ok(BoardIndex(index as u8))
    }

    /// Checked constructor from zero-based column and row.
    pub fn from_col_row(col: usize, row: usize) -> Result<Self, BoardError> {
        if col >= SIZE || row >= SIZE {
            return Err(BoardError::InvalidIndex);
        }
        Ok(BoardIndex((row * SIZE + col) as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn column(self) -> usize {
        self.index() % SIZE
    }

    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    /// All indices in row-major order.
    pub fn all() -> impl Iterator<Item = BoardIndex> {
        (0..BOARD_SQUARES as u8).map(BoardIndex)
    }

    /// Neighbour offset by `(dc, dr)`, or `None` when it leaves the grid.
    pub fn offset(self, dc: isize, dr: isize) -> Option<BoardIndex> {
        let col = self.column() as isize + dc;
        let row = self.row() as isize + dr;
        if col < 0 || row < 0 {
            return None;
        }
        BoardIndex::from_col_row(col as usize, row as usize).ok()
    }
}

impl TryFrom<usize> for BoardIndex {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        BoardIndex::new(index)
    }
}

impl From<BoardIndex> for usize {
    fn from(ix: BoardIndex) -> usize {
        ix.index()
    }
}

/// Parses labels such as `A1` or `j10`.
impl FromStr for BoardIndex {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(BoardError::InvalidLabel)?;
        let col = match letter.to_ascii_uppercase() {
            c @ 'A'..='J' => c as usize - 'A' as usize,
            _ => return Err(BoardError::InvalidLabel),
        };
        let row = match chars.as_str() {
            "10" => 10,
            r @ ("1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
                r.as_bytes()[0] as usize - b'0' as usize
            }
            _ => return Err(BoardError::InvalidLabel),
        };
        BoardIndex::from_col_row(col, row - 1)
    }
}

impl fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.column() as u8) as char;
        write!(f, "{}{}", letter, self.row() + 1)
    }
}

/// Content of all 100 squares of a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardContent {
    squares: [SquareContent; BOARD_SQUARES],
}

impl BoardContent {
    /// Board with every square set to `fill`.
    pub fn new(fill: SquareContent) -> Self {
        BoardContent {
            squares: [fill; BOARD_SQUARES],
        }
    }

    pub fn get(&self, ix: BoardIndex) -> SquareContent {
        self.squares[ix.index()]
    }

    pub fn set(&mut self, ix: BoardIndex, content: SquareContent) {
        self.squares[ix.index()] = content;
    }

    /// Squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = SquareContent> + '_ {
        self.squares.iter().copied()
    }

    /// Number of squares holding exactly `content`.
    pub fn count(&self, content: SquareContent) -> usize {
        self.squares.iter().filter(|&&s| s == content).count()
    }

    /// `true` once every segment of the given fleet has been hit.
    pub fn has_lost(&self, ships: &[usize]) -> bool {
        let hit = self
            .squares
            .iter()
            .filter(|s| matches!(s, SquareContent::HitShip | SquareContent::SunkenShip))
            .count();
        hit == ships.iter().sum::<usize>()
    }

    /// Contiguous ship run through `ix`.
    pub fn find_ship(&self, ix: BoardIndex) -> ShipRun {
        ship::find_ship(self, ix)
    }
}

impl Default for BoardContent {
    fn default() -> Self {
        BoardContent::new(SquareContent::Unknown)
    }
}

impl Index<BoardIndex> for BoardContent {
    type Output = SquareContent;

    fn index(&self, ix: BoardIndex) -> &SquareContent {
        &self.squares[ix.index()]
    }
}

impl IndexMut<BoardIndex> for BoardContent {
    fn index_mut(&mut self, ix: BoardIndex) -> &mut SquareContent {
        &mut self.squares[ix.index()]
    }
}

impl fmt::Debug for BoardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardContent(\"")?;
        for s in self.iter() {
            write!(f, "{}", s.to_char())?;
        }
        write!(f, "\")")
    }
}

/// Grid rendering with column letters and row numbers.
impl fmt::Display for BoardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..SIZE {
            write!(f, "{} ", (b'A' + c as u8) as char)?;
        }
        for r in 0..SIZE {
            writeln!(f)?;
            write!(f, "{:>2} ", r + 1)?;
            for c in 0..SIZE {
                let ch = match self.squares[r * SIZE + c] {
                    SquareContent::Unknown => '.',
                    other => other.to_char(),
                };
                write!(f, "{} ", ch)?;
            }
        }
        Ok(())
    }
}
