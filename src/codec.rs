//! Compact text formats for boards and shot logs.
//!
//! A board is 100 characters, one per square in index order, drawn from
//! `W S H X` and space. A log is 3 characters per shot: column digit, row
//! digit, result character. Decoding is strict; anything else is rejected.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::{BoardContent, BoardIndex};
use crate::common::SquareContent;
use crate::config::BOARD_SQUARES;
use crate::game::ShotRecord;

const LOG_RECORD_LEN: usize = 3;

/// Malformed board or log text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Board text is not exactly 100 characters long.
    BoardLength(usize),
    /// Character outside the square alphabet.
    InvalidSquare { ch: char, position: usize },
    /// Log text length is not a multiple of 3.
    LogLength(usize),
    /// Column or row position of a log record is not a digit.
    InvalidCoordinate { ch: char, position: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BoardLength(len) => write!(
                f,
                "board content has invalid length {}, must be exactly {} chars",
                len, BOARD_SQUARES
            ),
            FormatError::InvalidSquare { ch, position } => {
                write!(f, "invalid square content {:?} at position {}", ch, position)
            }
            FormatError::LogLength(len) => write!(
                f,
                "log string has invalid length {}, must be a multiple of {}",
                len, LOG_RECORD_LEN
            ),
            FormatError::InvalidCoordinate { ch, position } => {
                write!(f, "invalid log coordinate {:?} at position {}", ch, position)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

fn decode_square(ch: char, position: usize) -> Result<SquareContent, FormatError> {
    SquareContent::from_char(ch).ok_or(FormatError::InvalidSquare { ch, position })
}

fn decode_digit(ch: char, position: usize) -> Result<usize, FormatError> {
    ch.to_digit(10)
        .map(|d| d as usize)
        .ok_or(FormatError::InvalidCoordinate { ch, position })
}

/// Encode a board as its 100-character short string.
pub fn encode_board(board: &BoardContent) -> String {
    board.iter().map(SquareContent::to_char).collect()
}

/// Decode a 100-character short string into a board.
pub fn decode_board(s: &str) -> Result<BoardContent, FormatError> {
    let len = s.chars().count();
    if len != BOARD_SQUARES {
        log::debug!("rejecting board text of length {}", len);
        return Err(FormatError::BoardLength(len));
    }

    let mut board = BoardContent::new(SquareContent::Unknown);
    for (ix, (position, ch)) in BoardIndex::all().zip(s.chars().enumerate()) {
        board[ix] = decode_square(ch, position)?;
    }
    Ok(board)
}

/// Encode a shot log, 3 characters per record.
pub fn encode_log(log: &[ShotRecord]) -> String {
    let mut out = String::with_capacity(log.len() * LOG_RECORD_LEN);
    for record in log {
        // column and row are always single digits on a 10×10 board
        out.push(char::from(b'0' + record.location.column() as u8));
        out.push(char::from(b'0' + record.location.row() as u8));
        out.push(record.result.to_char());
    }
    out
}

/// Decode a shot log. The empty string is an empty log.
pub fn decode_log(s: &str) -> Result<Vec<ShotRecord>, FormatError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % LOG_RECORD_LEN != 0 {
        log::debug!("rejecting log text of length {}", chars.len());
        return Err(FormatError::LogLength(chars.len()));
    }

    let mut log = Vec::with_capacity(chars.len() / LOG_RECORD_LEN);
    for (i, chunk) in chars.chunks_exact(LOG_RECORD_LEN).enumerate() {
        let base = i * LOG_RECORD_LEN;
        let col = decode_digit(chunk[0], base)?;
        let row = decode_digit(chunk[1], base + 1)?;
        let result = decode_square(chunk[2], base + 2)?;
        let location = BoardIndex::from_col_row(col, row)
            .map_err(|_| FormatError::InvalidCoordinate { ch: chunk[0], position: base })?;
        log.push(ShotRecord::new(location, result));
    }
    Ok(log)
}

impl BoardContent {
    /// Same as [`encode_board`].
    pub fn to_short_string(&self) -> String {
        encode_board(self)
    }

    /// Same as [`decode_board`].
    pub fn from_short_string(s: &str) -> Result<Self, FormatError> {
        decode_board(s)
    }
}
