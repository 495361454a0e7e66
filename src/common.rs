//! Common types for the engine: square contents and board errors.

/// Content of a single square, on the ship board or on the shooting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SquareContent {
    /// Not yet shot at (shooting board only).
    #[default]
    Unknown,
    Water,
    Ship,
    /// Ship segment that has been hit but whose ship is still afloat.
    HitShip,
    /// Segment of a ship whose squares have all been hit.
    SunkenShip,
}

impl SquareContent {
    /// Character used by the compact text formats.
    pub const fn to_char(self) -> char {
        match self {
            SquareContent::Water => 'W',
            SquareContent::Ship => 'S',
            SquareContent::HitShip => 'H',
            SquareContent::SunkenShip => 'X',
            SquareContent::Unknown => ' ',
        }
    }

    /// Inverse of [`SquareContent::to_char`]; `None` for foreign characters.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'W' => Some(SquareContent::Water),
            'S' => Some(SquareContent::Ship),
            'H' => Some(SquareContent::HitShip),
            'X' => Some(SquareContent::SunkenShip),
            ' ' => Some(SquareContent::Unknown),
            _ => None,
        }
    }

    /// `true` for any square that belongs to a ship, hit or not.
    pub const fn is_ship(self) -> bool {
        matches!(
            self,
            SquareContent::Ship | SquareContent::HitShip | SquareContent::SunkenShip
        )
    }
}

/// Errors returned by board addressing and ship placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Linear index or (column, row) pair is outside the 10×10 grid.
    InvalidIndex,
    /// Square label is not in the `A1`..`J10` form.
    InvalidLabel,
    /// Filler could not find room for a ship.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::InvalidLabel => write!(f, "Invalid square label, expected A1..J10"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
