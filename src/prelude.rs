//! Commonly used types and utilities for ease of import.

pub use crate::{
    analyze, BoardContent, BoardIndex, RandomBoardFiller, RandomShooter, Shooter,
    SinglePlayerGame, SinglePlayerGameFactory, SinglePlayerGameState, SquareContent, SHIPS,
};

#[cfg(feature = "std")]
pub use crate::json::{from_json, to_json};
