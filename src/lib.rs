#![cfg_attr(not(feature = "std"), no_std)]
//! Single-player Battleship for benchmarking shooting strategies.
//!
//! A [`SinglePlayerGame`] holds a ship board, the shooter's knowledge of it
//! and the log of every shot. The [`codec`] module turns boards and logs into
//! compact strings; with the `std` feature the [`json`] module persists whole
//! games.

extern crate alloc;

mod board;
pub mod codec;
mod common;
mod config;
mod factory;
mod filler;
mod game;
#[cfg(feature = "std")]
pub mod json;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
mod shooter;
mod statistics;

pub use board::*;
pub use codec::FormatError;
pub use common::*;
pub use config::*;
pub use factory::*;
pub use filler::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
pub use shooter::*;
pub use statistics::*;
