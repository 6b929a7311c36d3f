//! Commonly used types and utilities for ease of import.

pub use crate::{check_win, play_game, BoardSize, Game, GameStatus, Player, PlayerId, RandomPlayer};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
