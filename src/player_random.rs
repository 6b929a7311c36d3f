use alloc::vec::Vec;

use crate::{game::Game, player::Player};
use rand::{rngs::SmallRng, Rng};

/// Plays a uniformly random legal column for whichever side is on move.
/// Used to drive simulated playouts.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<Option<usize>> {
        let legal: Vec<usize> = game.board().legal_columns().collect();
        if legal.is_empty() {
            return Ok(None);
        }
        Ok(Some(legal[rng.random_range(0..legal.len())]))
    }
}
