use crate::game::{Game, GameStatus};
use rand::rngs::SmallRng;

/// Interface implemented by different move sources. A single player object
/// may answer for both sides of the board, as a hot-seat terminal does.
pub trait Player {
    /// Choose a zero-based column for the player on move, or `None` to
    /// forfeit the turn.
    fn select_column(&mut self, rng: &mut SmallRng, game: &Game) -> anyhow::Result<Option<usize>>;

    /// Inform the player that the game has ended.
    fn handle_game_over(&mut self, _game: &Game) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Drive `game` to completion: ask for a column, apply it, repeat.
pub fn play_game(game: &mut Game, player: &mut dyn Player, rng: &mut SmallRng) -> anyhow::Result<GameStatus> {
    while !game.is_over() {
        match player.select_column(rng, game)? {
            Some(col) => {
                game.play(col).map_err(|e| anyhow::anyhow!(e))?;
            }
            None => game.skip_turn().map_err(|e| anyhow::anyhow!(e))?,
        }
    }
    player.handle_game_over(game)?;
    Ok(game.status())
}
