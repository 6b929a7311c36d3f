use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::{Board, BoardState},
    common::{BoardError, Cell, GameError, PlayerId},
    config::BoardSize,
    win::{winning_axis, Axis},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// A piece landed at `(row, col)`.
    Placed { player: PlayerId, row: usize, col: usize },
    /// The player forfeited the turn.
    Skipped { player: PlayerId },
}

impl Turn {
    pub fn player(&self) -> PlayerId {
        match *self {
            Turn::Placed { player, .. } | Turn::Skipped { player } => player,
        }
    }
}

/// What happened on a successful [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub row: usize,
    pub col: usize,
    /// Set when the move completed four in a row.
    pub axis: Option<Axis>,
    pub status: GameStatus,
}

/// Serializable overall game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub names: [String; 2],
    pub current: PlayerId,
    pub history: Vec<Turn>,
    pub status: GameStatus,
}

/// One game session: board, players, whose turn it is and what has happened.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    names: [String; 2],
    current: PlayerId,
    move_count: usize,
    history: Vec<Turn>,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game; player one moves first.
    pub fn new(size: BoardSize, names: [String; 2]) -> Self {
        Self {
            board: Board::new(size),
            names,
            current: PlayerId::One,
            move_count: 0,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> BoardSize {
        self.board.board_size()
    }

    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Pieces placed so far; skipped turns do not count.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Drop the current player's piece into `col` (zero-based).
    ///
    /// A winning move ends the game even when it also fills the board; a
    /// non-winning move that fills the board is a draw. The turn passes to the
    /// other player only while the game continues.
    pub fn play(&mut self, col: usize) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current;
        let (row, col) = self.board.drop_piece(col, player)?;
        self.move_count += 1;
        self.history.push(Turn::Placed { player, row, col });
        log::debug!("{} dropped into column {} -> ({}, {})", player, col + 1, row, col);

        let axis = winning_axis(&self.board, (row, col), player);
        self.status = match axis {
            Some(axis) => {
                log::info!("{} wins along {:?} after {} moves", player, axis, self.move_count);
                GameStatus::Won(player)
            }
            None if self.move_count == self.size().cells() => {
                log::info!("board full after {} moves, draw", self.move_count);
                GameStatus::Draw
            }
            None => {
                self.current = player.other();
                GameStatus::InProgress
            }
        };

        Ok(MoveOutcome {
            player,
            row,
            col,
            axis,
            status: self.status,
        })
    }

    /// Forfeit the current player's turn.
    pub fn skip_turn(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current;
        log::warn!("{} forfeits the turn", player);
        self.history.push(Turn::Skipped { player });
        self.current = player.other();
        Ok(())
    }

    /// Clear the board and history, keeping size and names. Player one moves first again.
    pub fn restart(&mut self) {
        log::debug!("restarting {} game", self.size());
        self.board.clear();
        self.current = PlayerId::One;
        self.move_count = 0;
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Rebuild a game by applying a recorded history in order.
    pub fn replay(size: BoardSize, names: [String; 2], history: &[Turn]) -> Result<Self, GameError> {
        let mut game = Game::new(size, names);
        for turn in history {
            if turn.player() != game.current {
                return Err(GameError::OutOfTurn {
                    expected: game.current,
                    found: turn.player(),
                });
            }
            match *turn {
                Turn::Placed { row, col, .. } => {
                    let outcome = game.play(col)?;
                    if outcome.row != row {
                        return Err(BoardError::InconsistentState.into());
                    }
                }
                Turn::Skipped { .. } => game.skip_turn()?,
            }
        }
        Ok(game)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            names: self.names.clone(),
            current: self.current,
            history: self.history.clone(),
            status: self.status,
        }
    }

    /// Restore a game from a snapshot, replaying its history and checking the
    /// result against the recorded board.
    pub fn from_state(state: GameState) -> Result<Self, GameError> {
        let game = Game::replay(state.board.size, state.names, &state.history)?;
        if BoardState::from(&game.board) != state.board || game.status != state.status || game.current != state.current {
            return Err(BoardError::InconsistentState.into());
        }
        Ok(game)
    }

    /// Owner of the cell at `(row, col)`, if any.
    pub fn owner(&self, row: usize, col: usize) -> Option<PlayerId> {
        match self.board.get(row, col) {
            Ok(Cell::Player(p)) => Some(p),
            _ => None,
        }
    }
}
