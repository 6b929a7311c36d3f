#![cfg(feature = "std")]

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::PlayerId,
    config::{BoardSize, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_RETRIES, MIN_BOARD_SIZE},
    game::{Game, GameStatus, Turn},
    player::Player,
};

const PIECE: &str = "\u{2B24}";

/// Erase the display and home the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Hot-seat terminal player: both humans share one keyboard and screen.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    color: bool,
    clear_screen: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and drawing to stdout. The screen is
    /// cleared before each board only when stdout is a terminal.
    pub fn stdio(color: bool) -> Self {
        let clear = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout(), color).with_clear_screen(clear)
    }
}

/// Parse a board size entry such as `"7"`.
pub fn parse_board_size(input: &str) -> Result<BoardSize, String> {
    let size: u8 = input.parse().map_err(|_| {
        format!(
            "'{}' is not a number - allowed values are {}-{}",
            input, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        )
    })?;
    BoardSize::new(size).map_err(|e| e.to_string())
}

/// Parse a one-based column entry and check that it can take a piece.
/// Returns the zero-based column.
pub fn parse_column(input: &str, board: &Board) -> Result<usize, String> {
    let size = board.board_size().get();
    if input.is_empty() {
        return Err(format!("Empty input - enter a column 1-{}", size));
    }
    let col: usize = input
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", input, size))?;
    if col == 0 || col > size {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, size));
    }
    board.landing_row(col - 1).map_err(|e| e.to_string())?;
    Ok(col - 1)
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
            clear_screen: false,
        }
    }

    /// Redraw each board on a cleared screen instead of appending it.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed line, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn paint_name(&self, game: &Game, player: PlayerId) -> String {
        let name = game.name(player);
        if !self.color {
            return name.to_string();
        }
        match player {
            PlayerId::One => name.red().bold().to_string(),
            PlayerId::Two => name.yellow().bold().to_string(),
        }
    }

    fn paint_cell(&self, owner: Option<PlayerId>) -> String {
        match (self.color, owner) {
            (true, Some(PlayerId::One)) => PIECE.red().to_string(),
            (true, Some(PlayerId::Two)) => PIECE.yellow().to_string(),
            (true, None) => PIECE.bright_black().to_string(),
            (false, Some(PlayerId::One)) => "X".to_string(),
            (false, Some(PlayerId::Two)) => "O".to_string(),
            (false, None) => ".".to_string(),
        }
    }

    /// Ask for the board size. Every invalid entry costs a try; after
    /// `MAX_RETRIES` retries, or when input runs out, the default size is used.
    pub fn prompt_board_size(&mut self) -> anyhow::Result<BoardSize> {
        let mut retries = MAX_RETRIES;
        loop {
            writeln!(
                self.output,
                "Enter the board size [{} - {}]:",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output, "No input. Board size defaulted to {}!", DEFAULT_BOARD_SIZE)?;
                return Ok(BoardSize::DEFAULT);
            };
            match parse_board_size(&line) {
                Ok(size) => return Ok(size),
                Err(e) => {
                    writeln!(self.output, "✗ {}", e)?;
                    if retries == 0 {
                        log::warn!("board size prompt exhausted, using {}", DEFAULT_BOARD_SIZE);
                        writeln!(
                            self.output,
                            "Too many wrong entries. Board size defaulted to {}!",
                            DEFAULT_BOARD_SIZE
                        )?;
                        return Ok(BoardSize::DEFAULT);
                    }
                    retries -= 1;
                    writeln!(
                        self.output,
                        "You have {} tries left. Failing which board size is defaulted to {}",
                        retries, DEFAULT_BOARD_SIZE
                    )?;
                }
            }
        }
    }

    /// Ask both players for their names; blank entries fall back to `Player N`.
    pub fn prompt_names(&mut self) -> anyhow::Result<[String; 2]> {
        let mut names = [String::new(), String::new()];
        for (player, slot) in [PlayerId::One, PlayerId::Two].into_iter().zip(names.iter_mut()) {
            writeln!(self.output, "{} - Enter your name:", player)?;
            self.output.flush()?;
            *slot = match self.read_line()? {
                Some(name) if !name.is_empty() => name,
                _ => player.to_string(),
            };
        }
        Ok(names)
    }

    /// Warn about the skipped-turn penalty before the first move.
    pub fn print_rules(&mut self, size: BoardSize) -> io::Result<()> {
        let attention = "ATTENTION!!!";
        let skipped = "WILL BE SKIPPED!";
        if self.color {
            writeln!(self.output, "\n{}", attention.yellow().bold())?;
        } else {
            writeln!(self.output, "\n{}", attention)?;
        }
        writeln!(
            self.output,
            "While making a move be careful to enter only valid values!\n\
             Providing an incorrect value more than {} times serves as a penalty and your turn {}",
            MAX_RETRIES,
            if self.color { skipped.red().bold().to_string() } else { skipped.to_string() }
        )?;
        writeln!(
            self.output,
            "In this instance your board size is {} and so the acceptable values are ONLY 1-{}\n",
            size.get(),
            size.get()
        )
    }

    /// Ask the player on move for a column. Every invalid entry costs a
    /// chance; once `MAX_RETRIES` retries are used up the turn is forfeited.
    pub fn prompt_column(&mut self, game: &Game) -> anyhow::Result<Option<usize>> {
        let player = game.current_player();
        let name = self.paint_name(game, player);
        let size = game.size().get();
        let mut retries = MAX_RETRIES;
        loop {
            write!(self.output, "{}'s move [1-{}]: ", name, size)?;
            self.output.flush()?;
            let line = self
                .read_line()?
                .ok_or_else(|| anyhow::anyhow!("input closed while waiting for {}'s move", game.name(player)))?;
            match parse_column(&line, game.board()) {
                Ok(col) => return Ok(Some(col)),
                Err(e) => {
                    writeln!(self.output, "✗ {}", e)?;
                    if retries == 0 {
                        writeln!(self.output, "Too many invalid entries. {}'s turn is skipped!", name)?;
                        return Ok(None);
                    }
                    retries -= 1;
                    writeln!(self.output, "You have {} chances left", retries)?;
                }
            }
        }
    }

    /// Draw the grid with column numbers underneath.
    pub fn render_board(&mut self, game: &Game) -> io::Result<()> {
        let size = game.size().get();
        // the opening board stays under the rules banner
        if self.clear_screen && !game.history().is_empty() {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.output, "\n")?;
        for row in 0..size {
            write!(self.output, "     ")?;
            for col in 0..size {
                let cell = self.paint_cell(game.owner(row, col));
                write!(self.output, "{}  ", cell)?;
            }
            writeln!(self.output)?;
        }
        write!(self.output, "     ")?;
        for col in 1..=size {
            write!(self.output, "{:<3}", col)?;
        }
        writeln!(self.output)
    }

    /// Announce the winner or the tie.
    pub fn print_result(&mut self, game: &Game) -> io::Result<()> {
        match game.status() {
            GameStatus::Won(player) => {
                let name = self.paint_name(game, player);
                if self.color {
                    writeln!(self.output, "Congrats {}!!! {}", name, "You've won the game!!".green())
                } else {
                    writeln!(self.output, "Congrats {}!!! You've won the game!!", name)
                }
            }
            GameStatus::Draw => {
                if self.color {
                    writeln!(self.output, "{}", "It's a tie!".magenta())
                } else {
                    writeln!(self.output, "It's a tie!")
                }
            }
            GameStatus::InProgress => Ok(()),
        }
    }

    /// List every turn taken so far.
    pub fn print_history(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output, "\nMove history:")?;
        for (i, turn) in game.history().iter().enumerate() {
            let name = self.paint_name(game, turn.player());
            match *turn {
                Turn::Placed { col, .. } => writeln!(self.output, "{:>4}. {} -> column {}", i + 1, name, col + 1)?,
                Turn::Skipped { .. } => writeln!(self.output, "{:>4}. {} skipped", i + 1, name)?,
            }
        }
        Ok(())
    }

    /// Ask whether to start another game with the same players.
    pub fn prompt_restart(&mut self) -> anyhow::Result<bool> {
        write!(self.output, "\nPlay again? [y/N]: ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_ascii_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_column(&mut self, _rng: &mut SmallRng, game: &Game) -> anyhow::Result<Option<usize>> {
        self.render_board(game)?;
        self.prompt_column(game)
    }

    fn handle_game_over(&mut self, game: &Game) -> anyhow::Result<()> {
        self.render_board(game)?;
        self.print_result(game)?;
        self.print_history(game)?;
        Ok(())
    }
}
