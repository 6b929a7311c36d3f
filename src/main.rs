#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_four::{init_logging, play_game, BoardSize, CliPlayer, Game, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board width and height; prompts when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64))]
    size: Option<u8>,
    /// Names of player one and player two; prompts when omitted.
    #[arg(long, num_args = 2, value_names = ["PLAYER1", "PLAYER2"])]
    names: Option<Vec<String>>,
    /// Print plain X/O pieces instead of colored circles.
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut player = CliPlayer::stdio(!cli.no_color);
    let size = match cli.size {
        Some(s) => BoardSize::new(s).map_err(|e| anyhow::anyhow!(e))?,
        None => player.prompt_board_size()?,
    };
    player.print_rules(size)?;
    let names: [String; 2] = match cli.names {
        Some(names) => names
            .try_into()
            .map_err(|_| anyhow::anyhow!("--names takes exactly two values"))?,
        None => player.prompt_names()?,
    };

    let mut rng = SmallRng::from_rng(&mut rand::rng());
    let mut game = Game::new(size, names);
    loop {
        play_game(&mut game, &mut player, &mut rng)?;
        if !player.prompt_restart()? {
            break;
        }
        game.restart();
    }
    Ok(())
}
