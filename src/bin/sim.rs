use clap::Parser;
use connect_four::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one game of random moves for both sides and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 7)]
    size: u8,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let size = BoardSize::new(args.size).map_err(|e| anyhow::anyhow!(e))?;

    let mut rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(size, ["player1".to_string(), "player2".to_string()]);
    let mut player = RandomPlayer::new();
    let status = play_game(&mut game, &mut player, &mut rng)?;

    let winner = match status {
        GameStatus::Won(PlayerId::One) => Some("player1"),
        GameStatus::Won(PlayerId::Two) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "size": size.get(),
        "seed": args.seed,
        "moves": game.move_count(),
        "status": status,
        "winner": winner,
        "history": game.history(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
