use battleship_bench::{
    analyze, init_logging, RandomBoardFiller, RandomShooter, Shooter, SinglePlayerGame,
    SinglePlayerGameFactory, SinglePlayerGameState, SHIPS,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play a batch of single-player games with the random baseline shooter.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Include the persisted form of the last game in the output.
    #[arg(long)]
    dump: bool,
}

fn play(game: &mut SinglePlayerGame, shooter: &mut impl Shooter) -> SinglePlayerGameState {
    loop {
        let state = game.game_state(&SHIPS);
        if state != SinglePlayerGameState::InProgress {
            return state;
        }
        let ix = shooter.next_shot(game.shooting_board(), game.last_shot());
        game.shoot(ix);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("playing {} games with seed {}", cli.games, seed);

    let mut factory = SinglePlayerGameFactory::new(
        RandomBoardFiller::new(SmallRng::seed_from_u64(seed)),
        SmallRng::seed_from_u64(seed.wrapping_add(1)),
    );
    let mut shooter = RandomShooter::new(SmallRng::seed_from_u64(seed.wrapping_add(2)));

    let mut games = Vec::with_capacity(cli.games);
    let mut too_many_shots = 0usize;
    for _ in 0..cli.games {
        let mut game = factory.create(0)?;
        if play(&mut game, &mut shooter) == SinglePlayerGameState::TooManyShots {
            too_many_shots += 1;
        }
        games.push(game);
    }

    let stats = analyze(&games);
    let mut result = json!({
        "games": games.len(),
        "seed": seed,
        "average": stats.average,
        "stdDev": stats.std_dev,
        "tooManyShots": too_many_shots,
    });
    if cli.dump {
        if let Some(last) = games.last() {
            result["lastGame"] = serde_json::to_value(last)?;
        }
    }

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
