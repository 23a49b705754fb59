use std::error::Error;
use std::process;

use clap::Parser;

use flip7::{
    DEFAULT_WIN_THRESHOLD, Game, GameConfig, GameStatus, create_player_from_spec,
    render_round_summary, render_standings,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xF11B_5EED_CA4D_0007;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Run a Flip 7 match between configured players.")]
struct Args {
    /// Base RNG seed (round decks are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cumulative score that ends the match
    #[arg(short = 'w', long = "win-threshold", default_value_t = DEFAULT_WIN_THRESHOLD)]
    win_threshold: u32,

    /// Stop after the specified number of rounds even without a winner
    #[arg(long = "max-rounds")]
    max_rounds: Option<usize>,

    /// Print per-round results while playing
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Player specs: human[:name] or auto[:<drawing>[,<targeting>]]
    /// (defaults to two automatic players)
    players: Vec<String>,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.players.is_empty() {
        vec![String::from("auto"), String::from("auto")]
    } else {
        args.players
    };

    let mut players = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        players.push(create_player_from_spec(spec, index)?);
    }

    let mut config = GameConfig::new(args.seed).with_win_threshold(args.win_threshold);
    if let Some(cap) = args.max_rounds {
        config = config.with_max_rounds(cap);
    }
    let mut game = Game::new(players, config)?;

    println!(
        "Starting Flip 7 match with {} players (first to {}).\n",
        specs.len(),
        args.win_threshold
    );
    while !game.is_finished() {
        let summary = game.play_round()?;
        if args.verbose {
            print!("{}", render_round_summary(&summary));
        }
    }

    println!(
        "\nMatch finished after {} round(s).",
        game.rounds_played()
    );
    print!("{}", render_standings(&game.standings()));
    match game.status() {
        GameStatus::Finished { winner } => {
            println!("Winner: {}", game.players()[winner].name);
        }
        GameStatus::Stalemate => println!("No winner: round cap reached."),
        GameStatus::Ongoing => unreachable!("match loop exited while ongoing"),
    }
    Ok(())
}
