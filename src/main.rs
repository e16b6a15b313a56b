//! Console front-end: configure a game from flags and play it in the
//! terminal with human and random seats.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_grid::{
    Game, GameBuilder, GameResult, InteractiveMoveSource, MoveSource, PlayerConfig, TokenRegistry,
    TurnOutcome,
};

/// Play Connect Four on any board size with any number of players.
#[derive(Parser)]
#[command(name = "connect-grid", about = "Connect Four for any board and any number of players")]
struct Cli {
    /// Number of rows (at least 4)
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Number of columns (at least 4)
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Add a console player; repeat for more
    #[arg(long = "human", value_name = "NAME")]
    humans: Vec<String>,

    /// Add a random-move player; repeat for more
    #[arg(long = "random", value_name = "NAME")]
    randoms: Vec<String>,

    /// Seed for the random players
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Full-column picks allowed per turn before the game is abandoned
    #[arg(long, default_value_t = 64)]
    max_attempts: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Humans sit first, in the order given, then the random players.
    let mut builder = GameBuilder::new()
        .rows(cli.rows)
        .cols(cli.cols)
        .seed(cli.seed)
        .max_attempts_per_turn(cli.max_attempts);
    for name in cli.humans {
        builder = builder.player(PlayerConfig::human(name));
    }
    for name in cli.randoms {
        builder = builder.player(PlayerConfig::random(name));
    }
    let config = builder.build().context("invalid game setup")?;

    let registry = TokenRegistry::from_config(&config).context("failed to register players")?;
    for entry in registry.players() {
        println!("{} plays as {}", entry.name, entry.id.0);
    }

    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let mut game = Game::from_config(&config, &registry, |_, name| {
        Box::new(InteractiveMoveSource::sharing(name, Rc::clone(&stdin), io::stdout()))
            as Box<dyn MoveSource>
    })
    .context("failed to set up game")?;

    println!("{}\n", game.board());
    let result = game
        .play_observed(|game, outcome| {
            if let TurnOutcome::Placed { record, .. } = outcome {
                println!(
                    "{} dropped into column {}\n{}\n",
                    game.source_name(record.player),
                    record.column,
                    game.board()
                );
            }
        })
        .context("game aborted")?;

    match result {
        GameResult::Winner { player, line } => {
            let name = registry.name_of(player).unwrap_or("unknown");
            println!("The winner is: {name} ({} to {})", line.start, line.end);
        }
        GameResult::Draw => println!("Board full, the game is a draw."),
    }

    Ok(())
}
