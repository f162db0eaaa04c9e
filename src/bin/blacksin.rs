//! Batch simulation binary.
//!
//! Plays the search player against the heuristic opponent and prints the
//! aggregate. Set `RUST_LOG=debug` for per-game lines.

use std::time::Instant;

use blacksin::{simulate, GameError, SearchConfig, SimulationConfig};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Games to play
    #[arg(short, long, default_value_t = 500)]
    games: u32,

    /// Cards in the deck
    #[arg(short, long, default_value_t = blacksin::core::DEFAULT_DECK_COUNT)]
    deck_count: u32,

    /// Master seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player search depth
    #[arg(long, default_value_t = blacksin::search::config::DEFAULT_MAX_DEPTH)]
    depth: u32,
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SimulationConfig::default()
        .with_games(args.games)
        .with_deck_count(args.deck_count)
        .with_search(SearchConfig::default().with_max_depth(args.depth));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let start = Instant::now();
    let summary = simulate(&config)?;
    println!("{}", summary);
    println!(
        "{:.3}s, {} search nodes ({:.0} nodes/s)",
        start.elapsed().as_secs_f64(),
        summary.search.nodes,
        summary.search.nodes_per_second()
    );
    Ok(())
}
