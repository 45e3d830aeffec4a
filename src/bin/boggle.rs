//! CLI harness (spec.md §6 "CLI harness", SPEC_FULL.md §4.9). Loads a
//! dictionary, builds a board (random or a fixed reference board), runs `N`
//! queries and reports the fastest, in microseconds — generalizing the
//! teacher's hardcoded `main.rs` timing harness into a configurable binary.

use std::time::Instant;

use clap::Parser;
use rand::Rng;

use boggle_solver::{Dictionary, Solver, SolverConfig};

/// Reference board used when `--random` is not passed; chosen to contain a
/// handful of short words under a typical English dictionary.
const REFERENCE_BOARD: &[u8] = b"DZXEAIQUT";
const REFERENCE_WIDTH: usize = 3;
const REFERENCE_HEIGHT: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "boggle", about = "Solve Boggle boards against a dictionary")]
struct Args {
    /// Board width; ignored when using the fixed reference board.
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Board height; ignored when using the fixed reference board.
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Path to a newline- (or otherwise non-letter-) separated word list.
    #[arg(long, default_value = "wordlists/enable1.txt")]
    dictionary: String,

    /// Number of solves to time; the fastest is reported.
    #[arg(long, default_value_t = 1000)]
    iterations: u32,

    /// Use a random board instead of the fixed reference board.
    #[arg(long)]
    random: bool,

    /// Override the shard count (default: 2x available parallelism).
    #[arg(long)]
    shards: Option<usize>,
}

fn random_board(width: usize, height: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..width * height)
        .map(|_| rng.gen_range(b'A'..=b'Z'))
        .collect()
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let shard_count = args
        .shards
        .unwrap_or_else(|| SolverConfig::default().shard_count);

    let start = Instant::now();
    let dictionary = Dictionary::load(&args.dictionary, shard_count);
    log::info!(
        "loaded dictionary from {} in {:?}",
        args.dictionary,
        start.elapsed()
    );

    let (board, width, height) = if args.random {
        (random_board(args.width, args.height), args.width, args.height)
    } else {
        (
            REFERENCE_BOARD.to_vec(),
            REFERENCE_WIDTH,
            REFERENCE_HEIGHT,
        )
    };

    let solver = Solver::new(dictionary);

    let mut fastest = None;
    let mut last_count = 0;
    let mut last_score = 0;
    for _ in 0..args.iterations.max(1) {
        let start = Instant::now();
        let result = solver.find_words(&board, width, height);
        let elapsed = start.elapsed();
        last_count = result.count();
        last_score = result.score;
        fastest = Some(fastest.map_or(elapsed, |f: std::time::Duration| f.min(elapsed)));
    }

    println!(
        "{}x{} board, {} words, score {}, fastest of {} solves: {} us",
        width,
        height,
        last_count,
        last_score,
        args.iterations,
        fastest.unwrap_or_default().as_micros()
    );
}
