use anyhow::{Context, Result};
use boggle_solver::{find_words, Dictionary, Grid, HillClimber, TilePool};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::fs::read_to_string;
use std::time::Instant;

/// Search for a high scoring boggle board by hill climbing.
#[derive(Debug, Parser)]
struct Opts {
    /// Word list, one word per line
    #[arg(short, long, default_value = "wordlists/words.txt")]
    wordfile: String,

    /// Board size N, for an N x N board
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Number of mutations to try
    #[arg(short, long, default_value_t = 2000)]
    iterations: usize,

    /// Seed for the random generator, random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Start board letters instead of a random board
    #[arg(long)]
    letters: Option<String>,
}

fn run() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let text = read_to_string(&opts.wordfile)
        .with_context(|| format!("Wordfile \"{}\" could not be read", opts.wordfile))?;
    let words: Vec<&str> = text.lines().collect();
    let dictionary = Dictionary::from_words(&words)?;
    println!("{}", dictionary);

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pool = TilePool::english();
    let start = match &opts.letters {
        Some(letters) => letters.parse()?,
        None => Grid::random(opts.size, &pool, &mut rng)?,
    };

    let t0 = Instant::now();
    let climb = HillClimber::new(&dictionary)
        .with_pool(pool)
        .run(&start, opts.iterations, &mut rng);
    let dt = t0.elapsed().as_secs_f32();

    println!("{}\nscore {}\n", start, climb.initial_score);
    println!("{}\nscore {}\n", climb.grid, climb.score);
    println!(
        "{} iterations took {:.2} s: {} accepted, {} improved",
        climb.iterations, dt, climb.accepted, climb.improved
    );
    let words = find_words(&climb.grid, &dictionary);
    println!("{}", words.into_iter().collect::<Vec<_>>().join(" "));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
