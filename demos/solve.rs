use anyhow::{Context, Result};
use boggle_solver::{find_word_paths, total_score, word_score, Dictionary, FoundWords, Grid};
use clap::Parser;
use std::fs::read_to_string;
use std::time::Instant;

/// Find all words on a boggle board.
#[derive(Debug, Parser)]
struct Opts {
    /// Word list, one word per line
    #[arg(short, long, default_value = "wordlists/words.txt")]
    wordfile: String,

    /// Board letters in row-major order, e.g. "PLAY THIS WORD GAME"
    letters: String,

    /// Read a Q on the board as a plain Q instead of QU
    #[arg(long)]
    no_qu: bool,
}

fn read_dictionary(wordfile: &str) -> Result<Dictionary> {
    let text = read_to_string(wordfile)
        .with_context(|| format!("Wordfile \"{}\" could not be read", wordfile))?;
    let words: Vec<&str> = text.lines().collect();
    Ok(Dictionary::from_words(&words)?)
}

fn run() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let t0 = Instant::now();
    let dictionary = read_dictionary(&opts.wordfile)?;
    println!("Read {} took {:?}", dictionary, t0.elapsed());

    let grid = Grid::from_letters(opts.letters.chars(), !opts.no_qu)?;
    println!("{}\n", grid);

    let t0 = Instant::now();
    let paths = find_word_paths(&grid, &dictionary);
    let dt = t0.elapsed();
    let mut words: Vec<_> = paths.iter().collect();
    words.sort_by_key(|(word, _)| std::cmp::Reverse(word.len()));
    for (word, path) in words {
        println!("{:2} {:-16} {:?}", word_score(word.len()), word, path);
    }
    let found: FoundWords = paths.into_iter().map(|(word, _)| word).collect();
    println!(
        "{} words, {} points, search took {:?}",
        found.len(),
        total_score(&found, &dictionary),
        dt
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
