//! A boggle library for Rust.
//! <br>
//! This crate finds all words that can be spelled on a boggle board, and searches for boards
//! that contain as many (long) words as possible: "inverse boggle".
//!
//! Words are spelled by paths of adjacent cells, horizontally, vertically or diagonally,
//! using each cell at most once. Words must have at least 3 letters. A `Q` on the board
//! is read as the two letter tile `QU`.
//!
//! # How to use `boggle_solver`
//! Start by creating a [`Dictionary`] from a list of words, and a [`Grid`] from its letters.
//! Reading the word list (from a file, or anywhere else) is up to you: the dictionary is built
//! from any list of strings.
//! Then [`find_words`] lists the words on the grid, and [`total_score`] adds up their points.
//!
//! To search for a high scoring grid, start from any grid (for example [`Grid::random`]) and
//! let [`optimize`] (or a [`HillClimber`]) improve it. The search is a hill climb: it ends up
//! in a local optimum, not necessarily the best grid possible.
//! All randomness comes from the `rng` you pass in, so a seeded rng gives repeatable results.
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Dictionary, Grid, Error, find_words, total_score};
//! let dictionary = Dictionary::from_words(&["rust", "rusts", "trust", "stir", "tsar"])?;
//! let grid: Grid = "RUS TSI XXR".parse()?;
//! let words = find_words(&grid, &dictionary);
//! for word in &words {
//!     println!("{}", word);
//! }
//! assert!(words.contains("RUST"));
//! assert!(total_score(&words, &dictionary) >= 1);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Inverse boggle
//!  ```
//! # use boggle_solver::{Dictionary, Grid, Error, TilePool, grid_score, optimize};
//! use rand::{rngs::StdRng, SeedableRng};
//! let dictionary = Dictionary::from_words(&["stare", "tears", "rates", "taste", "treats"])?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let start = Grid::random(4, &TilePool::english(), &mut rng)?;
//! let best = optimize(&start, &dictionary, 1000, &mut rng);
//! assert!(grid_score(&best, &dictionary) >= grid_score(&start, &dictionary));
//! println!("{}", best);
//! # Ok::<(), Error>(())
//! ```
mod climb;
mod dictionary;
mod error;
mod finder;
mod grid;
mod pool;
mod score;
mod tile;

pub use crate::climb::{optimize, Climb, FullRescore, HillClimber, Objective};
pub use crate::dictionary::{Dictionary, MIN_WORD_LEN};
pub use crate::error::Error;
pub use crate::finder::{find_word_paths, find_words, FoundWords};
pub use crate::grid::{Coord, Grid};
pub use crate::pool::TilePool;
pub use crate::score::{grid_score, total_score, word_score};
pub use crate::tile::Tile;
