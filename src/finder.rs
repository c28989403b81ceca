use crate::grid::{Coord, Grid};
use crate::Dictionary;
#[cfg(feature = "flame_it")]
use flamer::flame;
use std::collections::{BTreeMap, BTreeSet};

/// The distinct words found on a grid, in alphabetical order.
pub type FoundWords = BTreeSet<String>;

/// Depth first search state for one grid and dictionary.
///
/// `path` holds the cells visited so far and `prefix` the letters along them.
/// Both grow by one cell when the search goes deeper and shrink when it backtracks.
struct Search<'a, F> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    path: Vec<Coord>,
    prefix: String,
    found: F,
}

impl<'a, F> Search<'a, F>
where
    F: FnMut(&str, &[Coord]),
{
    fn new(grid: &'a Grid, dictionary: &'a Dictionary, found: F) -> Self {
        Search {
            grid,
            dictionary,
            path: Vec::with_capacity(grid.len()),
            prefix: String::with_capacity(2 * grid.len()),
            found,
        }
    }

    fn run(&mut self) {
        for &start in self.grid.coords() {
            self.visit(start);
        }
    }

    fn visit(&mut self, coord: Coord) {
        let tile = self.grid.tile_at(coord);
        self.path.push(coord);
        self.prefix.push_str(tile.as_str());

        if self.dictionary.is_word(&self.prefix) {
            (self.found)(&self.prefix, &self.path);
        }
        // stop as soon as no word starts with prefix
        if self.dictionary.is_prefix(&self.prefix) {
            let grid = self.grid;
            for &next in grid.neighbors(coord) {
                if !self.path.contains(&next) {
                    self.visit(next);
                }
            }
        }

        self.prefix.truncate(self.prefix.len() - tile.len());
        self.path.pop();
    }
}

/// Find all words in `dictionary` that can be spelled on `grid`.
///
/// A word is spelled by a path of adjacent cells (including diagonals) that uses each cell at most once.
/// ## Examples
/// ```
/// # use boggle_solver::{find_words, Dictionary, Grid, Error};
/// let dictionary = Dictionary::from_words(&["cat", "cats", "act", "tact"])?;
/// let grid: Grid = "CAAT".parse()?;
/// let words = find_words(&grid, &dictionary);
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["ACT", "CAT"]);
/// # Ok::<(), Error>(())
/// ```
#[cfg_attr(feature = "flame_it", flame)]
pub fn find_words(grid: &Grid, dictionary: &Dictionary) -> FoundWords {
    let mut words = FoundWords::new();
    Search::new(grid, dictionary, |word: &str, _: &[Coord]| {
        if !words.contains(word) {
            words.insert(String::from(word));
        }
    })
    .run();
    words
}

/// Find all words like [`find_words`], together with the first path found for each word.
pub fn find_word_paths(grid: &Grid, dictionary: &Dictionary) -> BTreeMap<String, Vec<Coord>> {
    let mut paths = BTreeMap::new();
    Search::new(grid, dictionary, |word: &str, path: &[Coord]| {
        if !paths.contains_key(word) {
            paths.insert(String::from(word), path.to_vec());
        }
    })
    .run();
    paths
}
