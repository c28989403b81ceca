use crate::{Error, Tile};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::str::FromStr;

/// tile, count
type TileCount = (&'static str, u32);

/// English letter distribution, 102 tiles.
const ENGLISH: &[TileCount] = &[
    ("A", 10),
    ("B", 2),
    ("C", 2),
    ("D", 5),
    ("E", 12),
    ("F", 2),
    ("G", 3),
    ("H", 3),
    ("I", 9),
    ("J", 1),
    ("K", 1),
    ("L", 4),
    ("M", 2),
    ("N", 6),
    ("O", 7),
    ("P", 2),
    ("QU", 1),
    ("R", 6),
    ("S", 5),
    ("T", 7),
    ("U", 4),
    ("V", 2),
    ("W", 2),
    ("X", 1),
    ("Y", 2),
    ("Z", 1),
];

/// A weighted pool of tiles to draw random tiles from.
///
/// Used both to fill random grids and to pick replacement tiles while hill climbing.
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: Vec<Tile>,
    counts: Vec<u32>,
    dist: WeightedIndex<u32>,
}

impl Default for TilePool {
    fn default() -> Self {
        Self::english()
    }
}

impl TilePool {
    /// Create a pool where each tile is drawn with a probability proportional to its count.
    /// Tiles with count 0 are never drawn.
    /// ## Errors
    /// If `counts` is empty or all counts are 0.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Error, TilePool};
    /// let pool = TilePool::from_counts(&[("E".parse()?, 3), ("T".parse()?, 1)])?;
    /// assert_eq!(pool.total(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_counts(counts: &[(Tile, u32)]) -> Result<TilePool, Error> {
        let (tiles, counts): (Vec<Tile>, Vec<u32>) = counts.iter().copied().unzip();
        let dist = WeightedIndex::new(&counts).map_err(|_| Error::EmptyTilePool)?;
        Ok(TilePool {
            tiles,
            counts,
            dist,
        })
    }

    /// The english letter distribution, with a single `QU` tile.
    pub fn english() -> TilePool {
        let counts: Vec<(Tile, u32)> = ENGLISH
            .iter()
            .map(|&(token, count)| {
                let tile = Tile::from_str(token).expect("english tiles are valid");
                (tile, count)
            })
            .collect();
        TilePool::from_counts(&counts).expect("english pool is not empty")
    }

    /// Draw a random tile.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Tile {
        self.tiles[self.dist.sample(rng)]
    }

    /// The number of copies of `tile` in the pool.
    pub fn count_of(&self, tile: Tile) -> u32 {
        self.tiles
            .iter()
            .zip(&self.counts)
            .filter(|&(&t, _)| t == tile)
            .map(|(_, &count)| count)
            .sum()
    }

    /// The total number of tiles in the pool.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
