use crate::pool::TilePool;
use crate::{Error, Tile};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// Position of a cell on the grid: (`row`, `col`).
pub type Coord = (usize, usize);

/// The up to 8 cells around a cell.
type Neighbors = ArrayVec<[Coord; 8]>;

/// A square grid of N x N tiles.
///
/// The shape of the grid and the adjacency of its cells are fixed when the grid is created.
/// Only the tiles can change, one at a time, with [`set_tile`](Grid::set_tile).
/// Cloning a grid gives an independent copy with the same tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Tile>", into = "Vec<Tile>")
)]
pub struct Grid {
    n: usize,
    coords: Vec<Coord>,
    tiles: Vec<Tile>,
    neighbors: Vec<Neighbors>,
}

/// Display the grid as N lines of space separated tiles.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse a grid from its letters, with `Q` read as `QU`. Non-letters are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_letters(s.chars(), true)
    }
}

impl TryFrom<Vec<Tile>> for Grid {
    type Error = Error;
    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Grid::from_tiles(tiles)
    }
}

impl From<Grid> for Vec<Tile> {
    fn from(grid: Grid) -> Vec<Tile> {
        grid.tiles
    }
}

impl Index<Coord> for Grid {
    type Output = Tile;
    fn index(&self, coord: Coord) -> &Self::Output {
        &self.tiles[self.index_of(coord)]
    }
}

fn isqrt(len: usize) -> usize {
    let mut n = (len as f64).sqrt() as usize;
    while n * n > len {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    n
}

fn calc_neighbors(n: usize) -> Vec<Neighbors> {
    let mut neighbors = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let mut around = Neighbors::new();
            for r in row.saturating_sub(1)..=(row + 1).min(n - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(n - 1) {
                    if (r, c) != (row, col) {
                        around.push((r, c));
                    }
                }
            }
            neighbors.push(around);
        }
    }
    neighbors
}

impl Grid {
    /// Create a grid from a list of tiles in row-major order.
    /// ## Errors
    /// If the number of tiles is not a positive perfect square.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Grid, Error> {
        let n = isqrt(tiles.len());
        if n == 0 || n * n != tiles.len() {
            return Err(Error::InvalidGridSize(tiles.len()));
        }
        let coords = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .collect();
        Ok(Grid {
            n,
            coords,
            tiles,
            neighbors: calc_neighbors(n),
        })
    }

    /// Create a grid from letters in row-major order.
    ///
    /// Letters are uppercased, and anything that is not `A`..`Z` is skipped.
    /// With `q_substitution` each `Q` becomes a `QU` tile.
    /// ## Errors
    /// If the number of letters left is not a positive perfect square.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_letters("CATS DOGS QUIT TEAR".chars(), true)?;
    /// assert_eq!(grid.size(), 4);
    /// assert_eq!(grid.tile_at((2, 0)).as_str(), "QU");
    /// assert_eq!(grid.tile_at((2, 1)).as_str(), "U");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_letters<I>(letters: I, q_substitution: bool) -> Result<Grid, Error>
    where
        I: IntoIterator<Item = char>,
    {
        let tiles = letters
            .into_iter()
            .filter_map(|letter| Tile::from_letter(letter, q_substitution))
            .collect();
        Grid::from_tiles(tiles)
    }

    /// Create a `n` x `n` grid with tiles drawn from `pool`.
    /// ## Errors
    /// If `n` is 0.
    pub fn random<R: Rng>(n: usize, pool: &TilePool, rng: &mut R) -> Result<Grid, Error> {
        let tiles = (0..n * n).map(|_| pool.draw(rng)).collect();
        Grid::from_tiles(tiles)
    }

    fn index_of(&self, (row, col): Coord) -> usize {
        assert!(
            row < self.n && col < self.n,
            "coordinate ({}, {}) outside {}x{} grid",
            row,
            col,
            self.n,
            self.n
        );
        row * self.n + col
    }

    /// The number of rows (and columns).
    pub fn size(&self) -> usize {
        self.n
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All cell coordinates in row-major order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The cells next to `coord`, horizontally, vertically or diagonally.
    /// ## Panics
    /// If `coord` is outside the grid.
    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        &self.neighbors[self.index_of(coord)]
    }

    /// The tile at `coord`.
    /// ## Panics
    /// If `coord` is outside the grid.
    pub fn tile_at(&self, coord: Coord) -> Tile {
        self[coord]
    }

    /// The tile at `coord`, or None if outside the grid.
    pub fn get(&self, (row, col): Coord) -> Option<Tile> {
        if row < self.n && col < self.n {
            return Some(self.tiles[row * self.n + col]);
        }
        None
    }

    /// Put `tile` at `coord`, and return the tile that was there.
    /// Putting the returned tile back undoes the change.
    /// ## Panics
    /// If `coord` is outside the grid.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let mut grid: Grid = "CAAT".parse()?;
    /// let old = grid.set_tile((1, 1), "R".parse()?);
    /// assert_eq!(grid.to_string(), "C A\nA R");
    /// grid.set_tile((1, 1), old);
    /// assert_eq!(grid.to_string(), "C A\nA T");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set_tile(&mut self, coord: Coord, tile: Tile) -> Tile {
        let i = self.index_of(coord);
        std::mem::replace(&mut self.tiles[i], tile)
    }

    /// Get the grid as N strings, one per row.
    pub fn to_strings(&self) -> Vec<String> {
        self.tiles
            .chunks(self.n)
            .map(|row| {
                row.iter()
                    .map(Tile::as_str)
                    .collect::<Vec<&str>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_from_letters() -> Result<()> {
        let grid = Grid::from_letters("abcd efgh ijkl mnop".chars(), true)?;
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.tile_at((0, 0)).as_str(), "A");
        assert_eq!(grid.tile_at((3, 3)).as_str(), "P");
        assert_eq!(grid.coords()[5], (1, 1));
        Ok(())
    }

    #[test]
    fn test_q_substitution() -> Result<()> {
        let grid = Grid::from_letters("QQQQ".chars(), true)?;
        assert!(grid.tiles().iter().all(Tile::is_qu));
        let grid = Grid::from_letters("QQQQ".chars(), false)?;
        assert!(grid.tiles().iter().all(|tile| tile.as_str() == "Q"));
        Ok(())
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            Grid::from_letters("ABC".chars(), true),
            Err(Error::InvalidGridSize(3))
        ));
        assert!(matches!(
            "12 34".parse::<Grid>(),
            Err(Error::InvalidGridSize(0))
        ));
        assert!(Grid::from_tiles(vec![]).is_err());
    }

    #[test]
    fn test_neighbors() -> Result<()> {
        let grid: Grid = "ABCDEFGHI".parse()?;
        assert_eq!(grid.neighbors((0, 0)), &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.neighbors((1, 1)).len(), 8);
        assert_eq!(grid.neighbors((0, 1)).len(), 5);
        assert!(!grid.neighbors((1, 1)).contains(&(1, 1)));
        for &coord in grid.coords() {
            for &(r, c) in grid.neighbors(coord) {
                let dr = (r as isize - coord.0 as isize).abs();
                let dc = (c as isize - coord.1 as isize).abs();
                assert!(dr.max(dc) == 1);
            }
        }
        let single: Grid = "X".parse()?;
        assert!(single.neighbors((0, 0)).is_empty());
        Ok(())
    }

    #[test]
    fn test_clone_is_independent() -> Result<()> {
        let grid: Grid = "CAAT".parse()?;
        let mut copy = grid.clone();
        copy.set_tile((0, 0), "B".parse()?);
        assert_eq!(grid.to_strings(), ["C A", "A T"]);
        assert_eq!(copy.to_strings(), ["B A", "A T"]);
        assert_eq!(copy.neighbors((0, 0)), grid.neighbors((0, 0)));
        Ok(())
    }

    #[test]
    fn test_get() -> Result<()> {
        let grid: Grid = "CAAT".parse()?;
        assert_eq!(grid.get((1, 0)), Some("A".parse()?));
        assert_eq!(grid.get((2, 0)), None);
        Ok(())
    }

    #[test]
    fn test_random() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = TilePool::default();
        let grid = Grid::random(5, &pool, &mut rng)?;
        assert_eq!(grid.len(), 25);
        assert!(Grid::random(0, &pool, &mut rng).is_err());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "coordinate (0, 2) outside 2x2 grid")]
    fn test_tile_at_outside() {
        let grid: Grid = "CAAT".parse().unwrap();
        grid.tile_at((0, 2));
    }
}
