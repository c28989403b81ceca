use crate::pool::TilePool;
use crate::score::grid_score;
use crate::{Dictionary, Grid};
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, info, trace};
use rand::Rng;

/// The value a [`HillClimber`] tries to maximize.
///
/// The climber calls `score` once for the start grid and once after every mutation,
/// always with the complete current grid.
pub trait Objective {
    fn score(&mut self, grid: &Grid) -> u32;
}

impl<F> Objective for F
where
    F: FnMut(&Grid) -> u32,
{
    fn score(&mut self, grid: &Grid) -> u32 {
        self(grid)
    }
}

/// Scores a grid by finding all its words again, see [`grid_score`](crate::grid_score).
#[derive(Debug, Clone, Copy)]
pub struct FullRescore<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> FullRescore<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        FullRescore { dictionary }
    }
}

impl<'a> Objective for FullRescore<'a> {
    fn score(&mut self, grid: &Grid) -> u32 {
        grid_score(grid, self.dictionary)
    }
}

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct Climb {
    /// the grid after all iterations
    pub grid: Grid,
    /// score of `grid`
    pub score: u32,
    /// score of the start grid
    pub initial_score: u32,
    /// number of mutations tried
    pub iterations: usize,
    /// number of mutations kept (including ties)
    pub accepted: usize,
    /// number of mutations that raised the score
    pub improved: usize,
}

/// Local search for a high scoring grid.
///
/// Each iteration puts a random tile from the pool on a random cell. The change is kept
/// if the score does not go down, otherwise the old tile is put back.
/// Keeping ties lets the search wander over plateaus of equal score.
#[derive(Debug, Clone)]
pub struct HillClimber<O> {
    objective: O,
    pool: TilePool,
}

impl<'a> HillClimber<FullRescore<'a>> {
    /// Create a climber that maximizes the word score for `dictionary`, using the english tile pool.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        HillClimber::from_objective(FullRescore::new(dictionary))
    }
}

impl<O: Objective> HillClimber<O> {
    /// Create a climber for any objective, using the english tile pool.
    pub fn from_objective(objective: O) -> Self {
        HillClimber {
            objective,
            pool: TilePool::default(),
        }
    }

    /// Draw replacement tiles from `pool`.
    pub fn with_pool(mut self, pool: TilePool) -> Self {
        self.pool = pool;
        self
    }

    /// Climb from `grid` for `iterations` mutations. `grid` itself is not changed.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{grid_score, Dictionary, Grid, HillClimber, Error};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let dictionary = Dictionary::from_words(&["tea", "eat", "ate", "seat", "east", "tease"])?;
    /// let grid: Grid = "XXXX XXXX XXXX XXXX".parse()?;
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let climb = HillClimber::new(&dictionary).run(&grid, 500, &mut rng);
    /// assert!(climb.score >= climb.initial_score);
    /// assert_eq!(climb.score, grid_score(&climb.grid, &dictionary));
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn run<R: Rng>(&mut self, grid: &Grid, iterations: usize, rng: &mut R) -> Climb {
        let mut grid = grid.clone();
        let initial_score = self.objective.score(&grid);
        let mut best_score = initial_score;
        let mut accepted = 0;
        let mut improved = 0;

        for i in 0..iterations {
            let coord = grid.coords()[rng.gen_range(0..grid.len())];
            let old = grid.set_tile(coord, self.pool.draw(rng));
            let new_score = self.objective.score(&grid);
            if new_score >= best_score {
                if new_score > best_score {
                    debug!(
                        "iteration {}: {} at {:?} scores {} (was {})",
                        i,
                        grid.tile_at(coord),
                        coord,
                        new_score,
                        best_score
                    );
                    improved += 1;
                }
                accepted += 1;
                best_score = new_score;
            } else {
                trace!(
                    "iteration {}: {} at {:?} scores {}, keep {}",
                    i,
                    grid.tile_at(coord),
                    coord,
                    new_score,
                    old
                );
                grid.set_tile(coord, old);
            }
        }
        info!(
            "{} iterations: score {} -> {}, {} accepted, {} improved",
            iterations, initial_score, best_score, accepted, improved
        );
        Climb {
            grid,
            score: best_score,
            initial_score,
            iterations,
            accepted,
            improved,
        }
    }
}

/// Search for a grid with a higher word score than `grid` by hill climbing for `iterations` steps.
///
/// Returns the final grid; `grid` itself is not changed. The returned grid never scores lower
/// than `grid`. See [`HillClimber`] for the statistics of the run, or to use another tile pool.
pub fn optimize<R: Rng>(
    grid: &Grid,
    dictionary: &Dictionary,
    iterations: usize,
    rng: &mut R,
) -> Grid {
    HillClimber::new(dictionary)
        .run(grid, iterations, rng)
        .grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Tile};
    use rand::{rngs::StdRng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "tea", "eat", "ate", "seat", "east", "eats", "teas", "tease", "state", "taste", "rate",
        "tear", "star", "rats", "arts", "stare", "tears", "rates", "treat", "street", "setter",
    ];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    fn count_e(grid: &Grid) -> u32 {
        grid.tiles().iter().filter(|tile| tile.as_str() == "E").count() as u32
    }

    #[test]
    fn test_zero_iterations() -> Result<()> {
        let dictionary = test_dictionary();
        let grid: Grid = "STAR EATS TEAR RATE".parse()?;
        let mut rng = StdRng::seed_from_u64(0);
        let result = optimize(&grid, &dictionary, 0, &mut rng);
        assert_eq!(result, grid.clone());
        Ok(())
    }

    #[test]
    fn test_never_worse() -> Result<()> {
        let dictionary = test_dictionary();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5 {
            let grid = Grid::random(4, &TilePool::default(), &mut rng)?;
            let before = grid_score(&grid, &dictionary);
            let climb = HillClimber::new(&dictionary).run(&grid, 200, &mut rng);
            assert_eq!(climb.initial_score, before);
            assert_eq!(climb.score, grid_score(&climb.grid, &dictionary));
            assert!(climb.score >= before);
            assert!(climb.improved <= climb.accepted);
            assert!(climb.accepted <= climb.iterations);
        }
        Ok(())
    }

    #[test]
    fn test_input_not_changed() -> Result<()> {
        let dictionary = test_dictionary();
        let grid: Grid = "XXXX XXXX XXXX XXXX".parse()?;
        let mut rng = StdRng::seed_from_u64(5);
        let result = optimize(&grid, &dictionary, 300, &mut rng);
        assert_eq!(grid.to_string(), "X X X X\nX X X X\nX X X X\nX X X X");
        assert!(grid_score(&result, &dictionary) >= grid_score(&grid, &dictionary));
        Ok(())
    }

    #[test]
    fn test_seeded_runs_repeat() -> Result<()> {
        let dictionary = test_dictionary();
        let grid: Grid = "STAR EATS TEAR RATE".parse()?;
        let a = optimize(&grid, &dictionary, 100, &mut StdRng::seed_from_u64(9));
        let b = optimize(&grid, &dictionary, 100, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_ties_accepted() -> Result<()> {
        let z: Tile = "Z".parse()?;
        let pool = TilePool::from_counts(&[(z, 1)])?;
        let grid: Grid = "AB CD".parse()?;
        let mut rng = StdRng::seed_from_u64(2);
        let climb = HillClimber::from_objective(|_: &Grid| 0u32)
            .with_pool(pool)
            .run(&grid, 200, &mut rng);
        assert_eq!(climb.accepted, 200);
        assert_eq!(climb.improved, 0);
        assert_eq!(climb.grid.to_string(), "Z Z\nZ Z");
        Ok(())
    }

    #[test]
    fn test_worse_mutations_reverted() -> Result<()> {
        let pool = TilePool::from_counts(&[("X".parse()?, 1)])?;
        let grid: Grid = "EEEE".parse()?;
        let mut rng = StdRng::seed_from_u64(4);
        let climb = HillClimber::from_objective(count_e)
            .with_pool(pool)
            .run(&grid, 50, &mut rng);
        assert_eq!(climb.grid, grid);
        assert_eq!(climb.score, 4);
        assert_eq!(climb.accepted, 0);
        Ok(())
    }

    #[test]
    fn test_improves() -> Result<()> {
        let pool = TilePool::from_counts(&[("E".parse()?, 1), ("X".parse()?, 1)])?;
        let grid: Grid = "XXX XXX XXX".parse()?;
        let mut rng = StdRng::seed_from_u64(8);
        let climb = HillClimber::from_objective(count_e)
            .with_pool(pool)
            .run(&grid, 300, &mut rng);
        assert_eq!(climb.initial_score, 0);
        assert_eq!(climb.score, 9);
        assert_eq!(climb.improved, 9);
        Ok(())
    }
}
