use tracing::{debug, trace};

use crate::{rules, side_for_capacity, Boundary, ConfigError, Grid, Pattern, Strategy};

/// Owns the cell grid and its derived neighbor counts, and advances them one generation at a time.
///
/// The engine has a single "ready" state. It is built once per session, and stopping is simply not calling
/// [`GridEngine::step`] anymore.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    neighbors: Grid,
    pattern: Pattern,
    boundary: Boundary,
    strategy: Strategy,
    generation: u64,
}

impl GridEngine {
    pub fn new(capacity: usize, pattern: Pattern, boundary: Boundary) -> Result<Self, ConfigError> {
        Self::with_strategy(capacity, pattern, boundary, Strategy::default())
    }

    /// Sizes the grid from `capacity` and seeds `pattern` at its center.
    ///
    /// # Errors
    /// [`ConfigError::InvalidCapacity`] when `capacity` is zero, [`ConfigError::PatternOutOfBounds`] when the
    /// derived grid is too small for the pattern.
    pub fn with_strategy(
        capacity: usize,
        pattern: Pattern,
        boundary: Boundary,
        strategy: Strategy,
    ) -> Result<Self, ConfigError> {
        let side = side_for_capacity(capacity)?;
        let mut grid = Grid::new(side);
        pattern.seed(&mut grid)?;
        debug!(capacity, side, %pattern, %boundary, %strategy, "engine ready");

        Ok(Self {
            grid,
            neighbors: Grid::new(side),
            pattern,
            boundary,
            strategy,
            generation: 0,
        })
    }

    /// Advances every cell by one generation.
    pub fn step(&mut self) {
        self.strategy
            .count(&self.grid, self.boundary, &mut self.neighbors);
        rules::apply(&mut self.grid, &self.neighbors);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
    }

    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// current cells, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// neighbor counts computed by the last step, all zero before the first one.
    pub fn neighbor_counts(&self) -> &Grid {
        &self.neighbors
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
