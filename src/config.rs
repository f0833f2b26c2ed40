use std::time::Duration;

use clap::Parser;

use crate::{Boundary, ConfigError, GridEngine, Pattern, Strategy};

/// Parameters of one viewing session, from the command line or `GOLGRID_*` variables.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "golgrid", version, about = "Conway's game of life on a finite square grid")]
pub struct Settings {
    /// Population capacity, the grid side is the root of the largest perfect square not above it.
    #[arg(short = 'n', long, env = "GOLGRID_CAPACITY", default_value_t = 500)]
    pub capacity: usize,

    /// Initial pattern, placed at the center of the grid.
    #[arg(short, long, env = "GOLGRID_PATTERN", value_enum, default_value_t = Pattern::Beacon)]
    pub pattern: Pattern,

    /// Boundary conditions.
    #[arg(short, long, env = "GOLGRID_BOUNDARY", value_enum, default_value_t = Boundary::Periodic)]
    pub boundary: Boundary,

    /// Neighbor counting strategy.
    #[arg(long, env = "GOLGRID_STRATEGY", value_enum, default_value_t = Strategy::Convolution)]
    pub strategy: Strategy,

    /// Number of generations to run.
    #[arg(short, long, env = "GOLGRID_ITERATIONS", default_value_t = 10)]
    pub iterations: usize,

    /// Simulation speed in [0, 1], each step waits `1 - speed` seconds.
    #[arg(short, long, env = "GOLGRID_SPEED", default_value_t = 0.7)]
    pub speed: f64,

    /// Print the final grid instead of animating it in the terminal.
    #[arg(long, env = "GOLGRID_HEADLESS")]
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 500,
            pattern: Pattern::Beacon,
            boundary: Boundary::Periodic,
            strategy: Strategy::Convolution,
            iterations: 10,
            speed: 0.7,
            headless: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.speed) {
            return Err(ConfigError::InvalidSpeed { speed: self.speed });
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        step_delay(self.speed)
    }

    pub fn build_engine(&self) -> Result<GridEngine, ConfigError> {
        self.validate()?;
        GridEngine::with_strategy(self.capacity, self.pattern, self.boundary, self.strategy)
    }
}

/// delay between two steps for a speed in [0, 1], out of range speeds are clamped.
pub fn step_delay(speed: f64) -> Duration {
    Duration::from_secs_f64(1.0 - speed.clamp(0.0, 1.0))
}
