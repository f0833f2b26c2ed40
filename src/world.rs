use std::{fmt, str::FromStr};

use clap::ValueEnum;

/// Cells are plain numbers so that neighbor counting is a sum.
pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// How neighbors are resolved past the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Boundary {
    /// opposite edges are glued together, every cell has 8 neighbors.
    #[default]
    Periodic,
    /// the grid sits in a sea of permanently dead cells.
    Finite,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Periodic => write!(f, "periodic"),
            Boundary::Finite => write!(f, "finite"),
        }
    }
}

impl FromStr for Boundary {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "periodic" => Ok(Boundary::Periodic),
            "finite" => Ok(Boundary::Finite),
            other => Err(format!("unknown boundary '{other}'")),
        }
    }
}

pub use grid::{side_for_capacity, Grid};
mod grid;
