use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::{pos, ConfigError, Grid, Pos, ALIVE};

/// Seed shapes, placed around the center of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Pattern {
    /// still life.
    Block,
    /// oscillator, period 2.
    #[default]
    Beacon,
    /// spaceship, moves one cell diagonally every 4 generations.
    Glider,
    /// oscillator, period 3.
    Pulsar,
}

const BLOCK: [Pos; 4] = [pos!(0, 0), pos!(1, 0), pos!(0, 1), pos!(1, 1)];

const BEACON: [Pos; 6] = [
    pos!(-1, -1),
    pos!(0, -1),
    pos!(-1, 0),
    pos!(1, 2),
    pos!(2, 2),
    pos!(2, 1),
];

// this orientation travels towards the origin, by (-1, -1)
const GLIDER: [Pos; 5] = [
    pos!(1, 0),
    pos!(0, -1),
    pos!(-1, 1),
    pos!(-1, 0),
    pos!(-1, -1),
];

/// one quadrant of the pulsar, the others are its mirror images.
const PULSAR_QUADRANT: [Pos; 12] = [
    pos!(2, 1),
    pos!(3, 1),
    pos!(4, 1),
    pos!(1, 2),
    pos!(1, 3),
    pos!(1, 4),
    pos!(6, 2),
    pos!(6, 3),
    pos!(6, 4),
    pos!(2, 6),
    pos!(3, 6),
    pos!(4, 6),
];

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Block,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::Pulsar,
    ];

    /// (row, col) offsets from the grid center of every live cell.
    pub fn offsets(self) -> Vec<Pos> {
        match self {
            Pattern::Block => BLOCK.to_vec(),
            Pattern::Beacon => BEACON.to_vec(),
            Pattern::Glider => GLIDER.to_vec(),
            Pattern::Pulsar => [(1, 1), (1, -1), (-1, -1), (-1, 1)]
                .into_iter()
                .flat_map(|(row_sign, col_sign)| {
                    PULSAR_QUADRANT
                        .iter()
                        .map(move |p| pos!(p.row * row_sign, p.col * col_sign))
                })
                .collect(),
        }
    }

    /// smallest grid side that holds the whole pattern around `side / 2`.
    pub fn min_side(self) -> usize {
        let offsets = self.offsets();
        let below = offsets.iter().map(|p| -p.row.min(p.col)).max().unwrap_or(0).max(0) as usize;
        let above = offsets.iter().map(|p| p.row.max(p.col)).max().unwrap_or(0).max(0) as usize;
        // center = side / 2 must leave `below` cells before it and `above` cells after it
        (1..)
            .find(|side| side / 2 >= below && side / 2 + above < *side)
            .unwrap_or(usize::MAX)
    }

    /// Writes the pattern into `grid` around its center.
    ///
    /// Nothing is written unless every cell fits.
    pub fn seed(self, grid: &mut Grid) -> Result<(), ConfigError> {
        let side = grid.side();
        let center = (side / 2) as i32;
        let center = pos!(center, center);

        let offsets = self.offsets();
        if let Some(&offset) = offsets
            .iter()
            .find(|&&offset| grid.get_pos(center + offset).is_none())
        {
            return Err(ConfigError::PatternOutOfBounds {
                pattern: self,
                side,
                offset,
                min_side: self.min_side(),
            });
        }

        for offset in offsets {
            let Pos { row, col } = center + offset;
            grid.set(row as usize, col as usize, ALIVE);
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Block => write!(f, "block"),
            Pattern::Beacon => write!(f, "beacon"),
            Pattern::Glider => write!(f, "glider"),
            Pattern::Pulsar => write!(f, "pulsar"),
        }
    }
}

impl FromStr for Pattern {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown pattern '{s}'"))
    }
}
