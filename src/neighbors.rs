//! Moore-neighborhood counting under both boundary policies.
//!
//! Two strategies are provided. They must agree on every cell of every grid:
//! - [`count_direct`] sums the 8 neighbors of each cell, with corners and edges resolved apart from the interior.
//! - [`count_convolution`] pads the grid by one cell and slides [`KERNEL`] over it.

use std::fmt;

use clap::ValueEnum;

use crate::{pos, Boundary, Grid, Pos, DEAD};

/// Moore neighborhood as a 3x3 kernel, the center cell does not count itself.
pub const KERNEL: [[u8; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];

pub const MOORE_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(-1, 0),
    pos!(-1, 1),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Strategy {
    Direct,
    #[default]
    Convolution,
}

impl Strategy {
    /// Overwrites `out` with the neighbor count of every cell in `grid`.
    pub fn count(self, grid: &Grid, boundary: Boundary, out: &mut Grid) {
        match self {
            Strategy::Direct => count_direct(grid, boundary, out),
            Strategy::Convolution => count_convolution(grid, boundary, out),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Direct => write!(f, "direct"),
            Strategy::Convolution => write!(f, "convolution"),
        }
    }
}

fn reset(out: &mut Grid, side: usize) {
    if out.side() == side {
        out.fill(0);
    } else {
        *out = Grid::new(side);
    }
}

/// neighbor sum for a cell on the border, where some offsets leave the grid.
fn border_sum(grid: &Grid, boundary: Boundary, row: usize, col: usize) -> u8 {
    let side = grid.side();
    let origin = pos!(row as i32, col as i32);
    MOORE_OFFSETS
        .iter()
        .map(|&offset| {
            let neighbor = origin + offset;
            let cell = match boundary {
                Boundary::Periodic => grid.get_pos(neighbor.wrapped(side)),
                Boundary::Finite => grid.get_pos(neighbor),
            };
            cell.unwrap_or(DEAD)
        })
        .sum()
}

/// neighbor sum for a cell whose 8 neighbors are all inside the grid.
fn interior_sum(grid: &Grid, row: usize, col: usize) -> u8 {
    grid.get(row - 1, col - 1)
        + grid.get(row - 1, col)
        + grid.get(row - 1, col + 1)
        + grid.get(row, col - 1)
        + grid.get(row, col + 1)
        + grid.get(row + 1, col - 1)
        + grid.get(row + 1, col)
        + grid.get(row + 1, col + 1)
}

pub fn count_direct(grid: &Grid, boundary: Boundary, out: &mut Grid) {
    let side = grid.side();
    reset(out, side);
    if side == 0 {
        return;
    }
    let last = side - 1;

    // corners, a 1x1 grid has a single one
    for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
        out.set(row, col, border_sum(grid, boundary, row, col));
    }

    // edges, excluding the corners
    for k in 1..last {
        for (row, col) in [(k, 0), (0, k), (last, k), (k, last)] {
            out.set(row, col, border_sum(grid, boundary, row, col));
        }
    }

    for row in 1..last {
        for col in 1..last {
            out.set(row, col, interior_sum(grid, row, col));
        }
    }
}

/// copy of `grid` surrounded by a one-cell ring, wrapped or dead depending on the boundary.
fn padded(grid: &Grid, boundary: Boundary) -> Grid {
    let side = grid.side();
    let mut padded = Grid::new(side + 2);
    for row in 0..side + 2 {
        for col in 0..side + 2 {
            let source = pos!(row as i32 - 1, col as i32 - 1);
            let value = match boundary {
                Boundary::Periodic => grid.get_pos(source.wrapped(side)),
                Boundary::Finite => grid.get_pos(source),
            };
            padded.set(row, col, value.unwrap_or(DEAD));
        }
    }
    padded
}

pub fn count_convolution(grid: &Grid, boundary: Boundary, out: &mut Grid) {
    let side = grid.side();
    reset(out, side);
    if side == 0 {
        return;
    }

    let padded = padded(grid, boundary);
    for row in 0..side {
        for col in 0..side {
            let mut sum = 0;
            for (k_row, weights) in KERNEL.iter().enumerate() {
                for (k_col, weight) in weights.iter().enumerate() {
                    sum += weight * padded.get(row + k_row, col + k_col);
                }
            }
            out.set(row, col, sum);
        }
    }
}
