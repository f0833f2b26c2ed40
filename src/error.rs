use thiserror::Error;

use crate::{Pattern, Pos};

/// Everything that can go wrong before the first step. Stepping itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error(
        "pattern {pattern} does not fit a {side}x{side} grid: cell at offset ({}, {}) from the center falls outside, a side of at least {min_side} is needed",
        .offset.row,
        .offset.col
    )]
    PatternOutOfBounds {
        pattern: Pattern,
        side: usize,
        offset: Pos,
        min_side: usize,
    },

    #[error("grid rows must form a square, got {rows} rows with a row of length {len}")]
    NotSquare { rows: usize, len: usize },

    #[error("speed must be within [0, 1], got {speed}")]
    InvalidSpeed { speed: f64 },

    #[error("iteration count must be at least 1")]
    InvalidIterations,
}
