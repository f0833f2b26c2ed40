use std::{
    collections::HashSet,
    ops::{Add, Sub},
};

use metrohash::MetroBuildHasher;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Pos {
    /// wraps both coordinates into `[0, side)`.
    pub fn wrapped(self, side: usize) -> Self {
        let side = side as i32;
        pos!(self.row.rem_euclid(side), self.col.rem_euclid(side))
    }
}

/// set of positions, used for live cells.
pub type PosSet = HashSet<Pos, MetroBuildHasher>;

/// exact floor of the square root of `n`.
pub fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // the float estimate can be off by one for large inputs, walk it to the exact root
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

#[test]
fn test_isqrt() {
    assert_eq!(isqrt(0), 0);
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(3), 1);
    assert_eq!(isqrt(4), 2);
    assert_eq!(isqrt(99), 9);
    assert_eq!(isqrt(100), 10);
    assert_eq!(isqrt(usize::MAX), (1usize << (usize::BITS / 2)) - 1);
}

#[test]
fn test_wrapped() {
    assert_eq!(pos!(-1, 5).wrapped(5), pos!(4, 0));
    assert_eq!(pos!(12, -7).wrapped(5), pos!(2, 3));
}
