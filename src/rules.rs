use crate::{Grid, ALIVE, DEAD};

/// Next state of one cell given its current state and live neighbor count.
pub fn next_state(cell: u8, count: u8) -> u8 {
    match (cell, count) {
        (ALIVE, 2 | 3) => ALIVE, // stays
        (ALIVE, _) => DEAD,      // under or over population
        (_, 3) => ALIVE,         // birth
        _ => DEAD,               // stays dead
    }
}

/// Applies the transition to every cell.
///
/// `counts` must have been computed from this same `grid`, every cell then only reads itself and its own count,
/// which keeps the sweep synchronous even though it writes in place.
pub fn apply(grid: &mut Grid, counts: &Grid) {
    debug_assert_eq!(grid.side(), counts.side());
    for (cell, &count) in grid.cells_mut().iter_mut().zip(counts.cells()) {
        *cell = next_state(*cell, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_state_table() {
        for count in 0..=8 {
            let survives = count == 2 || count == 3;
            assert_eq!(next_state(ALIVE, count) == ALIVE, survives, "alive with {count}");
            assert_eq!(next_state(DEAD, count) == ALIVE, count == 3, "dead with {count}");
        }
    }

    #[test]
    fn test_all_threes_revive_everything() {
        let mut grid = Grid::new(5);
        let mut counts = Grid::new(5);
        counts.fill(3);
        apply(&mut grid, &counts);
        assert_eq!(grid.population(), 25);
    }

    #[test]
    fn test_all_ones_kill_everything() {
        let mut grid = Grid::new(5);
        grid.fill(ALIVE);
        let mut counts = Grid::new(5);
        counts.fill(1);
        apply(&mut grid, &counts);
        assert_eq!(grid.population(), 0);
    }
}
