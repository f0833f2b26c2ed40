use golgrid::{
    count_convolution, count_direct, pos, Boundary, Grid, GridEngine, Pattern, PosSet, Strategy, ALIVE,
    DEAD,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

fn random_grid(rng: &mut ChaCha8Rng, side: usize) -> Grid {
    let mut grid = Grid::new(side);
    for row in 0..side {
        for col in 0..side {
            if rng.gen_bool(0.4) {
                grid.set(row, col, ALIVE);
            }
        }
    }
    grid
}

/// Moore sum by plain modulo indexing on a torus.
fn reference_periodic(grid: &Grid, row: usize, col: usize) -> u8 {
    let side = grid.side();
    let mut sum = 0;
    for d_row in [side - 1, 0, 1] {
        for d_col in [side - 1, 0, 1] {
            if (d_row, d_col) != (0, 0) {
                sum += grid.get((row + d_row) % side, (col + d_col) % side);
            }
        }
    }
    sum
}

fn counts(strategy: Strategy, grid: &Grid, boundary: Boundary) -> Grid {
    let mut out = Grid::default();
    strategy.count(grid, boundary, &mut out);
    out
}

#[test]
fn test_periodic_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for side in [3, 4, 10] {
        for _ in 0..10 {
            let grid = random_grid(&mut rng, side);
            for strategy in [Strategy::Direct, Strategy::Convolution] {
                let counts = counts(strategy, &grid, Boundary::Periodic);
                for row in 0..side {
                    for col in 0..side {
                        assert_eq!(
                            counts.get(row, col),
                            reference_periodic(&grid, row, col),
                            "{strategy} at ({row}, {col}) on {side}x{side}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_strategies_agree_on_random_grids() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..100 {
        let side = rng.gen_range(1..=24);
        let grid = random_grid(&mut rng, side);
        for boundary in [Boundary::Periodic, Boundary::Finite] {
            let mut direct = Grid::default();
            let mut convolution = Grid::default();
            count_direct(&grid, boundary, &mut direct);
            count_convolution(&grid, boundary, &mut convolution);
            assert_eq!(direct, convolution, "{side}x{side} under {boundary}");
        }
    }
}

#[test]
fn test_finite_border_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..20 {
        let side = rng.gen_range(3..=16);
        let mut grid = random_grid(&mut rng, side);
        let last = side - 1;
        for strategy in [Strategy::Direct, Strategy::Convolution] {
            let counts = counts(strategy, &grid, Boundary::Finite);
            for row in 0..side {
                for col in 0..side {
                    let on_row_edge = row == 0 || row == last;
                    let on_col_edge = col == 0 || col == last;
                    let max = match (on_row_edge, on_col_edge) {
                        (true, true) => 3,
                        (true, false) | (false, true) => 5,
                        (false, false) => 8,
                    };
                    assert!(counts.get(row, col) <= max);
                }
            }
        }

        // a full grid reaches every bound exactly
        grid.fill(ALIVE);
        let full = counts(Strategy::Direct, &grid, Boundary::Finite);
        assert_eq!(full.get(0, 0), 3);
        assert_eq!(full.get(0, 1), 5);
        assert_eq!(full.get(1, 1), 8);
    }
}

#[test]
fn test_block_is_still_under_both_boundaries() {
    for boundary in [Boundary::Periodic, Boundary::Finite] {
        let mut engine = GridEngine::new(64, Pattern::Block, boundary).unwrap();
        let initial = engine.grid().clone();
        engine.run(25);
        assert_eq!(engine.grid(), &initial, "{boundary}");
    }
}

#[test]
fn test_beacon_has_period_two() {
    for strategy in [Strategy::Direct, Strategy::Convolution] {
        let mut engine = GridEngine::with_strategy(36, Pattern::Beacon, Boundary::Finite, strategy).unwrap();
        assert_eq!(engine.side(), 6);
        let initial = engine.grid().clone();

        engine.step();
        assert_ne!(engine.grid(), &initial);
        assert_eq!(engine.grid().population(), 8);

        engine.step();
        assert_eq!(engine.grid(), &initial);
    }
}

#[test]
fn test_pulsar_has_period_three() {
    for boundary in [Boundary::Periodic, Boundary::Finite] {
        let mut engine = GridEngine::new(900, Pattern::Pulsar, boundary).unwrap();
        let initial = engine.grid().clone();
        for generation in 1..=9 {
            engine.step();
            assert_eq!(
                engine.grid() == &initial,
                generation % 3 == 0,
                "generation {generation} under {boundary}"
            );
        }
    }
}

fn translated(cells: &PosSet, by: golgrid::Pos, side: usize) -> PosSet {
    cells.iter().map(|&p| (p + by).wrapped(side)).collect()
}

#[test]
fn test_glider_moves_diagonally() {
    let mut engine = GridEngine::new(400, Pattern::Glider, Boundary::Periodic).unwrap();
    let side = engine.side();
    assert_eq!(side, 20);
    let initial = engine.grid().actives();

    engine.run(4);
    assert_eq!(engine.grid().actives(), translated(&initial, pos!(-1, -1), side));

    // crossing the seam keeps the shape intact, a full lap brings it home
    engine.run(4 * (side - 1));
    assert_eq!(engine.grid().actives(), initial);
}

#[test]
fn test_glider_settles_in_finite_corner() {
    let mut engine = GridEngine::new(100, Pattern::Glider, Boundary::Finite).unwrap();
    engine.run(200);
    // the dead border stops it and it freezes into a block at the origin
    let expected: PosSet = [pos!(0, 0), pos!(0, 1), pos!(1, 0), pos!(1, 1)].into_iter().collect();
    assert_eq!(engine.grid().actives(), expected);
}

#[test]
fn test_rules_only_step() {
    let mut grid = Grid::new(7);
    let mut counts = Grid::new(7);
    counts.fill(3);
    golgrid::rules::apply(&mut grid, &counts);
    assert!(grid.cells().iter().all(|&cell| cell == ALIVE));

    counts.fill(1);
    golgrid::rules::apply(&mut grid, &counts);
    assert!(grid.cells().iter().all(|&cell| cell == DEAD));
}

#[test]
fn test_steps_are_deterministic() {
    let mut a = GridEngine::with_strategy(484, Pattern::Pulsar, Boundary::Periodic, Strategy::Direct).unwrap();
    let mut b =
        GridEngine::with_strategy(484, Pattern::Pulsar, Boundary::Periodic, Strategy::Convolution).unwrap();
    for _ in 0..12 {
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.neighbor_counts(), b.neighbor_counts());
    }
}
