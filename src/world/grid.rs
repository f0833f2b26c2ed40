use crate::{isqrt, pos, ConfigError, Pos, PosSet, ALIVE, DEAD};

/// Square, row-major array of 0/1 cells.
///
/// The same type holds neighbor counts, in which case values range over `0..=8`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    side: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![DEAD; side * side],
        }
    }

    /// builds a grid from explicit rows, which must form a square.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ConfigError>
    where
        R: AsRef<[u8]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in &rows {
            let row = row.as_ref();
            if row.len() != side {
                return Err(ConfigError::NotSquare {
                    rows: side,
                    len: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side);
        row * self.side + col
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    /// `None` when the position falls outside the grid.
    pub fn get_pos(&self, Pos { row, col }: Pos) -> Option<u8> {
        let side = self.side as i32;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(self.get(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == ALIVE
    }

    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // `chunks` panics on zero, an empty grid simply has no rows
        self.cells.chunks(self.side.max(1))
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    pub fn actives(&self) -> PosSet {
        self.rows()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().filter_map(move |(col, &cell)| {
                    (cell == ALIVE).then_some(pos!(row as i32, col as i32))
                })
            })
            .collect()
    }
}

/// Side of the square grid for a requested population capacity.
///
/// The capacity is first rounded down to a perfect square and the side is the root of that square.
pub fn side_for_capacity(capacity: usize) -> Result<usize, ConfigError> {
    if capacity < 1 {
        return Err(ConfigError::InvalidCapacity { capacity });
    }
    let root = isqrt(capacity);
    let square = root * root;
    Ok(isqrt(square))
}
