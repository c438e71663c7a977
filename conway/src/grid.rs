// grid.rs - Board type for Conway's Game of Life
//
// Cells are stored row-major; `x` is the column and `y` the row. The edges
// are hard boundaries: anything outside the grid reads as dead.

use std::fmt;

use rand::Rng;

use crate::patterns::Pattern;

/// Moore neighbourhood offsets, the cell itself excluded.
const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width  : usize,
    height : usize,
    cells  : Vec<bool>,
}

impl Board {
    /// An all-dead board. Panics on a zero dimension.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must be at least 1x1, got {width}x{height}");
        Self { width, height, cells: vec![false; width * height] }
    }

    /// A board where every cell is independently alive with probability 1/2.
    pub fn random(width: usize, height: usize) -> Self {
        Self::random_with(width, height, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut board = Self::new(width, height);
        for cell in board.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
        board
    }

    pub fn create(width: usize, height: usize, randomize: bool) -> Self {
        if randomize { Self::random(width, height) } else { Self::new(width, height) }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        self.contains(x, y).then(|| y as usize * self.width + x as usize)
    }

    /// Cell state, or `None` when `(x, y)` is off the board.
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Writes a cell; returns false (and does nothing) when off the board.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flips one cell. Off-board coordinates are a no-op returning false.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    pub fn count_alive_neighbors(&self, x: i64, y: i64) -> u8 {
        NEIGHBOURS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }

    /// Computes the following generation (B3/S23) into a fresh board.
    /// Reads only from `self`, so every cell sees the same snapshot.
    pub fn next_generation(&self) -> Board {
        let mut next = Board::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let (xi, yi) = (x as i64, y as i64);
                let count = self.count_alive_neighbors(xi, yi);

                next.cells[y * self.width + x] = match (self.is_alive(xi, yi), count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
            }
        }
        next
    }

    /// Sets every pattern cell alive relative to the anchor. Cells that land
    /// off the board are dropped; the rest of the board is left as is.
    pub fn stamp(&mut self, pattern: &Pattern, anchor_x: i64, anchor_y: i64) {
        for &(dx, dy) in pattern.cells {
            self.set(anchor_x + dx as i64, anchor_y + dy as i64, true);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Coordinates `(x, y)` of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
