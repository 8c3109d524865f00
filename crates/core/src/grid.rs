//! Grid module - the 4x4 tile matrix and the slide/merge algorithm
//!
//! The grid stores tile values in a flat row-major array (`row * 4 + col`).
//! `0` is an empty cell; every other value is a power of two.
//!
//! A move is expressed as four independent *lines*. A line is always read in
//! grid order (rows left to right, columns top to bottom) and merged with
//! [`slide_line`]. For `Right` and `Down` the merged tiles are then packed
//! against the far end, so `[2, 2, 2, 0]` moved right becomes `[0, 0, 4, 2]`.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Direction, Tile, CELL_COUNT, GRID_SIZE, SPAWN_FOUR_PERCENT};

/// One line of four cells in grid order.
pub type Line = [Tile; GRID_SIZE];

/// Result of sliding a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSlide {
    pub line: Line,
    /// Sum of all tiles produced by merges.
    pub gained: u32,
    /// Number of merges performed.
    pub merges: u32,
}

/// Compact non-zero values toward index 0, then merge equal neighbours once.
///
/// Merging runs from index 0 outward and a merged tile never merges again in
/// the same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_line(line: Line) -> LineSlide {
    let compact: ArrayVec<Tile, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut out = [0; GRID_SIZE];
    let mut gained = 0;
    let mut merges = 0;
    let mut write = 0;
    let mut read = 0;

    while read < compact.len() {
        let value = compact[read];
        if read + 1 < compact.len() && compact[read + 1] == value {
            let merged = value * 2;
            out[write] = merged;
            gained += merged;
            merges += 1;
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    LineSlide {
        line: out,
        gained,
        merges,
    }
}

/// Move the non-zero prefix of a slid line to the end, keeping its order.
fn align_trailing(line: Line) -> Line {
    let filled = line.iter().take_while(|&&v| v != 0).count();
    let mut out = [0; GRID_SIZE];
    out[GRID_SIZE - filled..].copy_from_slice(&line[..filled]);
    out
}

/// Result of shifting the whole grid in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub grid: Grid,
    pub gained: u32,
    pub merges: u32,
    /// True when any cell differs from the source grid.
    pub moved: bool,
}

/// The 4x4 game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Tile; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from rows (top to bottom)
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = value;
            }
        }
        grid
    }

    /// Copy the grid out as rows (top to bottom)
    pub fn rows(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (i, &value) in self.cells.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = value;
        }
        rows
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get the value at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the value at `(row, col)`, returns false when out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Coordinates of every empty cell in row-major order (stack-only)
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True if two horizontally or vertically adjacent cells hold the same tile
    pub fn can_merge(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row * GRID_SIZE + col];
                if value == 0 {
                    continue;
                }
                if col + 1 < GRID_SIZE && self.cells[row * GRID_SIZE + col + 1] == value {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[(row + 1) * GRID_SIZE + col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// True if some direction would change the grid
    pub fn has_moves(&self) -> bool {
        !self.is_full() || self.can_merge()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Exchange two cells, returns false when either is out of bounds
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        match (Self::index(a.0, a.1), Self::index(b.0, b.1)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Flat index of position `k` in line `i`: a row for horizontal moves,
    /// a column for vertical ones.
    #[inline(always)]
    fn line_index(direction: Direction, i: usize, k: usize) -> usize {
        if direction.is_horizontal() {
            i * GRID_SIZE + k
        } else {
            k * GRID_SIZE + i
        }
    }

    /// Read line `i` for `direction` in grid order
    pub fn line(&self, direction: Direction, i: usize) -> Line {
        let mut line = [0; GRID_SIZE];
        for (k, slot) in line.iter_mut().enumerate() {
            *slot = self.cells[Self::line_index(direction, i, k)];
        }
        line
    }

    fn write_line(&mut self, direction: Direction, i: usize, line: &Line) {
        for (k, &value) in line.iter().enumerate() {
            self.cells[Self::line_index(direction, i, k)] = value;
        }
    }

    /// Slide and merge every line toward `direction` without spawning
    pub fn shift(&self, direction: Direction) -> ShiftResult {
        let mut grid = *self;
        let mut gained = 0;
        let mut merges = 0;

        for i in 0..GRID_SIZE {
            let slid = slide_line(self.line(direction, i));
            let line = match direction {
                Direction::Right | Direction::Down => align_trailing(slid.line),
                Direction::Left | Direction::Up => slid.line,
            };
            grid.write_line(direction, i, &line);
            gained += slid.gained;
            merges += slid.merges;
        }

        ShiftResult {
            grid,
            gained,
            merges,
            moved: grid != *self,
        }
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the placed `(row, col, value)`, or `None` on a full grid.
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize, Tile)> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_range(0..100) < SPAWN_FOUR_PERCENT {
            4
        } else {
            2
        };
        self.set(row, col, value);
        Some((row, col, value))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 3), Some(3));
        assert_eq!(Grid::index(1, 0), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_slide_line_merges_pair() {
        let slid = slide_line([2, 2, 0, 0]);
        assert_eq!(slid.line, [4, 0, 0, 0]);
        assert_eq!(slid.gained, 4);
        assert_eq!(slid.merges, 1);
    }

    #[test]
    fn test_slide_line_merges_once_per_tile() {
        assert_eq!(slide_line([2, 2, 2, 2]).line, [4, 4, 0, 0]);
        assert_eq!(slide_line([4, 4, 8, 0]).line, [8, 8, 0, 0]);
        assert_eq!(slide_line([2, 2, 2, 0]).line, [4, 2, 0, 0]);
    }

    #[test]
    fn test_slide_line_compacts_gaps() {
        let slid = slide_line([0, 2, 0, 4]);
        assert_eq!(slid.line, [2, 4, 0, 0]);
        assert_eq!(slid.gained, 0);
        assert_eq!(slid.merges, 0);
    }

    #[test]
    fn test_line_orientation_follows_direction() {
        let grid = Grid::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        assert_eq!(grid.line(Direction::Left, 0), [1, 2, 3, 4]);
        assert_eq!(grid.line(Direction::Right, 0), [1, 2, 3, 4]);
        assert_eq!(grid.line(Direction::Up, 1), [2, 6, 10, 14]);
        assert_eq!(grid.line(Direction::Down, 1), [2, 6, 10, 14]);
    }

    #[test]
    fn test_shift_right_merges_in_row_order() {
        let grid = Grid::from_rows([[2, 2, 2, 0], [0, 4, 4, 4], [0; 4], [0; 4]]);
        let result = grid.shift(Direction::Right);
        assert_eq!(result.grid.rows()[0], [0, 0, 4, 2]);
        assert_eq!(result.grid.rows()[1], [0, 0, 8, 4]);
        assert_eq!(result.gained, 12);
        assert_eq!(result.merges, 2);
        assert!(result.moved);

        let left = grid.shift(Direction::Left);
        assert_eq!(left.grid.rows()[0], [4, 2, 0, 0]);
        assert_eq!(left.grid.rows()[1], [8, 4, 0, 0]);
    }

    #[test]
    fn test_shift_down_merges_in_column_order() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0; 4]]);
        let result = grid.shift(Direction::Down);
        let column: Vec<Tile> = result.grid.rows().iter().map(|row| row[0]).collect();
        assert_eq!(column, [0, 0, 4, 2]);
        assert_eq!(result.gained, 4);

        let up = grid.shift(Direction::Up);
        let column: Vec<Tile> = up.grid.rows().iter().map(|row| row[0]).collect();
        assert_eq!(column, [4, 2, 0, 0]);
    }

    #[test]
    fn test_align_trailing_keeps_order() {
        assert_eq!(align_trailing([4, 2, 0, 0]), [0, 0, 4, 2]);
        assert_eq!(align_trailing([8, 4, 2, 16]), [8, 4, 2, 16]);
        assert_eq!(align_trailing([0; 4]), [0; 4]);
    }

    #[test]
    fn test_shift_unchanged_is_not_moved() {
        let grid = Grid::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let result = grid.shift(Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.grid, grid);
    }

    #[test]
    fn test_can_merge_detects_vertical_pairs() {
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 4],
        ]);
        assert!(grid.can_merge());

        let stuck = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!stuck.can_merge());
        assert!(!stuck.has_moves());
    }

    #[test]
    fn test_spawn_random_fills_only_empty_cells() {
        let mut rng = SimpleRng::new(99);
        let mut grid = Grid::new();
        for _ in 0..16 {
            let (row, col, value) = grid.spawn_random(&mut rng).unwrap();
            assert!(value == 2 || value == 4);
            assert_eq!(grid.get(row, col), Some(value));
        }
        assert!(grid.is_full());
        assert_eq!(grid.spawn_random(&mut rng), None);
    }

    #[test]
    fn test_spawn_distribution_is_mostly_twos() {
        let mut rng = SimpleRng::new(2024);
        let mut fours = 0;
        for _ in 0..2000 {
            let mut grid = Grid::new();
            if let Some((_, _, 4)) = grid.spawn_random(&mut rng) {
                fours += 1;
            }
        }
        // Expected ~200.
        assert!(fours > 100 && fours < 300, "fours = {}", fours);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = [[0, 2, 0, 0], [0, 0, 4, 0], [8, 0, 0, 0], [0, 0, 0, 16]];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.empty_count(), 12);
        assert_eq!(grid.max_tile(), 16);
    }
}
