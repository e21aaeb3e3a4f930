//! Board module - manages the 4x4 tile grid
//!
//! The grid holds one `u32` per cell: `0` for empty, otherwise a power of two.
//! Coordinates: `(row, col)` where row ranges 0..3 (top to bottom) and col
//! ranges 0..3 (left to right).
//!
//! Sliding, merging and the terminal check all live here; randomness and score
//! bookkeeping belong to [`crate::game_state`].

use arrayvec::ArrayVec;

use crate::types::{
    is_valid_cell, Cell, Cells, Direction, CELL_COUNT, EMPTY, GRID_SIZE, MAX_TILE,
};

/// Result of a single [`Grid::slide`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// Whether any tile changed position or value
    pub moved: bool,
    /// Sum of the values created by merges during this slide
    pub score: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// Per-call record of cells that already received a merge.
type MergeMask = [[bool; GRID_SIZE]; GRID_SIZE];

/// The game grid - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from explicit rows
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(grid.get(0, 1), Some(2));
    /// assert_eq!(grid.tile_count(), 2);
    /// ```
    pub fn from_rows(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Empty cells in row-major order.
    ///
    /// Stack-only: a 4x4 grid never has more than 16 entries.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == EMPTY {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != EMPTY)
    }

    /// Highest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Every cell is empty or a power of two in `2..=MAX_TILE`
    pub fn is_well_formed(&self) -> bool {
        self.cells.iter().flatten().all(|&v| is_valid_cell(v))
    }

    /// True if two 4-neighbouring cells hold the same value.
    ///
    /// Empty cells count too; callers that care only about tiles should check
    /// [`Grid::is_full`] first.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[row][col];
                if col + 1 < GRID_SIZE && self.cells[row][col + 1] == v {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[row + 1][col] == v {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no merge available in any direction
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    /// Slide and merge every tile toward `direction`'s edge, in place.
    ///
    /// Lines are walked from the near edge inward; the edge cell itself is
    /// skipped because it cannot move. Each cell is visited once and its tile
    /// travels until it hits the edge, an unequal tile, or a cell that already
    /// merged in this call. A merge doubles the destination and ends that
    /// tile's travel; equal tiles whose sum would pass [`MAX_TILE`] stay apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    /// use tui_2048_types::Direction;
    ///
    /// let mut grid = Grid::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    /// let outcome = grid.slide(Direction::Left);
    /// assert_eq!(grid.rows()[0], [4, 4, 0, 0]);
    /// assert_eq!(outcome.score, 8);
    /// assert_eq!(outcome.merges, 2);
    /// ```
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        let mut merged: MergeMask = [[false; GRID_SIZE]; GRID_SIZE];
        let mut outcome = SlideOutcome::default();
        let (dr, dc) = direction.delta();
        let toward_origin = dr + dc < 0;

        for outer in 0..GRID_SIZE {
            for step in 1..GRID_SIZE {
                let inner = if toward_origin {
                    step
                } else {
                    GRID_SIZE - 1 - step
                };
                let (row, col) = if direction.is_vertical() {
                    (inner, outer)
                } else {
                    (outer, inner)
                };
                self.slide_tile(row, col, dr, dc, &mut merged, &mut outcome);
            }
        }

        outcome
    }

    fn slide_tile(
        &mut self,
        row: usize,
        col: usize,
        dr: i8,
        dc: i8,
        merged: &mut MergeMask,
        outcome: &mut SlideOutcome,
    ) {
        let value = self.cells[row][col];
        if value == EMPTY {
            return;
        }

        let (mut cur_r, mut cur_c) = (row, col);
        while let Some((next_r, next_c)) = Self::step(cur_r, cur_c, dr, dc) {
            let next = self.cells[next_r][next_c];
            if next == EMPTY {
                self.cells[next_r][next_c] = value;
                self.cells[cur_r][cur_c] = EMPTY;
                cur_r = next_r;
                cur_c = next_c;
                outcome.moved = true;
            } else if let Some(doubled) = Self::merge_value(value, next, merged[next_r][next_c]) {
                self.cells[next_r][next_c] = doubled;
                self.cells[cur_r][cur_c] = EMPTY;
                merged[next_r][next_c] = true;
                outcome.score = outcome.score.saturating_add(doubled);
                outcome.merges += 1;
                outcome.moved = true;
                break;
            } else {
                break;
            }
        }
    }

    /// Value produced by merging `value` into `next`, if that merge is allowed.
    ///
    /// Refused when the cell already merged this call, the values differ, or
    /// the result would pass [`MAX_TILE`].
    #[inline(always)]
    fn merge_value(value: Cell, next: Cell, already_merged: bool) -> Option<Cell> {
        if already_merged || next != value {
            return None;
        }
        value.checked_mul(2).filter(|&doubled| doubled <= MAX_TILE)
    }

    /// Neighbour of `(row, col)` one step along `(dr, dc)`, if on the grid.
    #[inline(always)]
    fn step(row: usize, col: usize, dr: i8, dc: i8) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr as isize)?;
        let c = col.checked_add_signed(dc as isize)?;
        (r < GRID_SIZE && c < GRID_SIZE).then_some((r, c))
    }
}

/// Free-function form of [`Grid::is_terminal`].
pub fn is_terminal(grid: &Grid) -> bool {
    grid.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: [Cell; GRID_SIZE]) -> Grid {
        Grid::from_rows([cells, [0; 4], [0; 4], [0; 4]])
    }

    #[test]
    fn test_slide_merges_pair_toward_edge() {
        let mut grid = row([2, 2, 0, 0]);
        let outcome = grid.slide(Direction::Left);
        assert_eq!(grid.rows()[0], [4, 0, 0, 0]);
        assert_eq!(
            outcome,
            SlideOutcome {
                moved: true,
                score: 4,
                merges: 1
            }
        );
    }

    #[test]
    fn test_slide_four_equal_merges_twice() {
        let mut grid = row([2, 2, 2, 2]);
        let outcome = grid.slide(Direction::Left);
        assert_eq!(grid.rows()[0], [4, 4, 0, 0]);
        assert_eq!(outcome.score, 8);
        assert_eq!(outcome.merges, 2);
    }

    #[test]
    fn test_merged_cell_blocks_second_merge() {
        // 2+2 makes a 4 at col 0; the existing 4 must not merge into it.
        let mut grid = row([2, 2, 4, 0]);
        grid.slide(Direction::Left);
        assert_eq!(grid.rows()[0], [4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_stops_at_max_tile() {
        let mut grid = row([MAX_TILE, MAX_TILE, 0, 0]);
        assert!(grid.is_well_formed());
        let outcome = grid.slide(Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(grid.rows()[0], [MAX_TILE, MAX_TILE, 0, 0]);

        // The half-size pair still merges into MAX_TILE.
        let mut grid = row([MAX_TILE / 2, MAX_TILE / 2, 0, 0]);
        let outcome = grid.slide(Direction::Left);
        assert_eq!(grid.rows()[0], [MAX_TILE, 0, 0, 0]);
        assert_eq!(outcome.score, MAX_TILE);
        assert!(grid.is_well_formed());
    }

    #[test]
    fn test_oversized_tiles_slide_without_overflow() {
        let huge = 1 << 31;
        let mut grid = row([0, huge, huge, 0]);
        assert!(!grid.is_well_formed());
        let outcome = grid.slide(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.merges, 0);
        assert_eq!(grid.rows()[0], [huge, huge, 0, 0]);
    }

    #[test]
    fn test_step_stays_on_grid() {
        assert_eq!(Grid::step(0, 0, -1, 0), None);
        assert_eq!(Grid::step(0, 0, 0, -1), None);
        assert_eq!(Grid::step(3, 3, 1, 0), None);
        assert_eq!(Grid::step(3, 3, 0, 1), None);
        assert_eq!(Grid::step(1, 2, 1, 0), Some((2, 2)));
    }

    #[test]
    fn test_blocked_row_does_not_move() {
        let mut grid = row([2, 4, 8, 16]);
        let before = grid;
        let outcome = grid.slide(Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 0, 2, 2], [2; 4], [2; 4], [2, 2, 2, 0]]);
        let empty = grid.empty_cells();
        assert_eq!(empty.as_slice(), &[(0, 1), (3, 3)]);
    }
}
