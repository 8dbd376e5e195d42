//! The 3×3 grid.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! `Grid` is a small `Copy` value. The owning application keeps the live
//! grid and hands snapshots to the evaluator and the search.

use std::ops::{Deref, DerefMut, Index};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::mark::{Cell, Mark};

/// Number of cells on the grid.
pub const CELL_COUNT: usize = 9;

/// A 3×3 tic-tac-toe grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from a slice of cells.
    ///
    /// Fails with `InvalidInput` unless the slice holds exactly 9 cells.
    ///
    /// ```
    /// use tictactoe_engine::core::{Grid, Mark};
    ///
    /// let cells = [Some(Mark::X), None, None, None, Some(Mark::O), None, None, None, None];
    /// let grid = Grid::from_cells(&cells).unwrap();
    /// assert_eq!(grid[0], Some(Mark::X));
    /// assert!(Grid::from_cells(&cells[..8]).is_err());
    /// ```
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            EngineError::invalid_input(format!(
                "grid must have {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    /// All cells in index order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Contents of a cell, or `None` if the index is off the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check whether a cell is empty.
    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marks on the grid.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// Place a mark on an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<()> {
        match self.get(index) {
            None => Err(EngineError::CellOutOfRange(index)),
            Some(Some(_)) => Err(EngineError::CellOccupied(index)),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    /// Copy of this grid with `mark` placed at `index`.
    pub fn with(mut self, index: usize, mark: Mark) -> Result<Self> {
        self.place(index, mark)?;
        Ok(self)
    }

    /// Place a mark for the lifetime of the returned guard.
    ///
    /// The cell is cleared again when the guard drops. `index` must be an
    /// empty cell.
    pub(crate) fn trial(&mut self, index: usize, mark: Mark) -> Trial<'_> {
        debug_assert!(self.cells[index].is_none(), "trial on occupied cell {}", index);
        self.cells[index] = Some(mark);
        Trial { grid: self, index }
    }
}

/// Scoped trial placement. See [`Grid::trial`].
pub(crate) struct Trial<'a> {
    grid: &'a mut Grid,
    index: usize,
}

impl Deref for Trial<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.grid.cells[self.index] = None;
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl FromStr for Grid {
    type Err = EngineError;

    /// Parse 9 cell symbols: `X`/`O` for marks, `.`, `_` or `-` for empty.
    /// Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, c)| match c {
                '.' | '_' | '-' => Ok(None),
                _ => Mark::from_symbol(c).map(Some).ok_or_else(|| {
                    EngineError::invalid_input(format!(
                        "invalid cell symbol '{}' at position {}",
                        c, position
                    ))
                }),
            })
            .collect::<Result<Vec<Cell>>>()?;

        Self::from_cells(&cells)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = cell.map_or('.', Mark::symbol);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid.empty_cells().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "XX. .O. ..O".parse().unwrap();
        assert_eq!(grid[0], Some(Mark::X));
        assert_eq!(grid[4], Some(Mark::O));
        assert_eq!(grid[2], None);
        assert_eq!(grid.to_string(), "XX.\n.O.\n..O");

        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let short = "XO.".parse::<Grid>().unwrap_err();
        assert!(short.is_invalid_input());

        let long = "XO.XO.XO.X".parse::<Grid>().unwrap_err();
        assert!(long.is_invalid_input());

        let bad = "XO.XZ.XO.".parse::<Grid>().unwrap_err();
        assert!(bad.to_string().contains("'Z'"));
    }

    #[test]
    fn test_place() {
        let mut grid = Grid::new();
        grid.place(4, Mark::X).unwrap();
        assert_eq!(grid[4], Some(Mark::X));
        assert_eq!(grid.place(4, Mark::O), Err(EngineError::CellOccupied(4)));
        assert_eq!(grid.place(9, Mark::O), Err(EngineError::CellOutOfRange(9)));
        assert_eq!(grid.count(Mark::X), 1);
        assert_eq!(grid.count(Mark::O), 0);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let grid = Grid::new();
        let next = grid.with(0, Mark::O).unwrap();
        assert_eq!(grid, Grid::new());
        assert_eq!(next[0], Some(Mark::O));
    }

    #[test]
    fn test_trial_is_undone_on_drop() {
        let mut grid: Grid = "X........".parse().unwrap();
        let before = grid;
        {
            let trial = grid.trial(8, Mark::O);
            assert_eq!(trial[8], Some(Mark::O));
            assert_eq!(trial.occupied_count(), 2);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Grid::new();
        assert_eq!(grid.get(8), Some(None));
        assert_eq!(grid.get(9), None);
        assert!(grid.is_empty_at(3));
        assert!(!grid.is_empty_at(12));
    }

    #[test]
    fn test_grid_serialization() {
        let grid: Grid = "XO.......".parse().unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }
}
