//! Outcome evaluation.
//!
//! A pure query over a grid snapshot: has a line been completed, is the
//! grid full, or does play continue. The search calls this at every node
//! and the session calls it after every move.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, Mark};

/// The 8 winning lines in scan order: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty cell.
    Continue,
    /// A line is completed by this mark.
    Win(Mark),
    /// Every cell is filled and no line is completed.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Continue | Outcome::Draw => None,
        }
    }
}

/// First completed line in scan order, with the mark that holds it.
#[must_use]
pub fn winning_line(grid: &Grid) -> Option<([usize; 3], Mark)> {
    LINES.iter().find_map(|&[a, b, c]| match grid[a] {
        Some(mark) if grid[b] == Some(mark) && grid[c] == Some(mark) => Some(([a, b, c], mark)),
        _ => None,
    })
}

/// Evaluate a grid.
///
/// ```
/// use tictactoe_engine::core::{Grid, Mark};
/// use tictactoe_engine::rules::{evaluate, Outcome};
///
/// let grid: Grid = "XXX OO. ...".parse().unwrap();
/// assert_eq!(evaluate(&grid), Outcome::Win(Mark::X));
/// assert_eq!(evaluate(&Grid::new()), Outcome::Continue);
/// ```
#[must_use]
pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some((_, mark)) = winning_line(grid) {
        Outcome::Win(mark)
    } else if grid.is_full() {
        Outcome::Draw
    } else {
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in Mark::ALL {
                let mut g = Grid::new();
                for index in line {
                    g.place(index, mark).unwrap();
                }
                assert_eq!(evaluate(&g), Outcome::Win(mark), "line {:?}", line);
                assert_eq!(winning_line(&g), Some((line, mark)));
            }
        }
    }

    #[test]
    fn test_draw() {
        let g = grid("XOX XOO OXX");
        assert_eq!(evaluate(&g), Outcome::Draw);
        assert!(evaluate(&g).is_terminal());
        assert_eq!(evaluate(&g).winner(), None);
    }

    #[test]
    fn test_full_grid_with_line_is_win() {
        let g = grid("XXX OOX OXO");
        assert_eq!(evaluate(&g), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_continue() {
        assert_eq!(evaluate(&grid("XX. .O. ..O")), Outcome::Continue);
        assert!(!Outcome::Continue.is_terminal());
    }

    #[test]
    fn test_scan_order_decides_double_winner() {
        // Unreachable in play: O holds the top row, X the bottom row.
        let g = grid("OOO ... XXX");
        assert_eq!(evaluate(&g), Outcome::Win(Mark::O));

        // X holds the left column, O the right one; column 0 is scanned first.
        let g = grid("X.O X.O X.O");
        assert_eq!(evaluate(&g), Outcome::Win(Mark::X));
    }
}
