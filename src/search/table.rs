//! Transposition table for memoized search.
//!
//! Scores are keyed by grid alone. Within one search the side to move and
//! the ply depth are both implied by how many marks have been added since
//! the root, so a grid maps to exactly one depth-weighted score. The table
//! is only valid for the root it was filled from and is cleared per search.

use rustc_hash::FxHashMap;

use crate::core::Grid;

/// Grid-to-score cache owned by a single search.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<Grid, i32>,
}

impl TranspositionTable {
    /// Create a table with room for `capacity` positions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Look up the exact score of a position.
    #[inline]
    #[must_use]
    pub fn get(&self, grid: &Grid) -> Option<i32> {
        self.entries.get(grid).copied()
    }

    /// Record the exact score of a position.
    #[inline]
    pub fn insert(&mut self, grid: Grid, score: i32) {
        self.entries.insert(grid, score);
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
