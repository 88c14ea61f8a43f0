//! The 81 parallel candidate masks, laid out for SIMD-width access.

use std::ops::{Index, IndexMut};

use crate::{Cell, CandidateMask};

/// Number of candidate slots actually stored: 81 cells padded up to the next
/// multiple of 16 so that a SIMD backend can load full-width lanes without a
/// bounds check on the last partial lane.
const SLOT_COUNT: usize = 96;

/// 81 parallel 9-bit candidate masks, one per cell, 64-byte aligned and
/// padded to a multiple of 16 elements.
///
/// Slots `81..96` are padding: always [`CandidateMask::EMPTY`], never read
/// through [`Cell`]-indexed access, present only so that a SIMD
/// implementation can load/store in full 16-lane chunks.
///
/// # Examples
///
/// ```
/// use sudoku_core::{CandidateGrid, Cell, CandidateMask, Digit};
///
/// let mut grid = CandidateGrid::new_all_candidates();
/// assert_eq!(grid[Cell::new(0)], CandidateMask::FULL);
///
/// grid[Cell::new(0)] = CandidateMask::from_digit(Digit::D5);
/// assert_eq!(grid[Cell::new(0)].single(), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(align(64))]
pub struct CandidateGrid {
    slots: [CandidateMask; SLOT_COUNT],
}

impl CandidateGrid {
    /// Builds a grid where every cell has all nine candidates.
    #[must_use]
    pub const fn new_all_candidates() -> Self {
        Self {
            slots: [CandidateMask::FULL; SLOT_COUNT],
        }
    }

    /// Builds a grid where every cell has no candidates.
    #[must_use]
    pub const fn new_empty() -> Self {
        Self {
            slots: [CandidateMask::EMPTY; SLOT_COUNT],
        }
    }

    /// Returns the union of the candidate masks at `cells`.
    #[must_use]
    pub fn union_of(&self, cells: [u8; 3]) -> CandidateMask {
        cells
            .into_iter()
            .map(|c| self.slots[c as usize])
            .fold(CandidateMask::EMPTY, |acc, m| acc | m)
    }

    /// Returns an iterator over `(Cell, CandidateMask)` for all 81 live
    /// cells, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CandidateMask)> + '_ {
        (0..81u8).map(|i| (Cell::new(i), self.slots[i as usize]))
    }
}

impl Index<Cell> for CandidateGrid {
    type Output = CandidateMask;

    fn index(&self, cell: Cell) -> &CandidateMask {
        &self.slots[cell.index() as usize]
    }
}

impl IndexMut<Cell> for CandidateGrid {
    fn index_mut(&mut self, cell: Cell) -> &mut CandidateMask {
        &mut self.slots[cell.index() as usize]
    }
}
