//! One node of the guess/backtrack search stack.

use crate::{CandidateGrid, CandidateMask, Cell, Contradiction, Digit, containers::BitField128, triad::ALL_TRIADS};

/// One frame of the fixed-size backtracking stack.
///
/// A `GridState` is plain, `Copy`-free but byte-wise-copyable data: pushing a
/// new guess frame is a clone of the parent followed by an elimination (see
/// [`commit`](Self::commit) and the guesser in `sudoku-solver`). Nothing here
/// owns a heap allocation or borrows anything, so frames can live in a fixed
/// `[GridState; 34]` array owned by the caller.
///
/// # Invariants
///
/// 1. For every cell `i`, `unlocked.test(i) == (candidates[i].len() > 1)`;
///    when false, `candidates[i]` has exactly one bit set.
/// 2. For every committed cell `i` with digit `d`, no peer of `i` has `d` in
///    its candidate mask.
/// 3. For every unit and every digit set in at least one cell of that unit,
///    the digit is a candidate somewhere in the unit (a violation is a
///    [`Contradiction::MissingDigit`]).
/// 4. For every triad `t`, `triads_unlocked[kind].bit(t)` implies the union
///    of `t`'s three candidate masks has more than 3 members.
/// 5. The stack is LIFO: the frame at depth `k > 0` has exactly one pending
///    alternate eliminated relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(align(64))]
pub struct GridState {
    /// Current candidate masks, one per cell.
    pub candidates: CandidateGrid,
    /// Cells with more than one candidate (not yet fixed).
    pub unlocked: BitField128,
    /// Cells whose candidates changed since the last triad pass.
    pub updated: BitField128,
    /// Triads whose candidate-set union still has more than 3 candidates:
    /// `triads_unlocked[0]` for row triads, `triads_unlocked[1]` for column
    /// triads, each a 27-bit bitmap in the low bits of a `u32`.
    pub triads_unlocked: [u32; 2],
    /// Depth of this frame in the search stack.
    pub stackpointer: u8,
    /// Sticky flag set once a second solution is confirmed while searching
    /// under the caller's "find multiple solutions" rule.
    pub multiple_solutions_exist: bool,
}

impl GridState {
    /// Builds the root frame: every cell unlocked with all nine candidates,
    /// everything marked updated, every triad unlocked.
    #[must_use]
    pub const fn new_all_candidates() -> Self {
        Self {
            candidates: CandidateGrid::new_all_candidates(),
            unlocked: BitField128::FULL,
            updated: BitField128::FULL,
            triads_unlocked: [ALL_TRIADS, ALL_TRIADS],
            stackpointer: 0,
            multiple_solutions_exist: false,
        }
    }

    /// Returns whether every cell is locked (the grid is fully solved).
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// Commits `digit` as the sole value of `cell`.
    ///
    /// Clears `cell` from `unlocked`, sets its candidate mask to the
    /// singleton `digit`, marks `cell` and its peers as updated, and removes
    /// `digit` from every unlocked peer's candidate mask.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction::EmptyCell`] if eliminating `digit` empties a
    /// peer's candidate mask.
    pub fn commit(&mut self, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
        self.unlocked.clear(cell.index());
        self.candidates[cell] = CandidateMask::from_digit(digit);

        let peers = cell.peers();
        self.updated |= peers;
        self.updated.set(cell.index());

        for peer_idx in peers.iter() {
            if !self.unlocked.test(peer_idx) {
                continue;
            }
            let peer = Cell::new(peer_idx);
            let mask = self.candidates[peer] & !CandidateMask::from_digit(digit);
            if mask == self.candidates[peer] {
                continue;
            }
            self.candidates[peer] = mask;
            if mask.is_empty() {
                return Err(Contradiction::EmptyCell);
            }
        }
        Ok(())
    }

    /// Returns every unlocked cell whose candidate mask has collapsed to a
    /// single digit, in ascending cell order.
    pub fn naked_singles(&self) -> impl Iterator<Item = (Cell, Digit)> + '_ {
        self.unlocked.iter().filter_map(move |i| {
            let cell = Cell::new(i);
            self.candidates[cell].single().map(|d| (cell, d))
        })
    }

    /// Returns whether any unlocked cell has an empty candidate mask.
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.unlocked
            .iter()
            .any(|i| self.candidates[Cell::new(i)].is_empty())
    }
}
