//! Core data structures for a constraint-propagation Sudoku solver.
//!
//! This crate provides the fixed-size, allocation-free data structures the
//! solving algorithms in `sudoku-solver` operate on: a cell-centric
//! candidate grid sized for SIMD-width access, the bit-packed cell and
//! candidate sets it is built from, and the triad (box/line intersection)
//! tables the locked-candidate technique needs.
//!
//! # Architecture
//!
//! - [`Digit`] — a type-safe sudoku digit, 1-9, with a bit-positional
//!   [`Digit::mask`].
//! - [`Cell`] — an index into the 81-cell grid, with precomputed
//!   row/column/box/peer relationships ([`cell::ROWS`], [`cell::COLS`],
//!   [`cell::BOXES`], [`Cell::peers`]).
//! - [`containers::BitField128`] — an 81-bit subset of cells, two `u64`
//!   words.
//! - [`CandidateMask`] — a 9-bit subset of digits.
//! - [`CandidateGrid`] — 81 (padded to 96) parallel candidate masks, 64-byte
//!   aligned.
//! - [`triad`] — the 27 row triads and 27 column triads (box/line
//!   intersections) and their peer relationships.
//! - [`GridState`] — one frame of the guess/backtrack search stack: a
//!   candidate grid plus the locked/updated/triad-unlocked bookkeeping and
//!   the [`GridState::commit`] operation.
//! - [`Contradiction`] — the local-backtrack error raised when an
//!   elimination empties a cell.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Cell, Digit, GridState};
//!
//! let mut state = GridState::new_all_candidates();
//! state.commit(Cell::new(0), Digit::D5).unwrap();
//! assert!(!state.unlocked.test(0));
//! assert_eq!(state.candidates[Cell::new(0)].single(), Some(Digit::D5));
//! ```

mod candidate_grid;
mod cell;
pub mod containers;
mod digit;
mod error;
mod grid_state;
pub mod triad;

pub use self::{candidate_grid::CandidateGrid, cell::Cell, containers::CandidateMask, digit::Digit, error::Contradiction, grid_state::GridState};

pub use self::cell::{BOXES, COLS, PEERS, ROWS};
