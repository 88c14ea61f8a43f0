//! Constraint-propagation Sudoku solver with guess/backtrack.
//!
//! This crate implements the propagation loop and the five algorithms it
//! coordinates, operating on the data structures from `sudoku-core`:
//!
//! - [`naked_single`] — cells whose candidate mask has collapsed to one
//!   digit.
//! - [`hidden_single`] — digits confined to exactly one cell of a row,
//!   column, or box.
//! - [`triad_engine`] — box/line intersection ("triad") resolution and
//!   locked-candidate elimination.
//! - [`bug_detector`] — the end-game bi-value universal grave pivot.
//! - [`guesser`] — triad-preferred / bivalue-fallback guess selection and
//!   the fixed-size search-stack push.
//!
//! These are coordinated by [`solve`], the public entry point, in strict
//! priority order (naked > hidden > triad > BUG > guess) on a caller-owned
//! [`GridState`](sudoku_core::GridState) stack of fixed depth
//! [`driver::MAX_DEPTH`].
//!
//! # Scheduling model
//!
//! Per-puzzle single-threaded, cooperative within the puzzle: `solve`
//! performs no suspension, no I/O, no blocking, and owns no state beyond its
//! arguments. A caller running one puzzle per worker thread gives each
//! worker its own `stack` and shares only a [`Statistics`] instance across
//! workers, updated with relaxed atomics.
//!
//! File I/O, CLI flag parsing, thread-pool dispatch, and the textual grid
//! verifier that might check `solve`'s output against an independent oracle
//! are all the caller's concern; this crate only ever sees in-memory byte
//! arrays.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::GridState;
//! use sudoku_solver::{Rules, Statistics, driver::MAX_DEPTH, solve};
//!
//! let input: [u8; 81] =
//!     *b"000000010400000000020000000000050407008000300001090000300400200050100000000806000";
//! let mut output = [0u8; 81];
//! let mut stack: Box<[GridState; MAX_DEPTH]> =
//!     Box::new(std::array::from_fn(|_| GridState::new_all_candidates()));
//! let stats = Statistics::new();
//!
//! let status = solve(&input, &mut output, &mut stack, Rules::Regular, 0, &stats).unwrap();
//! assert!(status.solved);
//! ```

pub mod bug_detector;
pub mod driver;
mod error;
pub mod guesser;
pub mod hidden_single;
mod initializer;
pub mod naked_single;
mod rules;
mod stats;
pub mod triad_engine;

pub use self::{driver::solve, error::SolveError, rules::{Rules, Status}, stats::Statistics};
