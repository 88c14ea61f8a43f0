//! Fatal errors raised by [`solve`](crate::solve).
//!
//! Contradictions are not fatal — they are recovered locally by backtracking
//! and never reach this type. Everything here is a programmer/tuning error,
//! not a puzzle-validity error.

/// A fatal, non-recoverable error from [`solve`](crate::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The search stack exceeded its fixed depth.
    ///
    /// The reference corpus observed a maximum depth of 28 across a 17-clue
    /// benchmark corpus against a cap of 34; exceeding the cap indicates
    /// either a malformed puzzle or a cap tuned too low, not a bug in the
    /// propagation logic.
    #[display("search stack exceeded its fixed depth")]
    StackOverflow,
}
