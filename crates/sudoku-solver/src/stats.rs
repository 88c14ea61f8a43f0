//! Cross-worker solving statistics.
//!
//! Per-puzzle state ([`GridState`](sudoku_core::GridState)) is exclusive to
//! one worker (see the crate-level concurrency notes); the only state shared
//! across workers is this counter set, and every update is a relaxed atomic
//! add — counters are monotone and their exact interleaving across workers
//! is not part of the contract, only their final totals.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic, monotone-increasing solving counters.
///
/// # Examples
///
/// ```
/// use sudoku_solver::Statistics;
///
/// let stats = Statistics::new();
/// stats.record_solved();
/// stats.record_guesses();
/// assert_eq!(stats.solved(), 1);
/// assert_eq!(stats.guesses(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Statistics {
    solved: AtomicU64,
    unsolved: AtomicU64,
    no_guess: AtomicU64,
    guesses: AtomicU64,
    trackbacks: AtomicU64,
    past_naked: AtomicU64,
    triads_resolved: AtomicU64,
    triad_updates: AtomicU64,
    digits_entered_and_retracted: AtomicU64,
    bug_count: AtomicU64,
    non_unique: AtomicU64,
    verified: AtomicU64,
    not_verified: AtomicU64,
}

macro_rules! counter {
    ($field:ident, $record:ident, $get:ident) => {
        #[doc = concat!("Increments the `", stringify!($field), "` counter.")]
        pub fn $record(&self) {
            self.$field.fetch_add(1, Ordering::Relaxed);
        }

        #[doc = concat!("Returns the current `", stringify!($field), "` total.")]
        #[must_use]
        pub fn $get(&self) -> u64 {
            self.$field.load(Ordering::Relaxed)
        }
    };
}

impl Statistics {
    /// Builds a fresh counter set, all zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solved: AtomicU64::new(0),
            unsolved: AtomicU64::new(0),
            no_guess: AtomicU64::new(0),
            guesses: AtomicU64::new(0),
            trackbacks: AtomicU64::new(0),
            past_naked: AtomicU64::new(0),
            triads_resolved: AtomicU64::new(0),
            triad_updates: AtomicU64::new(0),
            digits_entered_and_retracted: AtomicU64::new(0),
            bug_count: AtomicU64::new(0),
            non_unique: AtomicU64::new(0),
            verified: AtomicU64::new(0),
            not_verified: AtomicU64::new(0),
        }
    }

    counter!(solved, record_solved, solved);
    counter!(unsolved, record_unsolved, unsolved);
    counter!(no_guess, record_no_guess, no_guess);
    counter!(guesses, record_guesses, guesses);
    counter!(trackbacks, record_trackback, trackbacks);
    counter!(past_naked, record_past_naked, past_naked);
    counter!(triads_resolved, record_triads_resolved, triads_resolved);
    counter!(triad_updates, record_triad_update, triad_updates);
    counter!(
        digits_entered_and_retracted,
        record_digit_retracted,
        digits_entered_and_retracted
    );
    counter!(bug_count, record_bug_count, bug_count);
    counter!(non_unique, record_non_unique, non_unique);
    counter!(verified, record_verified, verified);
    counter!(not_verified, record_not_verified, not_verified);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.solved(), 0);
        assert_eq!(stats.guesses(), 0);
    }

    #[test]
    fn counters_accumulate() {
        let stats = Statistics::new();
        stats.record_trackback();
        stats.record_trackback();
        assert_eq!(stats.trackbacks(), 2);
    }
}
