//! End-game bi-value universal grave (BUG) recognition and pivot resolution.

use sudoku_core::{Cell, Contradiction, GridState, ROWS};

use crate::Statistics;

/// Maximum unlocked-cell count above which a BUG scan is not worth running:
/// the probability of the pattern is negligible and the scan cost is not.
const MAX_UNLOCKED_FOR_SCAN: u32 = 23;

/// Looks for the bi-value universal grave pattern among the unlocked cells.
///
/// If every unlocked cell but one is bivalue, and the exception has exactly
/// three candidates, exactly one of those three digits will appear an odd
/// number of times across the exception's row (the BUG pattern forces every
/// other digit to appear an even number of times); that digit is the forced
/// value and is committed directly, without guessing.
///
/// If every unlocked cell is bivalue, the grid already has at least two
/// solutions (every bivalue cell could independently flip); this is recorded
/// via [`GridState::multiple_solutions_exist`] and the caller proceeds to
/// guess. This branch never increments `bug_count`: only an actual pivot
/// resolution does (see the original reference's `schoku.cpp`, the `N <= 23`
/// branch around lines 2904-2966: `bug_count` is incremented only inside the
/// `if ( digit )` arm after a pivot digit is found, not in the
/// `sum2 == N` / `multiple_solutions_exist` arm).
///
/// # Errors
///
/// Returns [`Contradiction::EmptyCell`] if committing the pivot digit empties
/// a peer (should not happen by construction, but is not ruled out for
/// malformed input).
pub fn run(state: &mut GridState, stats: &Statistics) -> Result<bool, Contradiction> {
    let unlocked_count = state.unlocked.popcount();
    if unlocked_count == 0 || unlocked_count > MAX_UNLOCKED_FOR_SCAN {
        return Ok(false);
    }

    let mut bivalue_count = 0u32;
    let mut odd_one_out: Option<Cell> = None;
    for i in state.unlocked.iter() {
        match state.candidates[Cell::new(i)].len() {
            2 => bivalue_count += 1,
            n if n > 2 => odd_one_out = Some(Cell::new(i)),
            _ => {}
        }
    }

    if bivalue_count == unlocked_count {
        state.multiple_solutions_exist = true;
        return Ok(false);
    }

    if bivalue_count + 1 != unlocked_count {
        return Ok(false);
    }
    let Some(pivot) = odd_one_out else {
        return Ok(false);
    };
    let mask = state.candidates[pivot];
    if mask.len() != 3 {
        return Ok(false);
    }

    // Only unlocked cells of the row count: a locked peer's committed digit
    // is not a candidate anymore, so it must not contribute to the tally (see
    // `schoku.cpp`'s `get_indexbits`-masked count at the same location cited
    // above).
    let row = ROWS[pivot.row() as usize];
    for digit in mask.iter() {
        let occurrences = row
            .iter()
            .filter(|&i| state.unlocked.test(i) && state.candidates[Cell::new(i)].contains(digit))
            .count();
        if occurrences == 3 {
            stats.record_bug_count();
            state.commit(pivot, digit)?;
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::{CandidateMask, Digit};

    #[test]
    fn skips_when_too_many_unlocked() {
        let mut state = GridState::new_all_candidates();
        let stats = Statistics::new();
        assert!(!run(&mut state, &stats).unwrap());
    }

    #[test]
    fn skips_when_fully_solved() {
        let mut state = GridState::new_all_candidates();
        for i in 0..81u8 {
            state.unlocked.clear(i);
        }
        let stats = Statistics::new();
        assert!(!run(&mut state, &stats).unwrap());
    }

    #[test]
    fn resolves_the_tri_valued_pivot() {
        let mut state = GridState::new_all_candidates();
        for i in 0..81u8 {
            state.unlocked.clear(i);
        }
        // Re-open row 0's first five cells: the tri-valued pivot plus four
        // bivalue cells. D3 is the odd one out, appearing in exactly 3 of the
        // 5 *unlocked* cells (the pivot and cells 3 and 4); D1 and D2 each
        // appear in only 2. Cells 5-8 stay locked with unrelated digits and
        // must not contribute to the count.
        let pivot = Cell::new(0);
        for i in 0..5u8 {
            state.unlocked.set(i);
        }
        state.candidates[pivot] = CandidateMask::from_digit(Digit::D1)
            | CandidateMask::from_digit(Digit::D2)
            | CandidateMask::from_digit(Digit::D3);
        state.candidates[Cell::new(1)] = CandidateMask::from_digit(Digit::D1) | CandidateMask::from_digit(Digit::D4);
        state.candidates[Cell::new(2)] = CandidateMask::from_digit(Digit::D2) | CandidateMask::from_digit(Digit::D5);
        state.candidates[Cell::new(3)] = CandidateMask::from_digit(Digit::D3) | CandidateMask::from_digit(Digit::D6);
        state.candidates[Cell::new(4)] = CandidateMask::from_digit(Digit::D3) | CandidateMask::from_digit(Digit::D7);
        state.candidates[Cell::new(5)] = CandidateMask::from_digit(Digit::D8);
        state.candidates[Cell::new(6)] = CandidateMask::from_digit(Digit::D9);
        state.candidates[Cell::new(7)] = CandidateMask::from_digit(Digit::D3);
        state.candidates[Cell::new(8)] = CandidateMask::from_digit(Digit::D3);
        let stats = Statistics::new();
        assert!(run(&mut state, &stats).unwrap());
        assert_eq!(state.candidates[pivot].single(), Some(Digit::D3));
        assert_eq!(stats.bug_count(), 1);
    }

    #[test]
    fn all_bivalue_marks_multiple_solutions_without_double_counting() {
        let mut state = GridState::new_all_candidates();
        for i in 0..81u8 {
            state.unlocked.clear(i);
        }
        state.unlocked.set(0);
        state.unlocked.set(1);
        state.candidates[Cell::new(0)] = CandidateMask::from_digit(Digit::D1) | CandidateMask::from_digit(Digit::D2);
        state.candidates[Cell::new(1)] = CandidateMask::from_digit(Digit::D1) | CandidateMask::from_digit(Digit::D2);
        let stats = Statistics::new();
        assert!(!run(&mut state, &stats).unwrap());
        assert!(state.multiple_solutions_exist);
        assert_eq!(stats.bug_count(), 0);
    }
}
