//! Naked single scan: cells whose candidate mask has collapsed to one digit.

use sudoku_core::{Cell, Contradiction, Digit, GridState};

/// Repeatedly commits every unlocked cell with exactly one remaining
/// candidate, until a full pass finds none left.
///
/// A cell that becomes a singleton as a side effect of another cell's commit
/// (within the same call) is picked up by the next pass rather than queued
/// explicitly, which reaches the same fixed point.
///
/// # Errors
///
/// Returns [`Contradiction::EmptyCell`] if committing a singleton empties a
/// peer's candidate mask.
pub fn run(state: &mut GridState) -> Result<bool, Contradiction> {
    let mut progressed = false;
    loop {
        // Fixed-size scratch buffer: at most 81 cells, no heap allocation.
        let mut found = [(Cell::new(0), Digit::D1); 81];
        let mut count = 0usize;
        for (cell, digit) in state.naked_singles() {
            found[count] = (cell, digit);
            count += 1;
        }
        if count == 0 {
            return Ok(progressed);
        }
        for &(cell, digit) in &found[..count] {
            if !state.unlocked.test(cell.index()) {
                continue; // already committed earlier in this same pass
            }
            state.commit(cell, digit)?;
            progressed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::CandidateMask;

    #[test]
    fn commits_a_single_naked_single() {
        let mut state = GridState::new_all_candidates();
        state.candidates[Cell::new(0)] = CandidateMask::from_digit(Digit::D1);
        assert!(run(&mut state).unwrap());
        assert!(!state.unlocked.test(0));
    }

    #[test]
    fn no_progress_on_fully_open_grid() {
        let mut state = GridState::new_all_candidates();
        assert!(!run(&mut state).unwrap());
    }

    #[test]
    fn cascades_within_one_call() {
        let mut state = GridState::new_all_candidates();
        // Force cell 0 to a single candidate; its peer cell 1 has all nine
        // candidates minus D1's digit already, so committing 0 may or may
        // not cascade depending on other candidates -- here we just check
        // the direct commit happens without needing a second call.
        state.candidates[Cell::new(0)] = CandidateMask::from_digit(Digit::D2);
        assert!(run(&mut state).unwrap());
        assert_eq!(state.candidates[Cell::new(0)].single(), Some(Digit::D2));
    }
}
