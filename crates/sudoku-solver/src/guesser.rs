//! Guess selection and the fixed-size search-stack push.

use sudoku_core::{CandidateMask, Cell, GridState, triad::{TriadKind, triad_cells}};

use crate::{SolveError, Statistics, driver::MAX_DEPTH, triad_engine};

struct GuessPlan {
    cells: [u8; 3],
    len: u8,
    child_removes: CandidateMask,
    parent_removes: CandidateMask,
}

/// Pushes a new guess frame onto the stack and returns its index.
///
/// Prefers a triad-based split (see [`find_triad_guess`]); falls back to a
/// bivalue-cell split (see [`find_bivalue_guess`]) when no suitable triad
/// exists. In either case the child frame is a byte-wise clone of the parent
/// with one branch eliminated, and the parent keeps the other branch
/// eliminated in place, so the two frames together cover every possibility
/// that was legal before the guess.
///
/// # Errors
///
/// Returns [`SolveError::StackOverflow`] if the stack is already at
/// [`MAX_DEPTH`].
pub fn guess(stack: &mut [GridState; MAX_DEPTH], sp: usize, stats: &Statistics) -> Result<usize, SolveError> {
    if sp + 1 >= MAX_DEPTH {
        log::error!("search stack exceeded depth {MAX_DEPTH} at sp={sp}");
        return Err(SolveError::StackOverflow);
    }

    let plan = find_triad_guess(&stack[sp]).unwrap_or_else(|| find_bivalue_guess(&stack[sp]));

    stack[sp + 1] = stack[sp].clone();
    stack[sp + 1].stackpointer = (sp + 1) as u8;
    apply(&mut stack[sp + 1], &plan, plan.child_removes);
    apply(&mut stack[sp], &plan, plan.parent_removes);

    stats.record_guesses();
    Ok(sp + 1)
}

fn apply(state: &mut GridState, plan: &GuessPlan, remove: CandidateMask) {
    for &cell_idx in &plan.cells[..plan.len as usize] {
        if !state.unlocked.test(cell_idx) {
            continue;
        }
        let cell = Cell::new(cell_idx);
        let before = state.candidates[cell];
        let after = before & !remove;
        if after != before {
            state.candidates[cell] = after;
            state.updated.set(cell_idx);
        }
    }
}

/// Preferred strategy: a triad with exactly 4 candidates, split evenly
/// between 2 "forced" (must-appear) digits and 2 "optional" digits, with at
/// least 2 unlocked cells. One optional digit is eliminated from the child,
/// the other from the parent; both branches remain legal.
fn find_triad_guess(state: &GridState) -> Option<GuessPlan> {
    for (kind, idx) in [(TriadKind::Row, 0usize), (TriadKind::Col, 1usize)] {
        let unlocked_bits = state.triads_unlocked[idx];
        for id in 0..27u8 {
            if unlocked_bits & (1 << id) == 0 {
                continue;
            }
            let cells = triad_cells(kind, id);
            let union = state.candidates.union_of(cells);
            if union.len() != 4 {
                continue;
            }
            let unlocked_cells = cells.iter().filter(|&&c| state.unlocked.test(c)).count();
            if unlocked_cells < 2 {
                continue;
            }
            let must = triad_engine::must_mask(state, kind, id);
            if must.len() != 2 {
                continue;
            }
            let optional = union & !must;
            if optional.len() != 2 {
                continue;
            }
            let mut digits = optional.iter();
            let parent_digit = digits.next().expect("optional has 2 members");
            let child_digit = digits.next().expect("optional has 2 members");
            return Some(GuessPlan {
                cells,
                len: 3,
                child_removes: CandidateMask::from_digit(child_digit),
                parent_removes: CandidateMask::from_digit(parent_digit),
            });
        }
    }
    None
}

/// Fallback strategy: the first unlocked bivalue cell, or (if none exists)
/// the unlocked cell with the fewest candidates. The child keeps only the
/// numerically highest candidate digit; the parent eliminates that digit,
/// keeping the rest.
fn find_bivalue_guess(state: &GridState) -> GuessPlan {
    let bivalue = state.unlocked.iter().find(|&i| state.candidates[Cell::new(i)].len() == 2);
    let chosen = bivalue.unwrap_or_else(|| {
        state
            .unlocked
            .iter()
            .min_by_key(|&i| state.candidates[Cell::new(i)].len())
            .expect("guess requested with no unlocked cells")
    });

    let mask = state.candidates[Cell::new(chosen)];
    let highest = mask.iter().last().expect("unlocked cell has at least one candidate");

    GuessPlan {
        cells: [chosen, chosen, chosen],
        len: 1,
        child_removes: mask & !CandidateMask::from_digit(highest),
        parent_removes: CandidateMask::from_digit(highest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::Digit;

    #[test]
    fn bivalue_fallback_splits_a_cell_in_two() {
        let mut state = GridState::new_all_candidates();
        state.candidates[Cell::new(0)] = CandidateMask::from_digit(Digit::D3) | CandidateMask::from_digit(Digit::D7);
        let mut stack: [GridState; MAX_DEPTH] = std::array::from_fn(|_| GridState::new_all_candidates());
        stack[0] = state.clone();
        let stats = Statistics::new();
        let new_sp = guess(&mut stack, 0, &stats).unwrap();
        assert_eq!(new_sp, 1);
        assert_eq!(stack[1].candidates[Cell::new(0)].single(), Some(Digit::D7));
        assert!(!stack[0].candidates[Cell::new(0)].contains(Digit::D7));
        assert!(stack[0].candidates[Cell::new(0)].contains(Digit::D3));
        assert_eq!(stats.guesses(), 1);
    }

    #[test]
    fn stack_overflow_is_reported() {
        let mut stack: [GridState; MAX_DEPTH] = std::array::from_fn(|_| GridState::new_all_candidates());
        let stats = Statistics::new();
        let result = guess(&mut stack, MAX_DEPTH - 1, &stats);
        assert_eq!(result, Err(SolveError::StackOverflow));
    }
}
