//! The top-level propagation loop and the public `solve` entry point.

use sudoku_core::{BOXES, COLS, Cell, Contradiction, GridState, ROWS};

use crate::{Rules, SolveError, Statistics, Status, bug_detector, guesser, hidden_single, initializer, naked_single, triad_engine};

/// Fixed depth of the guess/backtrack search stack.
///
/// The reference corpus observed a maximum depth of 28 across a 17-clue
/// benchmark corpus; 34 leaves headroom without being large enough to matter
/// for cache behavior (see [`GridState`]'s 64-byte alignment).
pub const MAX_DEPTH: usize = 34;

/// Solves one puzzle.
///
/// `input` is 81 bytes, ASCII `'1'..='9'` for clues and anything else for
/// empty cells. On success `output` holds the solution as ASCII `'1'..='9'`;
/// on failure `output` is a copy of `input` (the caller convention). `stack`
/// is caller-owned scratch space reused across calls; its contents on return
/// are unspecified — only `output` and the returned [`Status`] are part of
/// the contract.
///
/// # Errors
///
/// Returns [`SolveError::StackOverflow`] if the search exceeds
/// [`MAX_DEPTH`]. This is the only fatal error path: contradictions are
/// recovered by backtracking and never escape as an `Err`.
pub fn solve(
    input: &[u8; 81],
    output: &mut [u8; 81],
    stack: &mut [GridState; MAX_DEPTH],
    rules: Rules,
    _line: u32,
    stats: &Statistics,
) -> Result<Status, SolveError> {
    let mut status = Status::default();

    let root = match initializer::initialize(input) {
        Ok(state) => state,
        Err(_) => {
            *output = *input;
            stats.record_unsolved();
            status.used_assumed_uniqueness = rules == Rules::Regular;
            return Ok(status);
        }
    };
    stack[0] = root;

    let mut sp: usize = 0;
    let mut unique_check_mode = false;
    let mut guesses_made = 0u32;
    // Latched once the BUG detector proves, via the all-bivalue pattern, that
    // the remaining grid admits at least two solutions (spec §4.7). A single
    // sighting anywhere in the search is enough: the property does not
    // un-become true on backtrack.
    let mut bug_confirmed_non_unique = false;

    loop {
        let back_check = sp > 0 || rules != Rules::Regular || unique_check_mode;
        let outcome = propagate(&mut stack[sp], back_check, stats);
        if stack[sp].multiple_solutions_exist && !bug_confirmed_non_unique {
            bug_confirmed_non_unique = true;
            match rules {
                Rules::Regular | Rules::FindOne => {
                    log::warn!("BUG detector found multiple solutions under an assumed-unique ruleset");
                }
                Rules::Multiple => {}
            }
        }
        match outcome {
            Err(_contradiction) => {
                stats.record_trackback();
                stats.record_digit_retracted();
                if sp == 0 {
                    if unique_check_mode {
                        status.unique = !bug_confirmed_non_unique;
                        if bug_confirmed_non_unique {
                            stats.record_non_unique();
                        }
                    } else {
                        *output = *input;
                        stats.record_unsolved();
                    }
                    break;
                }
                sp -= 1;
            }
            Ok(StepOutcome::Solved) => {
                let solution = render(&stack[sp]);
                match rules {
                    Rules::Multiple if !unique_check_mode && bug_confirmed_non_unique => {
                        *output = solution;
                        status.solved = true;
                        status.unique = false;
                        status.verified = verify(&solution);
                        stats.record_solved();
                        record_verification(stats, status.verified);
                        stats.record_non_unique();
                        break;
                    }
                    Rules::Multiple if !unique_check_mode => {
                        *output = solution;
                        status.solved = true;
                        status.verified = verify(&solution);
                        stats.record_solved();
                        record_verification(stats, status.verified);
                        unique_check_mode = true;
                        if sp == 0 {
                            status.unique = true;
                            break;
                        }
                        sp -= 1;
                    }
                    Rules::Multiple => {
                        status.unique = false;
                        stats.record_non_unique();
                        break;
                    }
                    Rules::Regular | Rules::FindOne => {
                        *output = solution;
                        status.solved = true;
                        status.unique = true;
                        status.verified = verify(&solution);
                        stats.record_solved();
                        record_verification(stats, status.verified);
                        break;
                    }
                }
            }
            Ok(StepOutcome::NeedsGuess) => {
                guesses_made += 1;
                sp = guesser::guess(stack, sp, stats)?;
            }
        }
    }

    if status.solved && guesses_made == 0 {
        stats.record_no_guess();
    }
    status.used_assumed_uniqueness = rules == Rules::Regular;
    Ok(status)
}

enum StepOutcome {
    Solved,
    NeedsGuess,
}

/// Applies propagators in priority order (naked > hidden > triad > BUG) until
/// either the grid is solved, a contradiction is found, or nothing further
/// can be deduced without guessing.
fn propagate(state: &mut GridState, back_check: bool, stats: &Statistics) -> Result<StepOutcome, Contradiction> {
    loop {
        if state.is_solved() {
            return Ok(StepOutcome::Solved);
        }
        if back_check && state.has_empty_cell() {
            return Err(Contradiction::EmptyCell);
        }

        if naked_single::run(state)? {
            continue;
        }
        if hidden_single::run(state)? {
            continue;
        }
        if triad_engine::run(state, stats)? {
            continue;
        }

        // Naked/hidden/triad are exhausted for this round; everything past
        // this point is the more expensive end-game machinery.
        stats.record_past_naked();
        if bug_detector::run(state, stats)? {
            continue;
        }

        return Ok(StepOutcome::NeedsGuess);
    }
}

fn render(state: &GridState) -> [u8; 81] {
    let mut out = [0u8; 81];
    for cell in Cell::all() {
        let digit = state.candidates[cell]
            .single()
            .expect("a solved grid has a singleton candidate in every cell");
        out[cell.index() as usize] = b'0' + digit.value();
    }
    out
}

fn verify(grid: &[u8; 81]) -> bool {
    for unit in ROWS.iter().chain(COLS.iter()).chain(BOXES.iter()) {
        let mut seen = 0u16;
        for i in unit.iter() {
            let byte = grid[i as usize];
            if !(b'1'..=b'9').contains(&byte) {
                return false;
            }
            let bit = 1u16 << (byte - b'1');
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
    }
    true
}

fn record_verification(stats: &Statistics, verified: bool) {
    if verified {
        stats.record_verified();
    } else {
        log::warn!("solve() produced a grid that failed verification");
        stats.record_not_verified();
    }
}
