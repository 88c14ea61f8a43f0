//! Converts an input clue grid into the root [`GridState`].

use sudoku_core::{CandidateMask, Cell, Contradiction, Digit, GridState, containers::BitField128};

/// Builds the root [`GridState`] from 81 input bytes.
///
/// Each byte is an ASCII digit `'1'..='9'` for a clue, or anything else
/// (conventionally `'0'` or `'.'`) for an empty cell. Non-clue bytes are not
/// otherwise validated here: the 81-byte length and character set are the
/// external caller's responsibility (see the crate-level file-format
/// conventions).
///
/// Clue elimination is batched by digit rather than applied cell-by-cell: for
/// each digit, the union of `peers(i) ∪ {i}` over every clue cell holding
/// that digit is computed once, then the digit is stripped from every
/// unlocked cell in that union. This is a performance choice (grouping by
/// digit beats per-cell elimination once there are several clues of the same
/// digit) with no effect on the resulting state.
///
/// # Errors
///
/// Returns [`Contradiction::EmptyCell`] if two clues conflict (e.g. the same
/// digit twice in one row), which empties some cell's candidate mask.
pub fn initialize(input: &[u8; 81]) -> Result<GridState, Contradiction> {
    let mut state = GridState::new_all_candidates();
    let mut clue_digit: [Option<Digit>; 81] = [None; 81];

    for i in 0..81u8 {
        let byte = input[i as usize];
        if byte.is_ascii_digit() && byte != b'0' {
            let digit = Digit::from_value(byte - b'0');
            clue_digit[i as usize] = Some(digit);
            let cell = Cell::new(i);
            state.unlocked.clear(i);
            state.candidates[cell] = CandidateMask::from_digit(digit);
        }
    }

    for digit in Digit::ALL {
        let mut affected = BitField128::EMPTY;
        for i in 0..81u8 {
            if clue_digit[i as usize] == Some(digit) {
                affected |= Cell::new(i).peers();
            }
        }
        for i in affected.iter() {
            if !state.unlocked.test(i) {
                continue;
            }
            let cell = Cell::new(i);
            let mask = state.candidates[cell] & !CandidateMask::from_digit(digit);
            if mask == state.candidates[cell] {
                continue;
            }
            state.candidates[cell] = mask;
            if mask.is_empty() {
                return Err(Contradiction::EmptyCell);
            }
        }
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLED: &[u8; 81] =
        b"534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn filled_grid_has_no_unlocked_cells() {
        let state = initialize(FILLED).unwrap();
        assert!(state.is_solved());
    }

    #[test]
    fn empty_grid_keeps_full_candidates() {
        let input = [b'.'; 81];
        let state = initialize(&input).unwrap();
        assert_eq!(state.unlocked.popcount(), 81);
        for cell in Cell::all() {
            assert_eq!(state.candidates[cell].len(), 9);
        }
    }

    #[test]
    fn conflicting_clues_are_a_contradiction() {
        let mut input = [b'.'; 81];
        input[0] = b'1'; // row 0, col 0
        input[1] = b'1'; // row 0, col 1 -- same row, same digit
        assert_eq!(initialize(&input), Err(Contradiction::EmptyCell));
    }

    #[test]
    fn single_clue_strips_peers() {
        let mut input = [b'.'; 81];
        input[0] = b'5';
        let state = initialize(&input).unwrap();
        for peer in Cell::new(0).peers().iter() {
            assert!(!state.candidates[Cell::new(peer)].contains(Digit::D5));
        }
    }
}
