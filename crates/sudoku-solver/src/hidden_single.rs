//! Hidden single scan: digits confined to exactly one cell of a unit.

use sudoku_core::{BOXES, COLS, Cell, Contradiction, Digit, GridState, ROWS, containers::BitField128};

/// Scans every column, then every row, then every box, for hidden singles.
///
/// Columns are scanned first because, in a SIMD implementation, the
/// column-wise prefix/suffix OR accumulation needed for hidden singles is
/// also where row and column triads are captured as a cheap byproduct (see
/// the triad engine); scanning columns first keeps that byproduct available
/// earliest. This scalar implementation computes the same result directly
/// per unit rather than via prefix/suffix accumulation, which the design
/// notes call an implementation choice rather than a contract (the rotate-
/// and-OR construction is a SIMD-specific realization of the same count).
///
/// For each unit and each digit, counts the unlocked cells of the unit that
/// still carry that digit as a candidate. A count of zero is a contradiction
/// (the unit has nowhere left for that digit); a count of one is a hidden
/// single and is committed. If two digits in the same unit would both force
/// the same cell, that is a [`Contradiction::HiddenMultiple`].
///
/// # Errors
///
/// Returns [`Contradiction::MissingDigit`] or [`Contradiction::HiddenMultiple`]
/// as described above, or [`Contradiction::EmptyCell`] if a resulting commit
/// empties a peer.
pub fn run(state: &mut GridState) -> Result<bool, Contradiction> {
    let mut progressed = false;
    for unit in COLS.iter().chain(ROWS.iter()).chain(BOXES.iter()) {
        progressed |= scan_unit(state, *unit)?;
    }
    Ok(progressed)
}

fn scan_unit(state: &mut GridState, unit: BitField128) -> Result<bool, Contradiction> {
    let mut pending: [Option<Digit>; 81] = [None; 81];

    for digit in Digit::ALL {
        if unit
            .iter()
            .any(|i| !state.unlocked.test(i) && state.candidates[Cell::new(i)].single() == Some(digit))
        {
            continue; // already placed in this unit
        }

        let mut only: Option<u8> = None;
        let mut count = 0u32;
        for i in unit.iter() {
            if state.unlocked.test(i) && state.candidates[Cell::new(i)].contains(digit) {
                count += 1;
                only = Some(i);
            }
        }

        if count == 0 {
            return Err(Contradiction::MissingDigit);
        }
        if count == 1 {
            let i = only.expect("count == 1 implies a recorded cell");
            match pending[i as usize] {
                Some(existing) if existing != digit => return Err(Contradiction::HiddenMultiple),
                _ => pending[i as usize] = Some(digit),
            }
        }
    }

    let mut progressed = false;
    for i in unit.iter() {
        if !state.unlocked.test(i) {
            continue;
        }
        if let Some(digit) = pending[i as usize] {
            state.commit(Cell::new(i), digit)?;
            progressed = true;
        }
    }
    Ok(progressed)
}
