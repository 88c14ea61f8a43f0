//! Triad resolution and locked-candidate elimination.

use sudoku_core::{
    CandidateMask, Cell, Contradiction, Digit, GridState,
    triad::{
        TriadKind, col_triad_box_peers, col_triad_line_peers, row_triad_box_peers, row_triad_line_peers, triad_cells,
    },
};

use crate::Statistics;

/// Runs both triad passes for row triads, then for column triads.
///
/// **Part A (resolution)**: any unlocked triad whose three-cell candidate
/// union has exactly 3 members is a naked triple specialized to a box/line
/// intersection; its bit is cleared from `triads_unlocked`. This alone does
/// not eliminate any candidate, so it does not count as progress that
/// requires re-entering the propagation loop.
///
/// **Part B (locked-candidate elimination)**: for every triad, compute the
/// set of digits that must appear somewhere in it (because its box-peers or
/// line-peers cannot hold them) and the set that must not (the complement of
/// its own candidate union); propagate "must" sets to peers as "must-not",
/// then strip every "must-not" digit from the triad's own cells.
///
/// # Errors
///
/// Returns [`Contradiction::EmptyCell`] if an elimination empties a cell.
pub fn run(state: &mut GridState, stats: &Statistics) -> Result<bool, Contradiction> {
    resolve(state, TriadKind::Row, 0, stats);
    resolve(state, TriadKind::Col, 1, stats);
    let mut progressed = false;
    progressed |= eliminate(state, TriadKind::Row, stats)?;
    progressed |= eliminate(state, TriadKind::Col, stats)?;
    Ok(progressed)
}

fn resolve(state: &mut GridState, kind: TriadKind, idx: usize, stats: &Statistics) {
    let mut unlocked = state.triads_unlocked[idx];
    for id in 0..27u8 {
        if unlocked & (1 << id) == 0 {
            continue;
        }
        let union = state.candidates.union_of(triad_cells(kind, id));
        if union.len() == 3 {
            unlocked &= !(1 << id);
            stats.record_triads_resolved();
        }
    }
    state.triads_unlocked[idx] = unlocked;
}

/// Computes the "must" set for triad `id`: digits that its box-peers or
/// line-peers cannot hold (so they must be placed within `id`), plus, if
/// `id` is already resolved to exactly 3 candidates, those 3 digits.
pub(crate) fn must_mask(state: &GridState, kind: TriadKind, id: u8) -> CandidateMask {
    let own = state.candidates.union_of(triad_cells(kind, id));
    let box_peers = match kind {
        TriadKind::Row => row_triad_box_peers(id),
        TriadKind::Col => col_triad_box_peers(id),
    };
    let line_peers = match kind {
        TriadKind::Row => row_triad_line_peers(id),
        TriadKind::Col => col_triad_line_peers(id),
    };
    let box_peer_union = state.candidates.union_of(triad_cells(kind, box_peers[0]))
        | state.candidates.union_of(triad_cells(kind, box_peers[1]));
    let line_peer_union = state.candidates.union_of(triad_cells(kind, line_peers[0]))
        | state.candidates.union_of(triad_cells(kind, line_peers[1]));

    let mut must = CandidateMask::EMPTY;
    for digit in Digit::ALL {
        if !own.contains(digit) {
            continue;
        }
        if !box_peer_union.contains(digit) || !line_peer_union.contains(digit) {
            must.insert(digit);
        }
    }
    if own.len() == 3 {
        must = must | own;
    }
    must
}

fn eliminate(state: &mut GridState, kind: TriadKind, stats: &Statistics) -> Result<bool, Contradiction> {
    let mut must_not = [CandidateMask::EMPTY; 27];
    for id in 0..27u8 {
        must_not[id as usize] = !state.candidates.union_of(triad_cells(kind, id));
    }

    let mut must = [CandidateMask::EMPTY; 27];
    for id in 0..27u8 {
        must[id as usize] = must_mask(state, kind, id);
    }

    for id in 0..27u8 {
        let m = must[id as usize];
        if m.is_empty() {
            continue;
        }
        let box_peers = match kind {
            TriadKind::Row => row_triad_box_peers(id),
            TriadKind::Col => col_triad_box_peers(id),
        };
        let line_peers = match kind {
            TriadKind::Row => row_triad_line_peers(id),
            TriadKind::Col => col_triad_line_peers(id),
        };
        for peer in box_peers.into_iter().chain(line_peers) {
            must_not[peer as usize] = must_not[peer as usize] | m;
        }
    }

    let mut progressed = false;
    for id in 0..27u8 {
        let remove = must_not[id as usize];
        if remove.is_empty() {
            continue;
        }
        for cell_idx in triad_cells(kind, id) {
            if !state.unlocked.test(cell_idx) {
                continue;
            }
            let cell = Cell::new(cell_idx);
            let before = state.candidates[cell];
            let after = before & !remove;
            if after == before {
                continue;
            }
            state.candidates[cell] = after;
            state.updated.set(cell_idx);
            progressed = true;
            stats.record_triad_update();
            if after.is_empty() {
                return Err(Contradiction::EmptyCell);
            }
        }
    }
    Ok(progressed)
}
