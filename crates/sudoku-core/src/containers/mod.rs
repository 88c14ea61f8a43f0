//! Low-level bit-packed containers.
//!
//! - [`BitField128`] — an 81-bit subset of cell positions, stored as two
//!   64-bit words.
//! - [`CandidateMask`] — a 9-bit subset of digits.
//!
//! These are the two fixed-width containers the rest of the crate is built
//! on: cell-level state uses [`BitField128`], per-cell candidate state uses
//! [`CandidateMask`].

mod bit_field_128;
mod candidate_mask;

pub use self::{bit_field_128::*, candidate_mask::*};
