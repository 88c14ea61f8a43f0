//! Errors raised while mutating a [`GridState`](crate::GridState).

/// A local contradiction detected while applying candidate eliminations.
///
/// Every variant is recoverable by backtracking to the previous
/// [`GridState`](crate::GridState) on the search stack; none of them indicate
/// a bug in the solver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Contradiction {
    /// A cell's candidate mask became empty.
    #[display("cell has no remaining candidates")]
    EmptyCell,
    /// A unit (row, column, or box) has no cell left that can hold some digit.
    #[display("a unit is missing a digit")]
    MissingDigit,
    /// More than one digit became a forced hidden single in the same cell.
    #[display("conflicting hidden singles in one cell")]
    HiddenMultiple,
}
