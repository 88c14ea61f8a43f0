//! Solving rules and the result status.

/// Controls how many solutions [`solve`](crate::solve) searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rules {
    /// Assume the puzzle has a unique solution and stop at the first one
    /// found. Fastest; skips the redundant empty-cell guard at the root
    /// frame (see `check_back` in the crate-level docs).
    #[default]
    Regular,
    /// Same as [`Regular`](Self::Regular) but does not assume uniqueness,
    /// enabling the extra empty-cell / missing-digit guards at every depth.
    FindOne,
    /// After finding one solution, keep searching for a second one to
    /// certify uniqueness.
    Multiple,
}

/// Outcome of a [`solve`](crate::solve) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    /// Whether a solution was found.
    pub solved: bool,
    /// Whether the solution is known to be unique. Always `true` under
    /// [`Rules::Regular`] and [`Rules::FindOne`] (assumed or incidentally
    /// proven); meaningful only after exhaustive search under
    /// [`Rules::Multiple`].
    pub unique: bool,
    /// Whether the solution was checked to satisfy every row, column, and
    /// box.
    pub verified: bool,
    /// Whether the result relies on the caller's uniqueness assumption
    /// rather than exhaustive search (`true` under [`Rules::Regular`]).
    pub used_assumed_uniqueness: bool,
}
