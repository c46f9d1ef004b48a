//! The error type returned by the fallible statistics in this crate.

use thiserror::Error;

/// Errors surfaced by the statistics over a [`Tree`][crate::tree::Tree].
///
/// Inserting, traversing and building trees never fail. Only the numeric
/// reductions in [`stats`][crate::stats] can, when there are too few values
/// for the requested quantity to be defined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least `required` stored values but the tree
    /// only holds `found`. For the sample variance this is the `n - 1 == 0`
    /// divisor.
    #[error("invalid operation: {operation} needs at least {required} values, tree holds {found}")]
    InvalidOperation {
        /// Name of the statistic that was requested.
        operation: &'static str,
        /// Smallest number of values for which the statistic is defined.
        required: usize,
        /// Number of values in the tree.
        found: usize,
    },
}

/// Shorthand used by every fallible function in this crate.
pub type Result<T> = std::result::Result<T, Error>;
