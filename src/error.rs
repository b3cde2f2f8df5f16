//! The core's recoverable error taxonomy.

/// Errors surfaced by the core's fallible entry points.
///
/// `Scaler::new` and `fix_ratio` are the only fallible operations; everything
/// else is a total function of a validly-constructed `Scaler` (see the
/// `StateViolation` note on [`crate::scaler::Scaler`], which the core treats
/// as a programming error, not a recoverable `Result`).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A dimension was zero, negative, or exceeded
    /// [`MAX_DIMENSION`](crate::MAX_DIMENSION), or the colorspace was
    /// otherwise unusable for the requested operation.
    #[error("bad parameter: dimension out of range (0, {}]", crate::MAX_DIMENSION)]
    BadParam,

    /// Allocating a table, plan, or ring buffer failed.
    #[error("allocation failed")]
    OutOfMemory,

    /// An aspect-ratio-adjusted dimension exceeded the platform integer
    /// range.
    #[error("adjusted dimension out of range")]
    OutOfRange,
}
