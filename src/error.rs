use thiserror::Error;

use crate::geometry::CurveKind;

/// Top-level error type for the curves library.
#[derive(Debug, Error)]
pub enum CurvesError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors related to curve store lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("curve not found")]
    CurveNotFound,

    #[error("expected a {expected}, found a {found}")]
    KindMismatch {
        expected: CurveKind,
        found: CurveKind,
    },
}

/// Convenience type alias for results using [`CurvesError`].
pub type Result<T> = std::result::Result<T, CurvesError>;
