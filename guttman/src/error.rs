/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use guttman_utils::{ShapeError, StatsError};
use thiserror::Error;

/// Convenience alias for a `Result<T, AnalysisError>`.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors raised while analyzing a score matrix.
///
/// Every failure aborts the analysis; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("malformed score matrix: {0}")]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error("neighbor similarity needs at least 2 items, got {items}")]
    InsufficientData { items: usize },
    #[error("{what} has {got} entries but {expected} were expected")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

impl AnalysisError {
    /// Return `true` if the error is caused by malformed input rather than by input that
    /// is well formed but too small to analyze.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Shape(_) | Self::LengthMismatch { .. })
    }
}

/// Check that a vector aligned to some matrix dimension has the expected length.
pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> AnalysisResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(AnalysisError::LengthMismatch {
            what,
            expected,
            got,
        })
    }
}
