/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Detection of irregular items in Guttman charts.
//!
//! A Guttman chart is a student-by-item score matrix sorted so that strong students and
//! easy items cluster in the top-left corner. Items whose response pattern disagrees with
//! their neighbors and with overall student ability are reported as irregular.
//!
//! ```
//! use guttman::{detect_irregular_items, ScoreMatrix};
//!
//! let matrix = ScoreMatrix::try_from_rows(vec![
//!     vec![0, 1, 1, 1],
//!     vec![1, 1, 1, 0],
//!     vec![1, 1, 1, 0],
//!     vec![1, 1, 0, 0],
//!     vec![1, 2, 0, 0],
//! ])?;
//!
//! let irregular = detect_irregular_items(&matrix)?;
//! assert!(irregular.iter().all(|i| i < 4));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

pub mod config;
pub mod detect;
pub mod error;
pub mod pipeline;
pub mod similarity;
pub mod sort;

// Top level exports.
pub use config::{AnalysisConfig, Builder, ConfigError};
pub use detect::{
    flag_irregular_items, AnomalyIndexSet, IrregularityDetector, ItemDetector, StudentDetector,
};
pub use error::{AnalysisError, AnalysisResult};
pub use pipeline::{analyze, detect_irregular_items, Analysis, Totals};
pub use sort::{ColumnOrder, ColumnSort};

pub use guttman_utils::{Matrix, ScoreMatrix, ShapeError, StatsError};
pub use guttman_vector::similarity::Metric;
