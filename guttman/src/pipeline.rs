/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! End-to-end irregular item detection.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. Total the rows (students) and columns (items) of the raw matrix.
//! 2. Sort rows by descending total, then sort columns of the result by descending total.
//! 3. Transpose so that items become rows.
//! 4. Derive per-student and per-item averages along with medians and means.
//! 5. Compute neighbor correlation, neighbor cosine and whole-table cosine similarity.
//! 6. Flag items whose mean of the selected neighbor similarity and whole-table cosine
//!    falls below the threshold.

use guttman_utils::{stats, ScoreMatrix};
use guttman_vector::similarity::Metric;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::AnalysisConfig,
    detect::{flag_irregular_items, AnomalyIndexSet},
    error::AnalysisResult,
    similarity::{neighbor_correlation, neighbor_cosine_similarity, whole_table_cosine_similarity},
    sort::{sort_columns_by_score, sort_rows_by_score, ColumnOrder},
};

/// Summary of one of the two sum vectors of a sorted chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    /// Totals in sorted (descending) order.
    pub sums: Vec<u64>,
    /// Each total divided by the number of students.
    pub averages: Vec<f64>,
    pub median: f64,
    pub mean: f64,
}

impl Totals {
    fn new(matrix: &ScoreMatrix, sums: Vec<u64>) -> AnalysisResult<Self> {
        Ok(Self {
            averages: stats::average_per_unit(matrix, &sums),
            median: stats::median(&sums)?,
            mean: stats::mean(&sums)?,
            sums,
        })
    }
}

/// Every intermediate result of an analysis, in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The configuration the analysis ran with.
    pub config: AnalysisConfig,
    /// The chart after row and column sorting.
    pub sorted_matrix: ScoreMatrix,
    /// Original column index of each sorted position.
    pub column_order: ColumnOrder,
    pub students: Totals,
    pub items: Totals,
    /// Similarity signals per sorted item. `None` marks an undefined value, such as the
    /// cosine similarity of an item nobody scored on. Undefined items are never flagged.
    pub neighbor_correlation: Vec<Option<f64>>,
    pub neighbor_cosine_similarity: Vec<Option<f64>>,
    pub whole_table_cosine_similarity: Vec<Option<f64>>,
    /// Flagged positions in the sorted column order.
    pub irregular_items: AnomalyIndexSet,
}

impl Analysis {
    /// Flagged items as column indices of the matrix passed to [`analyze`].
    pub fn original_items(&self) -> Vec<usize> {
        self.column_order
            .map_to_original(self.irregular_items.iter())
    }
}

/// Run the full pipeline over `matrix` with `config`.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::InsufficientData`] if `matrix` has fewer than two
/// items (columns).
pub fn analyze(matrix: &ScoreMatrix, config: &AnalysisConfig) -> AnalysisResult<Analysis> {
    let (nstudents, nitems) = matrix.dimensions();
    debug!(nstudents, nitems, "starting analysis");

    let rows = sort_rows_by_score(matrix, &matrix.row_sums())?;
    let (sorted_matrix, column_order) =
        sort_columns_by_score(&rows, &rows.col_sums(), config.column_sort())?;
    debug!(column_sort = ?config.column_sort(), "sorted chart");

    let items_matrix = sorted_matrix.transpose();
    debug!(
        nrows = items_matrix.nrows(),
        ncols = items_matrix.ncols(),
        "transposed chart"
    );

    let students = Totals::new(&sorted_matrix, sorted_matrix.row_sums())?;
    let items = Totals::new(&sorted_matrix, sorted_matrix.col_sums())?;
    debug!(
        student_median = students.median,
        item_median = items.median,
        "computed totals"
    );

    let neighbor_correlation = neighbor_correlation(&items_matrix)?;
    let neighbor_cosine_similarity = neighbor_cosine_similarity(&items_matrix)?;
    let whole_table_cosine_similarity =
        whole_table_cosine_similarity(&items_matrix, &students.averages)?;

    let neighbor = match config.neighbor_metric() {
        Metric::Cosine => &neighbor_cosine_similarity,
        Metric::Pearson => &neighbor_correlation,
    };
    let irregular_items = flag_irregular_items(
        neighbor,
        &whole_table_cosine_similarity,
        config.threshold(),
    )?;

    let analysis = Analysis {
        config: *config,
        sorted_matrix,
        column_order,
        students,
        items,
        neighbor_correlation,
        neighbor_cosine_similarity,
        whole_table_cosine_similarity,
        irregular_items,
    };

    info!(
        nitems,
        flagged = analysis.irregular_items.len(),
        items = ?analysis.irregular_items,
        "irregular item detection finished"
    );
    Ok(analysis)
}

/// Return the irregular items of `matrix` under the default configuration.
///
/// Positions refer to the sorted column order. Use [`analyze`] to also recover the
/// original column indices.
pub fn detect_irregular_items(matrix: &ScoreMatrix) -> AnalysisResult<AnomalyIndexSet> {
    Ok(analyze(matrix, &AnalysisConfig::default())?.irregular_items)
}

///////////
// Tests //
///////////
