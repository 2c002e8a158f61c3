/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Item similarity signals.
//!
//! Every function here takes the items-as-rows view of a sorted chart (the transpose of
//! the student-by-item matrix) and returns one value per item.
//!
//! A value is `None` when it is undefined: an item nobody scored on has no cosine
//! similarity and an item with identical scores for every student has no correlation.
//! Averages involving an undefined value are undefined too.

use guttman_utils::ScoreMatrix;
use guttman_vector::{
    similarity::{Cosine, Pearson},
    PureSimilarityFunction,
};

use crate::error::{check_len, AnalysisError, AnalysisResult};

/// Compare every item with its neighbors in sorted order using the kernel `K`.
///
/// The first item is compared with the second and the last item with the one before it.
/// Interior items receive the mean of the similarities to both neighbors, which is
/// undefined if either of them is.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if `items` has fewer than two rows.
pub fn neighbor_similarity<K>(items: &ScoreMatrix) -> AnalysisResult<Vec<Option<f64>>>
where
    K: for<'a, 'b> PureSimilarityFunction<&'a [u32], &'b [u32], Option<f64>>,
{
    let n = items.nrows();
    if n < 2 {
        return Err(AnalysisError::InsufficientData { items: n });
    }

    // `adjacent[i]` compares item `i` with item `i + 1`.
    let adjacent: Vec<Option<f64>> = (0..n - 1)
        .map(|i| K::evaluate(items.row(i), items.row(i + 1)))
        .collect();

    let similarity = (0..n)
        .map(|i| {
            if i == 0 {
                adjacent[0]
            } else if i == n - 1 {
                adjacent[n - 2]
            } else {
                adjacent[i - 1]
                    .zip(adjacent[i])
                    .map(|(a, b)| (a + b) / 2.0)
            }
        })
        .collect();

    Ok(similarity)
}

/// Pearson correlation of every item with its neighbors.
///
/// See [`neighbor_similarity`].
pub fn neighbor_correlation(items: &ScoreMatrix) -> AnalysisResult<Vec<Option<f64>>> {
    neighbor_similarity::<Pearson>(items)
}

/// Cosine similarity of every item with its neighbors.
///
/// See [`neighbor_similarity`].
pub fn neighbor_cosine_similarity(items: &ScoreMatrix) -> AnalysisResult<Vec<Option<f64>>> {
    neighbor_similarity::<Cosine>(items)
}

/// Cosine similarity of every item with the per-student average vector.
///
/// Undefined for items nobody scored on, and for every item when all averages are zero.
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`] if `student_averages` does not have one
/// entry per student (column of `items`).
pub fn whole_table_cosine_similarity(
    items: &ScoreMatrix,
    student_averages: &[f64],
) -> AnalysisResult<Vec<Option<f64>>> {
    check_len("student averages", items.ncols(), student_averages.len())?;
    Ok(items
        .row_iter()
        .map(|item| Cosine::evaluate(item, student_averages))
        .collect())
}

///////////
// Tests //
///////////
