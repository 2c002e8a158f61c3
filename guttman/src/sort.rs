/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Reordering of students (rows) and items (columns) by total score.
//!
//! After both sorts, strong students occupy the top rows and easy items the leftmost
//! columns of the chart.

use std::cmp::Reverse;

use guttman_utils::ScoreMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{check_len, AnalysisResult};

/// Strategy used to order the columns of a score matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSort {
    /// A single stable sort by descending column total. Ties keep their original order.
    #[default]
    Stable,

    /// Historical placement: with `order` the stable descending ordering of the column
    /// totals, entry `j` of every row is moved to position `order[j]`.
    ///
    /// This applies the inverse of `order` and therefore agrees with [`Self::Stable`]
    /// only when `order` is its own inverse. The placement is applied to every row. Old
    /// reports that reordered only the first `ncols` rows are not reproduced when there
    /// are more students than items and `order` is not its own inverse.
    Legacy,
}

/// The column permutation applied by [`sort_columns_by_score`].
///
/// Entry `k` is the original index of the column found at sorted position `k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder(Vec<usize>);

impl ColumnOrder {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the original column index of sorted position `position`, or `None` if
    /// `position` is out of bounds.
    pub fn original_index(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    /// Map sorted positions back to original column indices. Out of bounds positions are
    /// skipped.
    pub fn map_to_original<I>(&self, positions: I) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        positions
            .into_iter()
            .filter_map(|p| self.original_index(p))
            .collect()
    }
}

/// Indices of `sums` ordered by a stable ascending sort which is then reversed.
///
/// The result is descending by sum, but members of a tie group appear in the reverse of
/// their original relative order.
fn descending_reversed(sums: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sums.len()).collect();
    order.sort_by_key(|&i| sums[i]);
    order.reverse();
    order
}

/// Indices of `sums` ordered by descending sum. Ties keep ascending index order.
fn descending_stable(sums: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sums.len()).collect();
    order.sort_by_key(|&i| Reverse(sums[i]));
    order
}

fn invert_permutation(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (position, &target) in order.iter().enumerate() {
        inverse[target] = position;
    }
    inverse
}

/// Return a copy of `matrix` with rows ordered by descending `row_sums`.
///
/// `row_sums[i]` must be the total of row `i`. Rows with equal totals come out in the
/// reverse of their original relative order.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::LengthMismatch`] if `row_sums` does not have one entry
/// per row.
pub fn sort_rows_by_score(matrix: &ScoreMatrix, row_sums: &[u64]) -> AnalysisResult<ScoreMatrix> {
    check_len("row sums", matrix.nrows(), row_sums.len())?;
    Ok(matrix.select_rows(&descending_reversed(row_sums)))
}

/// Return a copy of `matrix` with columns ordered by descending `col_sums`, together with
/// the permutation that was applied.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::LengthMismatch`] if `col_sums` does not have one entry
/// per column.
pub fn sort_columns_by_score(
    matrix: &ScoreMatrix,
    col_sums: &[u64],
    strategy: ColumnSort,
) -> AnalysisResult<(ScoreMatrix, ColumnOrder)> {
    check_len("column sums", matrix.ncols(), col_sums.len())?;

    let order = descending_stable(col_sums);
    let order = match strategy {
        ColumnSort::Stable => order,
        ColumnSort::Legacy => invert_permutation(&order),
    };

    Ok((matrix.select_columns(&order), ColumnOrder(order)))
}

///////////
// Tests //
///////////

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::AnalysisError;

    fn sample() -> ScoreMatrix {
        ScoreMatrix::try_from_rows(vec![
            vec![0, 1, 1, 1],
            vec![1, 1, 1, 0],
            vec![1, 1, 1, 0],
            vec![1, 1, 0, 0],
            vec![1, 2, 0, 0],
        ])
        .unwrap()
    }

    fn random_matrix(rng: &mut StdRng) -> ScoreMatrix {
        let nrows = rng.random_range(1..12);
        let ncols = rng.random_range(1..12);
        let data = (0..nrows * ncols).map(|_| rng.random_range(0..5)).collect();
        ScoreMatrix::try_from(data, nrows, ncols).unwrap()
    }

    fn is_non_increasing(x: &[u64]) -> bool {
        x.windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn test_invert_permutation() {
        assert_eq!(invert_permutation(&[1, 2, 0]), vec![2, 0, 1]);
        assert_eq!(invert_permutation(&[1, 0, 2, 3]), vec![1, 0, 2, 3]);
        assert!(invert_permutation(&[]).is_empty());
    }

    #[test]
    fn test_sort_rows_sample() {
        let m = sample();
        let sorted = sort_rows_by_score(&m, &m.row_sums()).unwrap();

        // The tied rows 0, 1, 2 and 4 come out reversed.
        let expected = vec![
            vec![1, 2, 0, 0],
            vec![1, 1, 1, 0],
            vec![1, 1, 1, 0],
            vec![0, 1, 1, 1],
            vec![1, 1, 0, 0],
        ];
        assert_eq!(sorted.to_rows(), expected);
        assert_eq!(sorted.row_sums(), vec![3, 3, 3, 3, 2]);

        // The input is untouched.
        assert_eq!(m, sample());
    }

    #[test]
    fn test_sort_rows_already_sorted() {
        let m = ScoreMatrix::try_from_rows(vec![vec![3, 1], vec![2, 1], vec![1, 0]]).unwrap();
        let sorted = sort_rows_by_score(&m, &m.row_sums()).unwrap();
        assert_eq!(sorted, m);

        // Ties swap.
        let m = ScoreMatrix::try_from_rows(vec![vec![2, 0], vec![1, 1], vec![0, 1]]).unwrap();
        let sorted = sort_rows_by_score(&m, &m.row_sums()).unwrap();
        assert_eq!(sorted.to_rows(), vec![vec![1, 1], vec![2, 0], vec![0, 1]]);
        assert_eq!(sorted.row_sums(), m.row_sums());
    }

    #[test]
    fn test_sort_columns_sample() {
        let m = sample();
        let rows = sort_rows_by_score(&m, &m.row_sums()).unwrap();
        let col_sums = rows.col_sums();
        assert_eq!(col_sums, vec![4, 6, 3, 1]);

        let (sorted, order) = sort_columns_by_score(&rows, &col_sums, ColumnSort::Stable).unwrap();
        assert_eq!(order.as_slice(), &[1, 0, 2, 3]);
        assert_eq!(
            sorted.to_rows(),
            vec![
                vec![2, 1, 0, 0],
                vec![1, 1, 1, 0],
                vec![1, 1, 1, 0],
                vec![1, 0, 1, 1],
                vec![1, 1, 0, 0],
            ]
        );
        assert_eq!(sorted.col_sums(), vec![6, 4, 3, 1]);

        // The permutation is an involution, so the historical placement agrees.
        let (legacy, legacy_order) =
            sort_columns_by_score(&rows, &col_sums, ColumnSort::Legacy).unwrap();
        assert_eq!(legacy, sorted);
        assert_eq!(legacy_order, order);
    }

    #[test]
    fn test_sort_columns_legacy_differs() {
        let m = ScoreMatrix::try_from_rows(vec![vec![1, 2, 1], vec![0, 1, 1]]).unwrap();
        let col_sums = m.col_sums();
        assert_eq!(col_sums, vec![1, 3, 2]);

        let (stable, order) = sort_columns_by_score(&m, &col_sums, ColumnSort::Stable).unwrap();
        assert_eq!(order.as_slice(), &[1, 2, 0]);
        assert_eq!(stable.col_sums(), vec![3, 2, 1]);

        // Column `j` lands at position `order[j]`.
        let (legacy, order) = sort_columns_by_score(&m, &col_sums, ColumnSort::Legacy).unwrap();
        assert_eq!(order.as_slice(), &[2, 0, 1]);
        assert_eq!(legacy.to_rows(), vec![vec![1, 1, 2], vec![1, 0, 1]]);
        assert_eq!(legacy.col_sums(), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_columns_legacy_all_rows() {
        // More students than items: the trailing rows are reordered too.
        let m = ScoreMatrix::try_from_rows(vec![
            vec![1, 1, 1],
            vec![0, 1, 0],
            vec![0, 1, 1],
            vec![0, 0, 0],
            vec![3, 4, 5],
        ])
        .unwrap();
        assert_eq!(m.col_sums(), vec![4, 7, 7]);

        let (stable, order) =
            sort_columns_by_score(&m, &m.col_sums(), ColumnSort::Stable).unwrap();
        assert_eq!(order.as_slice(), &[1, 2, 0]);
        assert_eq!(stable.row(4), &[4, 5, 3]);

        let (legacy, order) = sort_columns_by_score(&m, &m.col_sums(), ColumnSort::Legacy).unwrap();
        assert_eq!(order.as_slice(), &[2, 0, 1]);
        assert_eq!(
            legacy.to_rows(),
            vec![
                vec![1, 1, 1],
                vec![0, 0, 1],
                vec![1, 0, 1],
                vec![0, 0, 0],
                vec![5, 3, 4],
            ]
        );
    }

    #[test]
    fn test_sort_columns_ties() {
        let m = ScoreMatrix::try_from_rows(vec![vec![1, 0, 1, 2]]).unwrap();
        let (sorted, order) =
            sort_columns_by_score(&m, &m.col_sums(), ColumnSort::Stable).unwrap();
        assert_eq!(order.as_slice(), &[3, 0, 2, 1]);
        assert_eq!(sorted.to_rows(), vec![vec![2, 1, 1, 0]]);
    }

    #[test]
    fn test_length_mismatch() {
        let m = sample();
        assert_eq!(
            sort_rows_by_score(&m, &[1, 2]).unwrap_err(),
            AnalysisError::LengthMismatch {
                what: "row sums",
                expected: 5,
                got: 2
            }
        );
        assert_eq!(
            sort_columns_by_score(&m, &[1, 2, 3, 4, 5], ColumnSort::Stable).unwrap_err(),
            AnalysisError::LengthMismatch {
                what: "column sums",
                expected: 4,
                got: 5
            }
        );
    }

    #[test]
    fn test_column_order() {
        let order = ColumnOrder(vec![2, 0, 1]);
        assert_eq!(order.len(), 3);
        assert!(!order.is_empty());
        assert_eq!(order.original_index(0), Some(2));
        assert_eq!(order.original_index(3), None);
        assert_eq!(order.map_to_original([0, 2, 7]), vec![2, 1]);

        assert_eq!(serde_json::to_string(&order).unwrap(), "[2,0,1]");
        assert_eq!(
            serde_json::to_string(&ColumnSort::Legacy).unwrap(),
            "\"legacy\""
        );
        let s: ColumnSort = serde_json::from_str("\"stable\"").unwrap();
        assert_eq!(s, ColumnSort::Stable);
    }

    #[test]
    fn test_random_sorts() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let m = random_matrix(&mut rng);
            let rows = sort_rows_by_score(&m, &m.row_sums()).unwrap();
            assert!(is_non_increasing(&rows.row_sums()));
            assert_eq!(rows.col_sums(), m.col_sums());

            // Sorting again keeps the sequence of totals.
            let again = sort_rows_by_score(&rows, &rows.row_sums()).unwrap();
            assert_eq!(again.row_sums(), rows.row_sums());

            let (cols, order) =
                sort_columns_by_score(&rows, &rows.col_sums(), ColumnSort::Stable).unwrap();
            assert!(is_non_increasing(&cols.col_sums()));

            let mut seen = order.as_slice().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..m.ncols()).collect::<Vec<_>>());

            for (k, &j) in order.as_slice().iter().enumerate() {
                for r in 0..rows.nrows() {
                    assert_eq!(cols[(r, k)], rows[(r, j)]);
                }
            }
        }
    }
}
