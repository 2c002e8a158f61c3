/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::collections::BTreeSet;

use guttman_utils::ScoreMatrix;
use serde::{Deserialize, Serialize};

use crate::{
    config::AnalysisConfig,
    error::{check_len, AnalysisError, AnalysisResult},
    pipeline,
};

/// Ordered set of flagged positions. Iterates in ascending order and serializes as a
/// JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnomalyIndexSet(BTreeSet<usize>);

impl AnomalyIndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for AnomalyIndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AnomalyIndexSet {
    type Item = usize;
    type IntoIter = std::collections::btree_set::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Flag every index whose mean of `a[i]` and `b[i]` is strictly below `threshold`.
///
/// An index where either value is undefined has no mean and is never flagged.
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`] if `a` and `b` differ in length.
pub fn flag_irregular_items(
    a: &[Option<f64>],
    b: &[Option<f64>],
    threshold: f64,
) -> AnalysisResult<AnomalyIndexSet> {
    check_len("similarity vector", a.len(), b.len())?;
    Ok(std::iter::zip(a, b)
        .enumerate()
        .filter_map(|(i, (x, y))| {
            let mean = x.zip(*y).map(|(x, y)| (x + y) / 2.0)?;
            (mean < threshold).then_some(i)
        })
        .collect())
}

/// A detector producing the set of irregular rows or columns of a score matrix.
pub trait IrregularityDetector {
    fn detect(&self, matrix: &ScoreMatrix) -> AnalysisResult<AnomalyIndexSet>;
}

/// Flags irregular items (columns). Positions refer to the sorted column order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDetector {
    config: AnalysisConfig,
}

impl ItemDetector {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl IrregularityDetector for ItemDetector {
    fn detect(&self, matrix: &ScoreMatrix) -> AnalysisResult<AnomalyIndexSet> {
        Ok(pipeline::analyze(matrix, &self.config)?.irregular_items)
    }
}

/// Flags irregular students (rows). Not available yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentDetector;

impl IrregularityDetector for StudentDetector {
    fn detect(&self, _matrix: &ScoreMatrix) -> AnalysisResult<AnomalyIndexSet> {
        Err(AnalysisError::Unimplemented(
            "student-level irregularity detection",
        ))
    }
}

///////////
// Tests //
///////////
