/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use guttman_vector::similarity::Metric;

use crate::sort::ColumnSort;

/// Items whose averaged similarity falls strictly below this value are flagged.
pub const DEFAULT_IRREGULARITY_THRESHOLD: f64 = 0.5;

/// Columns are ordered by descending item total with ties broken by original position.
pub const COLUMN_SORT: ColumnSort = ColumnSort::Stable;

/// Neighboring items are compared with cosine similarity.
pub const NEIGHBOR_METRIC: Metric = Metric::Cosine;
