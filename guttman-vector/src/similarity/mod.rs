/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

pub mod implementations;
pub use implementations::{Cosine, InnerProduct, Pearson};

mod metric;
pub use metric::{Metric, ParseMetricError};
