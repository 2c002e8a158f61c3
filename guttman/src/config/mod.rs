/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

pub mod defaults;

use guttman_vector::similarity::Metric;
use serde::Serialize;
use thiserror::Error;

use crate::sort::ColumnSort;

////////////
// Config //
////////////

/// Parameters controlling irregular item detection.
///
/// Use [`Builder`] to construct a validated instance, or [`AnalysisConfig::default`] for
/// the standard parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisConfig {
    /// Items whose averaged similarity is strictly below this value are irregular.
    threshold: f64,

    /// How the columns of the row-sorted chart are reordered.
    column_sort: ColumnSort,

    /// The similarity used between each item and its successor.
    neighbor_metric: Metric,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_IRREGULARITY_THRESHOLD,
            column_sort: defaults::COLUMN_SORT,
            neighbor_metric: defaults::NEIGHBOR_METRIC,
        }
    }
}

impl AnalysisConfig {
    /// Return a [`Builder`] with every parameter at its default value.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn try_from_builder(builder: &Builder) -> Result<Self, ConfigError> {
        let threshold = builder.threshold.unwrap_or(defaults::DEFAULT_IRREGULARITY_THRESHOLD);
        if !threshold.is_finite() || !(-1.0..=1.0).contains(&threshold) {
            return Err(ConfigErrorInner::Threshold(threshold).into());
        }

        Ok(Self {
            threshold,
            column_sort: builder.column_sort.unwrap_or(defaults::COLUMN_SORT),
            neighbor_metric: builder.neighbor_metric.unwrap_or(defaults::NEIGHBOR_METRIC),
        })
    }

    //-----------//
    // Accessors //
    //-----------//

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn column_sort(&self) -> ColumnSort {
        self.column_sort
    }

    pub fn neighbor_metric(&self) -> Metric {
        self.neighbor_metric
    }
}

/// Errors that can occur when building an [`AnalysisConfig`].
///
/// See [`Builder::build`] for possible failure modes.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ConfigError {
    #[from]
    inner: ConfigErrorInner,
}

#[derive(Debug, Clone, Error)]
enum ConfigErrorInner {
    #[error("parameter \"threshold\" ({0}) invalid because it must be a finite value in [-1.0, 1.0]")]
    Threshold(f64),
}

/////////////
// Builder //
/////////////

/// A builder for [`AnalysisConfig`]. Parameters left unset take their value from
/// [`defaults`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder {
    threshold: Option<f64>,
    column_sort: Option<ColumnSort>,
    neighbor_metric: Option<Metric>,
}

impl Builder {
    /// Construct a new builder with every parameter at its default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new builder, using the closure `f` to chain builder methods inline.
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut this = Self::new();
        f(&mut this);
        this
    }

    /// Configure the similarity threshold below which items are flagged.
    ///
    /// Must be finite and lie in `[-1.0, 1.0]`.
    pub fn threshold(&mut self, threshold: f64) -> &mut Self {
        self.threshold = Some(threshold);
        self
    }

    /// Configure the column ordering strategy.
    pub fn column_sort(&mut self, column_sort: ColumnSort) -> &mut Self {
        self.column_sort = Some(column_sort);
        self
    }

    /// Configure the metric used between neighboring items.
    pub fn neighbor_metric(&mut self, metric: Metric) -> &mut Self {
        self.neighbor_metric = Some(metric);
        self
    }

    /// Attempt to build the config. Fails if the threshold is not a finite value in
    /// `[-1.0, 1.0]`.
    pub fn build(&self) -> Result<AnalysisConfig, ConfigError> {
        AnalysisConfig::try_from_builder(self)
    }
}

///////////
// Tests //
///////////
