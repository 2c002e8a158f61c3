/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
#![warn(missing_debug_implementations, missing_docs)]
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Similarity metric used to compare neighboring items.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Cosine similarity
    #[default]
    Cosine,
    /// Pearson correlation coefficient
    #[serde(alias = "correlation")]
    Pearson,
}

impl Metric {
    /// Returns the string representation of the metric.
    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Pearson => "pearson",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug)]
pub enum ParseMetricError {
    /// The string does not name a metric.
    InvalidFormat(String),
}

impl std::fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(str) => write!(f, "Invalid format for Metric: {}", str),
        }
    }
}

impl std::error::Error for ParseMetricError {}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            x if x == Metric::Cosine.as_str() => Ok(Metric::Cosine),
            x if x == Metric::Pearson.as_str() => Ok(Metric::Pearson),
            "correlation" => Ok(Metric::Pearson),
            _ => Err(ParseMetricError::InvalidFormat(String::from(s))),
        }
    }
}
