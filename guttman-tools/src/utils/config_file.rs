/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{fs::File, io::BufReader, path::Path};

use guttman::{AnalysisConfig, Builder, ColumnSort, Metric};
use serde::Deserialize;

use crate::utils::{CMDResult, CMDToolError};

/// Analysis parameters read from JSON. Absent fields take their default value.
///
/// ```json
/// { "threshold": 0.5, "column_sort": "stable", "neighbor_metric": "cosine" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub threshold: Option<f64>,
    pub column_sort: Option<ColumnSort>,
    pub neighbor_metric: Option<Metric>,
}

impl ConfigFile {
    pub fn from_json(json: &str) -> CMDResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> CMDResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            CMDToolError::new(format!("unable to open {}: {}", path.display(), err))
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Resolve into a validated [`AnalysisConfig`]. A `threshold` given here takes
    /// precedence over the one in the file.
    pub fn to_config(&self, threshold: Option<f64>) -> CMDResult<AnalysisConfig> {
        let mut builder = Builder::new();
        if let Some(threshold) = threshold.or(self.threshold) {
            builder.threshold(threshold);
        }
        if let Some(column_sort) = self.column_sort {
            builder.column_sort(column_sort);
        }
        if let Some(metric) = self.neighbor_metric {
            builder.neighbor_metric(metric);
        }
        Ok(builder.build()?)
    }
}
