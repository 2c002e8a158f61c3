/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use guttman::{AnalysisError, ConfigError};
use guttman_utils::ShapeError;
use thiserror::Error;

/// Failure of a command line tool. `details` is a human readable description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{details}")]
pub struct CMDToolError {
    pub details: String,
}

impl CMDToolError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

impl From<std::io::Error> for CMDToolError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for CMDToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

impl From<AnalysisError> for CMDToolError {
    fn from(err: AnalysisError) -> Self {
        if err.is_input_error() {
            Self::new(format!("invalid input: {}", err))
        } else {
            Self::new(format!("analysis failed: {}", err))
        }
    }
}

impl From<ConfigError> for CMDToolError {
    fn from(err: ConfigError) -> Self {
        Self::new(format!("invalid configuration: {}", err))
    }
}

impl From<ShapeError> for CMDToolError {
    fn from(err: ShapeError) -> Self {
        Self::new(format!("malformed score matrix: {}", err))
    }
}
