/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{fs::File, io::BufReader, path::Path};

use guttman::ScoreMatrix;
use serde::Deserialize;

use crate::utils::{CMDResult, CMDToolError};

/// A score matrix read from JSON, optionally labelled with one identifier per item.
///
/// ```json
/// { "matrix": [[0, 1, 1], [1, 1, 0]], "item_ids": ["q1", "q2", "q3"] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreInput {
    pub matrix: ScoreMatrix,
    #[serde(default)]
    pub item_ids: Option<Vec<String>>,
}

impl ScoreInput {
    pub fn from_json(json: &str) -> CMDResult<Self> {
        let input: Self = serde_json::from_str(json)?;
        input.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> CMDResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            CMDToolError::new(format!("unable to open {}: {}", path.display(), err))
        })?;
        let input: Self = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            nstudents = input.matrix.nrows(),
            nitems = input.matrix.ncols(),
            "loaded score matrix"
        );
        input.validate()
    }

    /// Return the identifier of original item `index`, if identifiers were given.
    pub fn item_id(&self, index: usize) -> Option<&str> {
        self.item_ids
            .as_ref()
            .and_then(|ids| ids.get(index))
            .map(String::as_str)
    }

    fn validate(self) -> CMDResult<Self> {
        if let Some(ids) = &self.item_ids {
            if ids.len() != self.matrix.ncols() {
                return Err(CMDToolError::new(format!(
                    "item_ids has {} entries but the matrix has {} items",
                    ids.len(),
                    self.matrix.ncols()
                )));
            }
        }
        Ok(self)
    }
}
