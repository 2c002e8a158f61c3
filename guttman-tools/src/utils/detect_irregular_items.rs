/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use guttman::{analyze, Analysis, AnalysisConfig, AnomalyIndexSet};
use serde::Serialize;

use crate::utils::{CMDResult, CMDToolError, ConfigFile, ScoreInput};

/// The document written by the `detect_irregular_items` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Flagged positions in the sorted item order.
    pub irregular_items: AnomalyIndexSet,
    /// Flagged items as column indices of the input matrix.
    pub irregular_original_items: Vec<usize>,
    /// Identifiers of the flagged items, when the input supplied them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irregular_item_ids: Option<Vec<String>>,
    pub analysis: Analysis,
}

impl Report {
    pub fn new(input: &ScoreInput, config: &AnalysisConfig) -> CMDResult<Self> {
        let analysis = analyze(&input.matrix, config)?;
        let irregular_original_items = analysis.original_items();

        let irregular_item_ids = input.item_ids.as_ref().map(|_| {
            irregular_original_items
                .iter()
                .filter_map(|&i| input.item_id(i).map(String::from))
                .collect()
        });

        Ok(Self {
            irregular_items: analysis.irregular_items.clone(),
            irregular_original_items,
            irregular_item_ids,
            analysis,
        })
    }

    pub fn write_json<W: Write>(&self, writer: W) -> CMDResult<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Load the input and configuration, run the analysis, and write the report to
/// `output_file` (or `stdout` when absent).
pub fn detect_irregular_items(
    input_file: &str,
    config_file: Option<&str>,
    threshold: Option<f64>,
    output_file: Option<&str>,
) -> CMDResult<Report> {
    let config_file = match config_file {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let config = config_file.to_config(threshold)?;
    tracing::info!(
        threshold = config.threshold(),
        column_sort = ?config.column_sort(),
        neighbor_metric = %config.neighbor_metric(),
        "resolved configuration"
    );

    let input = ScoreInput::load(input_file)?;
    let report = Report::new(&input, &config)?;

    match output_file {
        Some(path) => {
            let file = File::create(Path::new(path)).map_err(|err| {
                CMDToolError::new(format!("unable to create {}: {}", path, err))
            })?;
            report.write_json(file)?;
            tracing::info!(path, "wrote report");
        }
        None => report.write_json(std::io::stdout().lock())?,
    }

    Ok(report)
}
