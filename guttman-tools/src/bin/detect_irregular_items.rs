/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use anyhow::{Context, Result};
use clap::Parser;
use guttman_tools::utils::{detect_irregular_items, init_subscriber};

/// Command Usage:
///
/// Description:
/// Sorts a student-by-item score matrix into a Guttman chart and reports the items whose
/// response pattern disagrees with their neighbors and with overall student ability.
///
/// The input file is JSON of the form `{"matrix": [[...], ...], "item_ids": [...]}` where
/// `item_ids` is optional. The report is written as JSON to `--output_file` or `stdout`.
///
/// Example Command:
/// cargo run --bin detect_irregular_items -- --input_file scores.json
/// --config_file config.json --threshold 0.6 --output_file report.json
fn main() -> Result<()> {
    init_subscriber();

    let args = DetectIrregularItemsArgs::parse();

    let result = detect_irregular_items(
        &args.input_file,
        args.config_file.as_deref(),
        args.threshold,
        args.output_file.as_deref(),
    )
    .with_context(|| format!("failed to analyze {}", args.input_file));

    match result {
        Ok(report) => {
            tracing::info!(
                "Irregular item detection completed: {} of {} items flagged",
                report.irregular_items.len(),
                report.analysis.column_order.len(),
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!("Error: {:?}", err);
            Err(err)
        }
    }
}

#[derive(Debug, Parser)]
struct DetectIrregularItemsArgs {
    /// JSON file holding the score matrix and optional item identifiers
    #[arg(long = "input_file", short, required = true)]
    pub input_file: String,

    /// JSON file with analysis parameters
    #[arg(long = "config_file", short)]
    pub config_file: Option<String>,

    /// Similarity threshold below which items are flagged, overrides the config file
    #[arg(long = "threshold", short)]
    pub threshold: Option<f64>,

    /// Where to write the JSON report, `stdout` when absent
    #[arg(long = "output_file", short)]
    pub output_file: Option<String>,
}
