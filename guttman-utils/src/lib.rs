/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

// Views
pub mod matrix;
pub use matrix::{dimensions, Matrix, ScoreMatrix, ShapeError};

pub mod stats;
pub use stats::StatsError;
