/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! # vector
//!
//! Similarity kernels over score vectors. Inputs are any slices of values that widen
//! losslessly to `f64` (integer scores, averaged scores), so item rows of a score matrix
//! can be compared directly with derived floating-point vectors.
#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

mod traits;
pub use traits::{Norm, PureSimilarityFunction};

pub mod norm;
pub mod similarity;
