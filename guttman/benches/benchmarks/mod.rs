/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use guttman::ScoreMatrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub(crate) mod pipeline;
pub(crate) mod similarity;

/// Chart sizes as `(students, items)`.
pub(crate) const SIZES: [(usize, usize); 3] = [(30, 20), (300, 60), (3000, 120)];

pub(crate) fn random_chart(nstudents: usize, nitems: usize, seed: u64) -> ScoreMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..nstudents * nitems)
        .map(|_| rng.random_range(0..5))
        .collect();
    ScoreMatrix::try_from(data, nstudents, nitems).unwrap()
}
