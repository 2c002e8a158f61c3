/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use criterion::{BenchmarkId, Criterion};
use guttman::similarity::{neighbor_correlation, neighbor_cosine_similarity};

use super::{random_chart, SIZES};

pub(crate) fn benchmark_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor-similarity");

    for (nstudents, nitems) in SIZES {
        // Items as rows.
        let items = random_chart(nitems, nstudents, 0x5eed);
        let label = format!("{}x{}", nstudents, nitems);

        group.bench_with_input(BenchmarkId::new("cosine", &label), &items, |b, items| {
            b.iter(|| neighbor_cosine_similarity(items))
        });
        group.bench_with_input(BenchmarkId::new("pearson", &label), &items, |b, items| {
            b.iter(|| neighbor_correlation(items))
        });
    }

    group.finish();
}
