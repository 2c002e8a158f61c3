/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use criterion::{BenchmarkId, Criterion};
use guttman::{analyze, AnalysisConfig, Builder, ColumnSort};

use super::{random_chart, SIZES};

pub(crate) fn benchmark_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for (nstudents, nitems) in SIZES {
        let chart = random_chart(nstudents, nitems, 0xc0ff33);
        let label = format!("{}x{}", nstudents, nitems);

        let config = AnalysisConfig::default();
        group.bench_with_input(BenchmarkId::new("stable", &label), &chart, |b, chart| {
            b.iter(|| analyze(chart, &config))
        });

        let legacy = Builder::new_with(|b| {
            b.column_sort(ColumnSort::Legacy);
        })
        .build()
        .unwrap();
        group.bench_with_input(BenchmarkId::new("legacy", &label), &chart, |b, chart| {
            b.iter(|| analyze(chart, &legacy))
        });
    }

    group.finish();
}
