/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use thiserror::Error;

use crate::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("input slice cannot be empty")]
    EmptyInput,
    #[error("cannot average over a count of zero")]
    DivisionByZero,
}

pub trait AsF64Lossy: Copy {
    fn as_f64_lossy(self) -> f64;
}

macro_rules! impl_as_f64_lossy {
    ($T:ty) => {
        impl AsF64Lossy for $T {
            fn as_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    };
    ($($T:ty),* $(,)?) => {
        $(impl_as_f64_lossy!($T);)*
    }
}

impl_as_f64_lossy!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

/// Return the median of `x`.
///
/// For even lengths this is the mean of the two central elements. The input is not
/// required to be sorted and is left untouched.
pub fn median<T>(x: &[T]) -> Result<f64, StatsError>
where
    T: AsF64Lossy,
{
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted: Vec<f64> = x.iter().map(|v| v.as_f64_lossy()).collect();
    sorted.sort_by(f64::total_cmp);

    let len = sorted.len();
    let half = len / 2;
    if len % 2 == 1 {
        Ok(sorted[half])
    } else {
        Ok((sorted[half - 1] + sorted[half]) / 2.0)
    }
}

/// Return `sum(x) / count`.
///
/// `count` is taken separately from `x` so callers can average over a population that
/// differs from the number of summands.
pub fn average<T>(x: &[T], count: usize) -> Result<f64, StatsError>
where
    T: AsF64Lossy,
{
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if count == 0 {
        return Err(StatsError::DivisionByZero);
    }

    let s: f64 = x.iter().map(|v| v.as_f64_lossy()).sum();
    Ok(s / count as f64)
}

/// Return the arithmetic mean of `x`.
pub fn mean<T>(x: &[T]) -> Result<f64, StatsError>
where
    T: AsF64Lossy,
{
    average(x, x.len())
}

/// Divide every entry of `totals` by the number of rows (students) in `matrix`.
///
/// This normalizes by students regardless of whether `totals` holds item or student sums;
/// callers are responsible for passing totals that match their intent.
pub fn average_per_unit<U, T>(matrix: &Matrix<U>, totals: &[T]) -> Vec<f64>
where
    T: AsF64Lossy,
{
    // `Matrix` guarantees at least one row.
    let nrows = matrix.nrows() as f64;
    totals.iter().map(|t| t.as_f64_lossy() / nrows).collect()
}

///////////
// Tests //
///////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ScoreMatrix;

    #[test]
    fn test_median() {
        let empty: &[u64] = &[];
        assert_eq!(median(empty).unwrap_err(), StatsError::EmptyInput);

        assert_eq!(median(&[1u64, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(median(&[1u64, 2, 3]).unwrap(), 2.0);
        assert_eq!(median(&[7u32]).unwrap(), 7.0);

        // Order of the input does not matter.
        assert_eq!(median(&[4u64, 1, 3, 2]).unwrap(), 2.5);
        assert_eq!(median(&[6u64, 4, 3, 3, 3]).unwrap(), 3.0);
        assert_eq!(median(&[0.5f64, -1.0]).unwrap(), -0.25);
    }

    #[test]
    fn test_average() {
        let empty: &[u64] = &[];
        assert_eq!(average(empty, 3).unwrap_err(), StatsError::EmptyInput);
        assert_eq!(average(&[1u64, 2], 0).unwrap_err(), StatsError::DivisionByZero);
        assert_eq!(mean(empty).unwrap_err(), StatsError::EmptyInput);

        assert_eq!(average(&[6u64, 4, 3, 1], 4).unwrap(), 3.5);
        assert_eq!(average(&[6u64, 4, 3, 1], 2).unwrap(), 7.0);
        assert_eq!(mean(&[3u64, 3, 3, 3, 2]).unwrap(), 2.8);

        let input = [
            -2.049918f64,
            0.12130953,
            -0.17400686,
            0.7511493,
            0.26361275,
        ];
        let r = mean(&input).unwrap();
        assert!((r - -0.217570656).abs() <= 1.0e-9, "got {}", r);
    }

    #[test]
    fn test_average_per_unit() {
        let m = ScoreMatrix::try_from_rows(vec![
            vec![0, 1, 1, 1],
            vec![1, 1, 1, 0],
            vec![1, 1, 1, 0],
            vec![1, 1, 0, 0],
            vec![1, 2, 0, 0],
        ])
        .unwrap();

        // Item totals and student totals are both divided by the number of students.
        let per_item = average_per_unit(&m, &[6u64, 4, 3, 1]);
        assert_eq!(per_item, vec![1.2, 0.8, 0.6, 0.2]);

        let per_student = average_per_unit(&m, &[3u64, 3, 3, 3, 2]);
        assert_eq!(per_student, vec![0.6, 0.6, 0.6, 0.6, 0.4]);
    }
}
