/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use crate::{norm::L2Norm, Norm, PureSimilarityFunction};

/// Cosine similarity: the inner product divided by the product of the L2 norms.
///
/// Undefined (`None`) if either argument has a zero norm. Defined results are clamped to
/// `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

/// Pearson correlation coefficient of two equal-length samples.
///
/// Undefined (`None`) if either argument has zero variance, which includes empty and
/// single-element arguments. Defined results are clamped to `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

/// Plain inner product.
#[derive(Debug, Clone, Copy, Default)]
pub struct InnerProduct;

impl<L, R> PureSimilarityFunction<&[L], &[R]> for InnerProduct
where
    L: Copy + Into<f64>,
    R: Copy + Into<f64>,
{
    fn evaluate(x: &[L], y: &[R]) -> f64 {
        assert_eq!(x.len(), y.len());
        std::iter::zip(x.iter(), y.iter()).fold(0.0f64, |acc, (&a, &b)| {
            let a: f64 = a.into();
            let b: f64 = b.into();
            a.mul_add(b, acc)
        })
    }
}

impl<L, R> PureSimilarityFunction<&[L], &[R], Option<f64>> for Cosine
where
    L: Copy + Into<f64>,
    R: Copy + Into<f64>,
{
    fn evaluate(x: &[L], y: &[R]) -> Option<f64> {
        let xy = InnerProduct::evaluate(x, y);
        let xnorm = L2Norm.evaluate(x);
        let ynorm = L2Norm.evaluate(y);

        if xnorm < f64::MIN_POSITIVE || ynorm < f64::MIN_POSITIVE {
            return None;
        }

        Some((xy / (xnorm * ynorm)).clamp(-1.0, 1.0))
    }
}

impl<L, R> PureSimilarityFunction<&[L], &[R], Option<f64>> for Pearson
where
    L: Copy + Into<f64>,
    R: Copy + Into<f64>,
{
    fn evaluate(x: &[L], y: &[R]) -> Option<f64> {
        assert_eq!(x.len(), y.len());
        Cosine::evaluate(center(x)?.as_slice(), center(y)?.as_slice())
    }
}

/// Subtract the mean from every element. `None` for an empty argument.
fn center<T>(x: &[T]) -> Option<Vec<f64>>
where
    T: Copy + Into<f64>,
{
    if x.is_empty() {
        return None;
    }
    let mean = x.iter().map(|&v| -> f64 { v.into() }).sum::<f64>() / x.len() as f64;
    Some(x.iter().map(|&v| Into::<f64>::into(v) - mean).collect())
}

///////////
// Tests //
///////////
