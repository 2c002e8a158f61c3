/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use crate::{similarity::InnerProduct, Norm, PureSimilarityFunction};

/// Evaluate the square of the L2 norm of the argument.
#[derive(Debug, Clone, Copy)]
pub struct L2NormSquared;

impl<T> Norm<&[T]> for L2NormSquared
where
    T: Copy + Into<f64>,
{
    #[inline]
    fn evaluate(&self, x: &[T]) -> f64 {
        InnerProduct::evaluate(x, x)
    }
}

/// Evaluate the L2 norm of the argument.
#[derive(Debug, Clone, Copy)]
pub struct L2Norm;

impl<T> Norm<&[T]> for L2Norm
where
    T: Copy + Into<f64>,
{
    #[inline]
    fn evaluate(&self, x: &[T]) -> f64 {
        L2NormSquared.evaluate(x).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_norm() {
        assert_eq!(L2Norm.evaluate(&[3.0f64, 4.0][..]), 5.0);
        assert_eq!(L2NormSquared.evaluate(&[1u32, 1, 1, 1, 2][..]), 8.0);
        assert_eq!(L2Norm.evaluate(&[0u32, 0, 0][..]), 0.0);
    }
}
