/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

/// An overloadable, 2-argument similarity function with a parameterized return type.
///
/// Pure similarity functions depend only on the values of the argument and the type of the
/// return value, which lets callers pick a kernel with a type parameter.
pub trait PureSimilarityFunction<Left, Right, To = f64> {
    fn evaluate(x: Left, y: Right) -> To;
}

/// Evaluate a norm of the argument `x` and return the result as the requested type.
///
/// Implementations are expected to be light-weight types that implement some kind of
/// reduction on `x`.
pub trait Norm<T, To = f64> {
    fn evaluate(&self, x: T) -> To;
}
