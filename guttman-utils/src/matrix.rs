/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An owning, dense, 2-dimensional matrix laid out in row-major order.
///
/// Every constructor validates the shape, so an existing `Matrix` always has at least one
/// row and one column and every row has exactly `ncols` entries. Derived matrices
/// (transposes, permutations) are new allocations and never alias the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Box<[T]>,
    nrows: usize,
    ncols: usize,
}

/// A student-by-item score matrix: rows are students, columns are items.
pub type ScoreMatrix = Matrix<u32>;

/// Reasons a matrix could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    #[error(
        "a matrix needs at least one row and one column, got {nrows} rows and {ncols} columns"
    )]
    Empty { nrows: usize, ncols: usize },
    #[error("row {row} has {got} entries but the first row has {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error(
        "tried to construct a matrix with {nrows} rows and {ncols} columns over a slice \
         of length {len}"
    )]
    Length {
        len: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Return `(nrows, ncols)` of a list of rows, checking that it describes a valid matrix.
///
/// Fails with [`ShapeError::Empty`] if there are no rows or the rows are empty, and with
/// [`ShapeError::Ragged`] for the first row whose length differs from row 0.
pub fn dimensions<T>(rows: &[Vec<T>]) -> Result<(usize, usize), ShapeError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if nrows == 0 || ncols == 0 {
        return Err(ShapeError::Empty { nrows, ncols });
    }

    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(ShapeError::Ragged {
            row,
            expected: ncols,
            got: r.len(),
        });
    }
    Ok((nrows, ncols))
}

impl<T> Matrix<T> {
    /// Try to construct a `Matrix` over the provided row-major `data`.
    ///
    /// The length of `data` must be equal to `nrows * ncols` and both dimensions must be
    /// non-zero.
    pub fn try_from(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        if nrows == 0 || ncols == 0 {
            return Err(ShapeError::Empty { nrows, ncols });
        }
        if data.len() != nrows * ncols {
            return Err(ShapeError::Length {
                len: data.len(),
                nrows,
                ncols,
            });
        }
        Ok(Self {
            data: data.into_boxed_slice(),
            nrows,
            ncols,
        })
    }

    /// Construct a `Matrix` from a list of rows. See [`dimensions`] for the failure modes.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let (nrows, ncols) = dimensions(&rows)?;
        let data: Box<[T]> = rows.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), nrows * ncols);
        Ok(Self { data, nrows, ncols })
    }

    /// Return the number of rows in the matrix.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns in the matrix.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return `(nrows, ncols)`. For a score matrix this is `(students, items)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the underlying data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Return row `row` if `row < self.nrows()`. Otherwise, return `None`.
    pub fn get_row(&self, row: usize) -> Option<&[T]> {
        if row < self.nrows() {
            Some(self.row(row))
        } else {
            None
        }
    }

    /// Return a iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.data.chunks_exact(self.ncols)
    }
}

impl<T: Copy> Matrix<T> {
    /// Return the matrix as a list of owned rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }

    /// Return a new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let data: Box<[T]> = (0..self.ncols)
            .flat_map(|col| self.row_iter().map(move |row| row[col]))
            .collect();

        Self {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// Return a new matrix whose row `i` is row `order[i]` of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `order.len() != self.nrows()` or if any entry is out of bounds.
    pub fn select_rows(&self, order: &[usize]) -> Self {
        assert_eq!(
            order.len(),
            self.nrows(),
            "row order must have one entry per row"
        );
        let data: Box<[T]> = order
            .iter()
            .flat_map(|&r| self.row(r).iter().copied())
            .collect();

        Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Return a new matrix whose column `j` is column `order[j]` of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `order.len() != self.ncols()` or if any entry is out of bounds.
    pub fn select_columns(&self, order: &[usize]) -> Self {
        assert_eq!(
            order.len(),
            self.ncols(),
            "column order must have one entry per column"
        );
        let data: Box<[T]> = self
            .row_iter()
            .flat_map(|row| order.iter().map(move |&c| row[c]))
            .collect();

        Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Copy + Into<u64>,
{
    /// Sum of each row, aligned to row index.
    pub fn row_sums(&self) -> Vec<u64> {
        self.row_iter()
            .map(|row| row.iter().map(|&v| -> u64 { v.into() }).sum())
            .collect()
    }

    /// Sum of each column, aligned to column index.
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.ncols];
        self.row_iter().for_each(|row| {
            std::iter::zip(sums.iter_mut(), row.iter()).for_each(|(s, &v)| {
                let v: u64 = v.into();
                *s += v;
            });
        });
        sums
    }
}

/// Return a reference to the item at entry `(row, col)` in the matrix.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            col < self.ncols(),
            "col {col} is out of bounds (max: {})",
            self.ncols()
        );
        &self.row(row)[col]
    }
}

// Matrices serialize as a list of rows so that JSON inputs read naturally.
impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.row_iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::try_from_rows(rows).map_err(serde::de::Error::custom)
    }
}

///////////
// Tests //
///////////
