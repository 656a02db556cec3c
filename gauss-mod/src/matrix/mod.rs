//! # Matrix Module
//!
//! Rectangular matrices of [`Scalar`] entries and the value-producing row operations the
//! elimination engine is built from.

pub mod ops;
pub mod row_ops;

use crate::errors::GaussError;
use crate::ring::{Scalar, int};

use serde::{Deserialize, Serialize};

use std::ops::Index;

/// A rectangular matrix stored row by row.
///
/// Every row has exactly `ncols()` entries; constructors reject ragged input, so code holding
/// a `Matrix` never has to re-check the shape. The column count is kept separately so a
/// matrix without rows still knows its width.
///
/// Serializes as an array of rows of strings (`[["1", "-1/3"], ...]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Matrix {
    rows: Vec<Vec<Scalar>>,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from rows, checking that all rows have the same length.
    ///
    /// # Errors
    ///
    /// Returns `GaussError::DimensionMismatch` if any row differs in length from the first.
    pub fn try_from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self, GaussError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GaussError::DimensionMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i + 1,
                    row.len(),
                    cols
                )));
            }
        }

        Ok(Matrix { rows, cols })
    }

    /// Integer shorthand for [`Matrix::try_from_rows`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::matrix::Matrix;
    /// let m = Matrix::try_from_i64(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::try_from_i64(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn try_from_i64(rows: Vec<Vec<i64>>) -> Result<Self, GaussError> {
        Self::try_from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(int).collect())
                .collect(),
        )
    }

    /// A matrix with no rows and `cols` columns.
    pub fn empty(cols: usize) -> Self {
        Matrix {
            rows: Vec::new(),
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols == 0
    }

    /// Entry at row `r`, column `c`. Panics when out of bounds.
    pub fn get(&self, r: usize, c: usize) -> &Scalar {
        &self.rows[r][c]
    }

    pub fn row(&self, r: usize) -> &[Scalar] {
        &self.rows[r]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<Scalar>> {
        self.rows
    }

    /// Copy of `self` with row `r` replaced. The new row must have `ncols()` entries.
    pub(crate) fn with_row(&self, r: usize, row: Vec<Scalar>) -> Matrix {
        debug_assert_eq!(row.len(), self.cols);
        let mut rows = self.rows.clone();
        rows[r] = row;
        Matrix {
            rows,
            cols: self.cols,
        }
    }

    /// Copy of `self` with rows `i` and `j` exchanged.
    pub(crate) fn with_rows_swapped(&self, i: usize, j: usize) -> Matrix {
        let mut rows = self.rows.clone();
        rows.swap(i, j);
        Matrix {
            rows,
            cols: self.cols,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        self.get(r, c)
    }
}

impl TryFrom<Vec<Vec<String>>> for Matrix {
    type Error = GaussError;

    fn try_from(raw: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        let mut rows = Vec::with_capacity(raw.len());
        for (i, raw_row) in raw.into_iter().enumerate() {
            let mut row = Vec::with_capacity(raw_row.len());
            for token in raw_row {
                let value = token
                    .trim()
                    .parse::<Scalar>()
                    .map_err(|_| GaussError::InvalidEntry {
                        line: i + 1,
                        token: token.clone(),
                    })?;
                row.push(value);
            }
            rows.push(row);
        }

        Matrix::try_from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<String>> {
    fn from(matrix: Matrix) -> Self {
        matrix
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}
