use crate::errors::GaussError;
use crate::matrix::Matrix;
use crate::ring::{Ring, Scalar, int};

use num_traits::Zero;

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let rows = (0..n)
        .map(|i| (0..n).map(|j| int(i64::from(i == j))).collect())
        .collect();
    Matrix {
        rows,
        cols: n,
    }
}

/// Places `right` next to `left`, producing `[left | right]`.
///
/// # Errors
///
/// Returns `GaussError::DimensionMismatch` if the row counts differ.
pub fn augment(left: &Matrix, right: &Matrix) -> Result<Matrix, GaussError> {
    if left.nrows() != right.nrows() {
        return Err(GaussError::DimensionMismatch(format!(
            "Cannot augment a matrix with {} rows by one with {} rows",
            left.nrows(),
            right.nrows()
        )));
    }

    let rows = left
        .rows()
        .zip(right.rows())
        .map(|(l, r)| l.iter().chain(r).cloned().collect())
        .collect();
    Ok(Matrix {
        rows,
        cols: left.ncols() + right.ncols(),
    })
}

/// Splits a matrix into the columns before `at` and the columns from `at` on.
///
/// Panics if `at > ncols()`.
pub fn split_at_column(matrix: &Matrix, at: usize) -> (Matrix, Matrix) {
    assert!(at <= matrix.ncols(), "split column {} out of range", at);

    let (left, right) = matrix
        .rows()
        .map(|row| (row[..at].to_vec(), row[at..].to_vec()))
        .unzip();
    (
        Matrix {
            rows: left,
            cols: at,
        },
        Matrix {
            rows: right,
            cols: matrix.ncols() - at,
        },
    )
}

/// Computes the matrix product `C = AB`, each entry reduced in `ring`.
///
/// # Errors
///
/// Returns `GaussError::DimensionMismatch` if the inner dimensions of the matrices do not match.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, GaussError> {
    if a.ncols() != b.nrows() {
        return Err(GaussError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            a.ncols(),
            b.nrows()
        )));
    }

    let rows = a
        .rows()
        .map(|row| {
            (0..b.ncols())
                .map(|j| {
                    let sum = row
                        .iter()
                        .enumerate()
                        .fold(Scalar::zero(), |acc, (k, x)| acc + x * b.get(k, j));
                    ring.normalize(&sum)
                })
                .collect()
        })
        .collect();
    Ok(Matrix {
        rows,
        cols: b.ncols(),
    })
}
