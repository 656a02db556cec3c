//! Elementary row operations.
//!
//! Each operation borrows its input and returns a fresh [`Matrix`], so a snapshot taken
//! before the call is never affected by it. Row indices must lie in `0..nrows()`; an index
//! outside that range is a caller bug and panics.

use crate::matrix::Matrix;
use crate::ring::{Ring, Scalar};

/// Exchanges rows `i` and `j`.
pub fn swap_rows(matrix: &Matrix, i: usize, j: usize) -> Matrix {
    matrix.with_rows_swapped(i, j)
}

/// Replaces row `r` with `scalar * row` reduced in `ring`.
pub fn scale_row(matrix: &Matrix, r: usize, scalar: &Scalar, ring: &Ring) -> Matrix {
    let scaled = matrix.row(r).iter().map(|x| ring.mul(x, scalar)).collect();
    matrix.with_row(r, scaled)
}

/// Replaces row `target` with `target - factor * source` reduced in `ring`.
pub fn subtract_row(
    matrix: &Matrix,
    target: usize,
    source: usize,
    factor: &Scalar,
    ring: &Ring,
) -> Matrix {
    let eliminated = matrix
        .row(target)
        .iter()
        .zip(matrix.row(source))
        .map(|(x, s)| ring.sub(x, &(factor * s)))
        .collect();
    matrix.with_row(target, eliminated)
}
