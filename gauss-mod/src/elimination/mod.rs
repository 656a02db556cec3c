//! # Elimination Module
//!
//! Gauss–Jordan elimination over a [`Ring`] that records every intermediate matrix.
//!
//! The last column is treated as the augmented (result) column: it is eliminated against but
//! never pivoted on. Each atomic row operation produces its own [`Step`], so the history reads
//! as one human-sized operation per step rather than one pivot per step.

mod step;

pub use step::{RowOperation, Step, Steps};

use crate::errors::GaussError;
use crate::matrix::Matrix;
use crate::matrix::row_ops::{scale_row, subtract_row, swap_rows};
use crate::ring::Ring;

use log::{debug, trace};
use num_traits::Zero;

/// Runs Gauss–Jordan elimination on `matrix` and returns every recorded state.
///
/// The first step is the input itself. Then, for each row `r` in turn, the engine looks for
/// the leftmost column (before the last one) holding a non-zero entry at or below `r`, swaps
/// that row up if needed, scales it so the pivot becomes 1 and clears the pivot column in
/// every other row, above and below. Swaps, scalings and each single-row elimination are all
/// recorded, including ones that leave the matrix unchanged.
///
/// Under a composite modulus a pivot without an inverse is scaled by 0 (see [`Ring::inv`]);
/// the run still completes.
///
/// # Errors
///
/// Returns `GaussError::DivisionByZero` if an ordinary inverse of 0 is requested.
///
/// # Example
///
/// ```
/// # use gauss_mod::elimination::gauss_jordan_mod_steps;
/// # use gauss_mod::matrix::Matrix;
/// # use gauss_mod::ring::Ring;
/// let m = Matrix::try_from_i64(vec![vec![2, 1], vec![1, 1]]).unwrap();
/// let steps = gauss_jordan_mod_steps(&m, &Ring::try_with(5).unwrap()).unwrap();
///
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps.initial(), &m);
/// assert_eq!(steps.result(), &Matrix::try_from_i64(vec![vec![1, 3], vec![0, 3]]).unwrap());
/// ```
pub fn gauss_jordan_mod_steps(matrix: &Matrix, ring: &Ring) -> Result<Steps, GaussError> {
    let mut M = matrix.clone();
    let (rows, cols) = M.shape();
    let mut steps = Steps::starting_from(M.clone());

    debug!(
        "eliminating {}x{} matrix, modulus {}",
        rows,
        cols,
        ring.modulus()
    );

    let mut lead = 0;
    for r in 0..rows {
        if lead + 1 >= cols {
            break;
        }

        let Some((pivot_row, pivot_col)) = find_pivot(&M, r, lead, ring) else {
            debug!("no pivot left from row {}", r + 1);
            break;
        };
        lead = pivot_col;
        debug!("pivot at row {}, column {}", pivot_row + 1, lead + 1);

        if pivot_row != r {
            M = swap_rows(&M, pivot_row, r);
            record(
                &mut steps,
                RowOperation::Swap {
                    first: r,
                    second: pivot_row,
                },
                &M,
            );
        }

        let pivot_val = ring.normalize(M.get(r, lead));
        let inv_pivot = ring.inv(&pivot_val)?;
        M = scale_row(&M, r, &inv_pivot, ring);
        record(
            &mut steps,
            RowOperation::Scale {
                row: r,
                factor: inv_pivot,
            },
            &M,
        );

        for i in (0..rows).filter(|&i| i != r) {
            let factor = ring.normalize(M.get(i, lead));
            M = subtract_row(&M, i, r, &factor, ring);
            record(
                &mut steps,
                RowOperation::Subtract {
                    target: i,
                    source: r,
                    factor,
                },
                &M,
            );
        }

        steps.record_pivot(lead);
        lead += 1;
    }

    Ok(steps)
}

/// Finds the first row at or below `r` with a non-zero entry in the lead column, moving the
/// lead column right while the current one is zero from `r` down.
///
/// Returns `(row, column)`, or `None` once only the last column is left.
fn find_pivot(M: &Matrix, r: usize, mut lead: usize, ring: &Ring) -> Option<(usize, usize)> {
    let (rows, cols) = M.shape();
    while lead + 1 < cols {
        if let Some(i) = (r..rows).find(|&i| !ring.normalize(M.get(i, lead)).is_zero()) {
            return Some((i, lead));
        }
        lead += 1;
    }

    None
}

fn record(steps: &mut Steps, operation: RowOperation, M: &Matrix) {
    trace!("step {}: {}\n{}", steps.len() + 1, operation, M);
    steps.record(operation, M);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{int, ratio};

    fn matrix(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::try_from_i64(rows).unwrap()
    }

    #[test]
    fn test_small_mod_5_trace() -> Result<(), GaussError> {
        let ring = Ring::try_with(5)?;
        let steps = gauss_jordan_mod_steps(&matrix(vec![vec![2, 1], vec![1, 1]]), &ring)?;

        let snapshots: Vec<Matrix> = steps.matrices().cloned().collect();
        assert_eq!(
            snapshots,
            vec![
                matrix(vec![vec![2, 1], vec![1, 1]]),
                matrix(vec![vec![1, 3], vec![1, 1]]),
                matrix(vec![vec![1, 3], vec![0, 3]]),
            ]
        );

        let operations: Vec<_> = steps.iter().map(|s| s.operation.clone()).collect();
        assert_eq!(
            operations,
            vec![
                None,
                Some(RowOperation::Scale {
                    row: 0,
                    factor: int(3)
                }),
                Some(RowOperation::Subtract {
                    target: 1,
                    source: 0,
                    factor: int(1)
                }),
            ]
        );
        assert_eq!(steps.pivot_columns(), &[0]);
        Ok(())
    }

    #[test]
    fn test_swap_is_recorded() -> Result<(), GaussError> {
        let ring = Ring::try_with(7)?;
        let steps = gauss_jordan_mod_steps(&matrix(vec![vec![0, 2, 1], vec![3, 1, 4]]), &ring)?;

        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps.get(1).and_then(|s| s.operation.clone()),
            Some(RowOperation::Swap {
                first: 0,
                second: 1
            })
        );
        assert_eq!(steps.get(1).map(|s| &s.matrix), Some(&matrix(vec![vec![3, 1, 4], vec![0, 2, 1]])));
        assert_eq!(steps.result(), &matrix(vec![vec![1, 0, 0], vec![0, 1, 4]]));
        assert_eq!(steps.rank(), 2);
        Ok(())
    }

    #[test]
    fn test_zero_column_is_skipped() -> Result<(), GaussError> {
        let steps = gauss_jordan_mod_steps(
            &matrix(vec![vec![0, 0, 1], vec![0, 2, 3], vec![0, 4, 5]]),
            &Ring::rational(),
        )?;

        assert_eq!(steps.len(), 5);
        assert_eq!(steps.pivot_columns(), &[1]);
        let expected = Matrix::try_from_rows(vec![
            vec![int(0), int(1), ratio(3, 2)],
            vec![int(0), int(0), int(1)],
            vec![int(0), int(0), int(-1)],
        ])?;
        assert_eq!(steps.result(), &expected);
        Ok(())
    }

    #[test]
    fn test_rows_above_pivot_are_cleared() -> Result<(), GaussError> {
        let steps = gauss_jordan_mod_steps(
            &matrix(vec![vec![1, 2, 4, 5], vec![4, 5, 6, 7], vec![8, 9, 1, 2]]),
            &Ring::rational(),
        )?;

        // 3 pivots, each with one scale and two eliminations
        assert_eq!(steps.len(), 10);
        // state right after clearing column 2 from row 1, which sits above the pivot
        let cleared_above = steps.get(5).map(|s| s.matrix.row(0).to_vec());
        assert_eq!(
            cleared_above,
            Some(vec![int(1), int(0), ratio(-8, 3), ratio(-11, 3)])
        );
        assert_eq!(
            steps.result(),
            &matrix(vec![vec![1, 0, 0, -1], vec![0, 1, 0, 1], vec![0, 0, 1, 1]])
        );
        Ok(())
    }

    #[test]
    fn test_degenerate_shapes_yield_single_snapshot() -> Result<(), GaussError> {
        let ring = Ring::try_with(3)?;
        for m in [
            Matrix::empty(4),
            matrix(vec![vec![], vec![]]),
            matrix(vec![vec![5], vec![7]]),
            matrix(vec![vec![0, 1], vec![0, 2]]),
        ] {
            let steps = gauss_jordan_mod_steps(&m, &ring)?;
            assert_eq!(steps.len(), 1);
            assert_eq!(steps.result(), &m);
            assert_eq!(steps.rank(), 0);
        }
        Ok(())
    }

    #[test]
    fn test_composite_modulus_zeroes_non_invertible_pivot() -> Result<(), GaussError> {
        let ring = Ring::try_with(6)?;
        let steps = gauss_jordan_mod_steps(&matrix(vec![vec![2, 4, 1], vec![3, 1, 1]]), &ring)?;

        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps.get(1).and_then(|s| s.operation.clone()),
            Some(RowOperation::Scale {
                row: 0,
                factor: int(0)
            })
        );
        assert_eq!(steps.result(), &matrix(vec![vec![0, 0, 0], vec![3, 1, 1]]));
        Ok(())
    }

    #[test]
    fn test_input_is_not_modified() -> Result<(), GaussError> {
        let m = matrix(vec![vec![3, 4, 5], vec![6, 1, 2]]);
        let copy = m.clone();
        let steps = gauss_jordan_mod_steps(&m, &Ring::try_with(11)?)?;
        assert_eq!(m, copy);
        assert_eq!(steps.initial(), &copy);
        Ok(())
    }
}
