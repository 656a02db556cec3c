//! Text output: LaTeX for typeset display and plain text for logs.

use crate::elimination::{RowOperation, Steps};
use crate::matrix::Matrix;
use crate::ring::Scalar;

use itertools::Itertools;
use num_traits::Signed;

use std::fmt;

/// `3`, `-\frac{1}{3}`
pub fn scalar_to_latex(value: &Scalar) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }

    let sign = if value.is_negative() { "-" } else { "" };
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign,
        value.numer().abs(),
        value.denom()
    )
}

/// Renders a matrix as a `pmatrix` environment.
///
/// Entries are right-aligned to a width of 2 and joined with ` & `; rows are joined with
/// ` \\` and a newline.
///
/// # Example
///
/// ```
/// # use gauss_mod::matrix::Matrix;
/// # use gauss_mod::render::matrix_to_latex;
/// let m = Matrix::try_from_i64(vec![vec![1, 2], vec![3, 10]]).unwrap();
/// assert_eq!(
///     matrix_to_latex(&m),
///     "\\begin{pmatrix}\n 1 &  2 \\\\\n 3 & 10\n\\end{pmatrix}"
/// );
/// ```
pub fn matrix_to_latex(matrix: &Matrix) -> String {
    let rows = matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|x| format!("{:>2}", scalar_to_latex(x)))
                .join(" & ")
        })
        .join(" \\\\\n");

    format!("\\begin{{pmatrix}}\n{}\n\\end{{pmatrix}}", rows)
}

/// `R_{1} \leftrightarrow R_{2}` and friends, rows numbered from 1.
pub fn operation_to_latex(operation: &RowOperation) -> String {
    match operation {
        RowOperation::Swap { first, second } => {
            format!("R_{{{}}} \\leftrightarrow R_{{{}}}", first + 1, second + 1)
        }
        RowOperation::Scale { row, factor } => format!(
            "R_{{{}}} \\to {} R_{{{}}}",
            row + 1,
            latex_factor(factor),
            row + 1
        ),
        RowOperation::Subtract {
            target,
            source,
            factor,
        } => {
            let sign = if factor.is_negative() { "+" } else { "-" };
            format!(
                "R_{{{}}} \\to R_{{{}}} {} {} R_{{{}}}",
                target + 1,
                target + 1,
                sign,
                latex_factor(&factor.abs()),
                source + 1
            )
        }
    }
}

fn latex_factor(factor: &Scalar) -> String {
    if factor.is_negative() {
        format!("\\left({}\\right)", scalar_to_latex(factor))
    } else {
        scalar_to_latex(factor)
    }
}

/// Heading for step `index` out of `total`: the last one is the final result.
pub fn step_label(index: usize, total: usize) -> String {
    if index + 1 == total {
        "Final result:".to_string()
    } else {
        format!("Step {}:", index + 1)
    }
}

/// One `pmatrix` string per recorded step.
pub fn steps_to_latex(steps: &Steps) -> Vec<String> {
    steps.matrices().map(matrix_to_latex).collect()
}

/// A LaTeX fragment listing every step with its label and row operation.
pub fn steps_to_latex_document(steps: &Steps) -> String {
    let total = steps.len();
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let heading = match &step.operation {
                Some(operation) => format!(
                    "{} ${}$",
                    step_label(i, total),
                    operation_to_latex(operation)
                ),
                None => step_label(i, total),
            };
            format!("{}\n\\[\n{}\n\\]", heading, matrix_to_latex(&step.matrix))
        })
        .join("\n\n")
}

impl fmt::Display for Matrix {
    /// Bracketed rows with entries right-aligned to the widest one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row.iter().map(|cell| format!("{:>width$}", cell)).join("  ");
            write!(f, "[ {} ]", line)?;
        }

        Ok(())
    }
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOperation::Swap { first, second } => {
                write!(f, "R{} ↔ R{}", first + 1, second + 1)
            }
            RowOperation::Scale { row, factor } => {
                write!(f, "R{} → {}·R{}", row + 1, plain_factor(factor), row + 1)
            }
            RowOperation::Subtract {
                target,
                source,
                factor,
            } => {
                let sign = if factor.is_negative() { '+' } else { '−' };
                write!(
                    f,
                    "R{} → R{} {} {}·R{}",
                    target + 1,
                    target + 1,
                    sign,
                    plain_factor(&factor.abs()),
                    source + 1
                )
            }
        }
    }
}

fn plain_factor(factor: &Scalar) -> String {
    if factor.is_integer() && !factor.is_negative() {
        factor.to_string()
    } else {
        format!("({})", factor)
    }
}
