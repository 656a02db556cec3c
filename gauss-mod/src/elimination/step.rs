use crate::errors::GaussError;
use crate::matrix::Matrix;
use crate::ring::{Scalar, scalar_str};

use serde::{Deserialize, Serialize};

/// The row operation that produced a snapshot. Row indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowOperation {
    /// Rows `first` and `second` exchanged.
    Swap { first: usize, second: usize },
    /// Row `row` multiplied by `factor`.
    Scale {
        row: usize,
        #[serde(with = "scalar_str")]
        factor: Scalar,
    },
    /// `factor` times row `source` subtracted from row `target`.
    Subtract {
        target: usize,
        source: usize,
        #[serde(with = "scalar_str")]
        factor: Scalar,
    },
}

/// One recorded matrix state. `operation` is `None` only for the initial snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub operation: Option<RowOperation>,
    pub matrix: Matrix,
}

/// Chronological history of an elimination run, from the input matrix to the reduced form.
///
/// Never empty: the first step is always the untouched input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSteps")]
pub struct Steps {
    steps: Vec<Step>,
    pivot_columns: Vec<usize>,
}

#[derive(Deserialize)]
struct RawSteps {
    steps: Vec<Step>,
    pivot_columns: Vec<usize>,
}

impl TryFrom<RawSteps> for Steps {
    type Error = GaussError;

    fn try_from(raw: RawSteps) -> Result<Self, Self::Error> {
        let Some((first, rest)) = raw.steps.split_first() else {
            return Err(GaussError::InvalidSteps("history holds no steps".to_string()));
        };
        if first.operation.is_some() {
            return Err(GaussError::InvalidSteps(
                "first step must be the input, without an operation".to_string(),
            ));
        }
        if let Some(i) = rest.iter().position(|step| step.operation.is_none()) {
            return Err(GaussError::InvalidSteps(format!(
                "step {} has no operation",
                i + 2
            )));
        }
        if let Some(i) = rest.iter().position(|step| step.matrix.shape() != first.matrix.shape()) {
            return Err(GaussError::InvalidSteps(format!(
                "step {} changes the matrix shape",
                i + 2
            )));
        }

        Ok(Steps {
            steps: raw.steps,
            pivot_columns: raw.pivot_columns,
        })
    }
}

impl Steps {
    pub(crate) fn starting_from(initial: Matrix) -> Self {
        Steps {
            steps: vec![Step {
                operation: None,
                matrix: initial,
            }],
            pivot_columns: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, operation: RowOperation, matrix: &Matrix) {
        self.steps.push(Step {
            operation: Some(operation),
            matrix: matrix.clone(),
        });
    }

    pub(crate) fn record_pivot(&mut self, column: usize) {
        self.pivot_columns.push(column);
    }

    /// The input matrix.
    pub fn initial(&self) -> &Matrix {
        &self.steps[0].matrix
    }

    /// The last snapshot: the reduced row-echelon form.
    pub fn result(&self) -> &Matrix {
        &self.steps[self.steps.len() - 1].matrix
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn matrices(&self) -> impl Iterator<Item = &Matrix> {
        self.steps.iter().map(|step| &step.matrix)
    }

    pub fn into_matrices(self) -> Vec<Matrix> {
        self.steps.into_iter().map(|step| step.matrix).collect()
    }

    /// Columns that received a pivot, in the order they were processed.
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivot_columns
    }

    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::gauss_jordan_mod_steps;
    use crate::ring::Ring;

    #[test]
    fn test_deserialize_rejects_impossible_histories() {
        for json in [
            r#"{"steps":[],"pivot_columns":[]}"#,
            r#"{"steps":[{"operation":{"kind":"swap","first":0,"second":1},"matrix":[["1"]]}],"pivot_columns":[]}"#,
            r#"{"steps":[{"operation":null,"matrix":[["1"]]},{"operation":null,"matrix":[["1"]]}],"pivot_columns":[]}"#,
            r#"{"steps":[{"operation":null,"matrix":[["1"]]},{"operation":{"kind":"scale","row":0,"factor":"1"},"matrix":[["1","2"]]}],"pivot_columns":[]}"#,
        ] {
            assert!(serde_json::from_str::<Steps>(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_deserialize_single_snapshot() -> Result<(), GaussError> {
        let steps: Steps =
            serde_json::from_str(r#"{"steps":[{"operation":null,"matrix":[["3","1/2"]]}],"pivot_columns":[]}"#)?;
        assert_eq!(steps.len(), 1);
        assert_eq!(steps.initial(), steps.result());

        let m = Matrix::try_from_i64(vec![vec![2, 1], vec![1, 1]])?;
        let run = gauss_jordan_mod_steps(&m, &Ring::try_with(5)?)?;
        let restored: Steps = serde_json::from_str(&serde_json::to_string(&run)?)?;
        assert_eq!(restored, run);
        Ok(())
    }
}
