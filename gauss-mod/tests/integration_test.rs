use gauss_mod::errors::GaussError;
use gauss_mod::matrix::Matrix;
use gauss_mod::matrix::ops::{augment, identity_matrix, matrix_mul, split_at_column};
use gauss_mod::render::{matrix_to_latex, step_label};
use gauss_mod::ring::{Ring, int};
use gauss_mod::{gauss_jordan_mod_steps, parse_matrix, parse_modulus};

#[test]
fn happy_flow() -> Result<(), GaussError> {
    let matrix = parse_matrix("1 2 4 5\n4 5 6 7\n8 9 1 2")?;
    let ring = parse_modulus("1")?;

    let steps = gauss_jordan_mod_steps(&matrix, &ring)?;
    let rendered: Vec<(String, String)> = steps
        .matrices()
        .enumerate()
        .map(|(i, m)| (step_label(i, steps.len()), matrix_to_latex(m)))
        .collect();

    dbg!(&rendered);

    assert_eq!(rendered.len(), 10);
    assert_eq!(rendered[0].0, "Step 1:");
    assert_eq!(rendered[9].0, "Final result:");
    assert_eq!(
        rendered[9].1,
        "\\begin{pmatrix}\n 1 &  0 &  0 & -1 \\\\\n 0 &  1 &  0 &  1 \\\\\n 0 &  0 &  1 &  1\n\\end{pmatrix}"
    );

    Ok(())
}

#[test]
fn placeholder_matrix_reduces_without_touching_last_column_as_pivot() -> Result<(), GaussError> {
    let matrix =
        Matrix::try_from_i64(vec![vec![1, 2, 4, 5], vec![4, 5, 6, 7], vec![8, 9, 1, 2]])?;
    let steps = gauss_jordan_mod_steps(&matrix, &Ring::rational())?;

    assert_eq!(steps.initial(), &matrix);
    assert_eq!(steps.pivot_columns(), &[0, 1, 2]);
    assert_eq!(
        steps.result(),
        &Matrix::try_from_i64(vec![vec![1, 0, 0, -1], vec![0, 1, 0, 1], vec![0, 0, 1, 1]])?
    );

    Ok(())
}

#[test]
fn two_by_two_mod_five() -> Result<(), GaussError> {
    let matrix = Matrix::try_from_i64(vec![vec![2, 1], vec![1, 1]])?;
    let steps = gauss_jordan_mod_steps(&matrix, &Ring::try_with(5)?)?;

    let matrices = steps.into_matrices();
    assert_eq!(matrices.len(), 3);
    assert_eq!(matrices[1], Matrix::try_from_i64(vec![vec![1, 3], vec![1, 1]])?);
    assert_eq!(matrices[2], Matrix::try_from_i64(vec![vec![1, 3], vec![0, 3]])?);

    Ok(())
}

#[test]
fn inverse_from_augmented_identity() -> Result<(), GaussError> {
    let ring = Ring::try_with(7)?;
    let a = Matrix::try_from_i64(vec![vec![2, 3], vec![1, 4]])?;

    let steps = gauss_jordan_mod_steps(&augment(&a, &identity_matrix(2))?, &ring)?;
    let (left, inverse) = split_at_column(steps.result(), 2);

    assert_eq!(left, identity_matrix(2));
    assert_eq!(inverse, Matrix::try_from_i64(vec![vec![5, 5], vec![4, 6]])?);
    assert_eq!(matrix_mul(&a, &inverse, &ring)?, identity_matrix(2));

    Ok(())
}

#[test]
fn composite_modulus_quirk_is_silent() -> Result<(), GaussError> {
    let ring = Ring::try_with(6)?;
    let matrix = Matrix::try_from_i64(vec![vec![2, 4, 1], vec![3, 1, 1]])?;

    let steps = gauss_jordan_mod_steps(&matrix, &ring)?;
    assert_eq!(steps.result().row(0), &[int(0), int(0), int(0)]);

    Ok(())
}

#[test]
fn steps_survive_json_export() -> Result<(), GaussError> {
    let matrix = parse_matrix("0 2 1\n3 1 4")?;
    let steps = gauss_jordan_mod_steps(&matrix, &Ring::try_with(7)?)?;

    let json = serde_json::to_string_pretty(&steps)?;
    assert!(json.contains("\"kind\": \"swap\""));

    let restored: gauss_mod::Steps = serde_json::from_str(&json)?;
    assert_eq!(restored, steps);

    Ok(())
}

#[test]
fn empty_step_history_is_rejected_on_import() {
    let result = serde_json::from_str::<gauss_mod::Steps>(r#"{"steps":[],"pivot_columns":[]}"#);
    assert!(result.is_err());
}
