//! Text input: matrix literals as typed into a text area, and the modulus field.

use crate::errors::GaussError;
use crate::matrix::Matrix;
use crate::ring::{Ring, Scalar};

use num_bigint::BigInt;
use num_traits::Zero;

/// Parses a whitespace-separated matrix literal, one row per line.
///
/// Entries may be integers (`-3`), fractions (`4/6`) or decimals (`0.25`); all are read
/// exactly. Surrounding blank space is ignored, but a blank line between rows counts as an
/// empty row and makes the input ragged.
///
/// # Errors
///
/// * `GaussError::EmptyInput` if the text holds nothing but whitespace.
/// * `GaussError::InvalidEntry` for a token that is not a number (1-based line number).
/// * `GaussError::DimensionMismatch` if rows differ in length.
///
/// # Example
///
/// ```
/// # use gauss_mod::parse::parse_matrix;
/// let m = parse_matrix("1 2 4 5\n4 5 6 7\n8 9 1 2").unwrap();
/// assert_eq!(m.shape(), (3, 4));
/// ```
pub fn parse_matrix(text: &str) -> Result<Matrix, GaussError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GaussError::EmptyInput);
    }

    let rows = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|token| {
                    parse_scalar(token).ok_or_else(|| GaussError::InvalidEntry {
                        line: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Matrix::try_from_rows(rows)
}

/// Parses the modulus field. `1` means ordinary arithmetic.
///
/// # Errors
///
/// Returns `GaussError::InvalidModulus` for empty, negative, non-numeric or zero input.
pub fn parse_modulus(text: &str) -> Result<Ring, GaussError> {
    let trimmed = text.trim();
    let modulus = trimmed.parse::<u64>().map_err(|_| {
        GaussError::InvalidModulus(format!("'{}' is not a positive integer", trimmed))
    })?;

    Ring::try_with(modulus)
}

/// Parses one entry: integer, `numer/denom` fraction or decimal. `None` if malformed.
pub fn parse_scalar(token: &str) -> Option<Scalar> {
    if let Some((numer, denom)) = token.split_once('/') {
        let numer: BigInt = numer.parse().ok()?;
        let denom: BigInt = denom.parse().ok()?;
        if denom.is_zero() {
            return None;
        }
        return Some(Scalar::new(numer, denom));
    }

    if token.contains('.') {
        return parse_decimal(token);
    }

    token.parse::<BigInt>().ok().map(Scalar::from_integer)
}

fn parse_decimal(token: &str) -> Option<Scalar> {
    let (whole, frac) = token.split_once('.')?;
    let (negative, digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };

    if digits.is_empty() && frac.is_empty() {
        return None;
    }
    if !digits.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let magnitude: BigInt = format!("{}{}", digits, frac).parse().ok()?;
    let numer = if negative { -magnitude } else { magnitude };
    let denom = num_traits::pow(BigInt::from(10), frac.len());

    Some(Scalar::new(numer, denom))
}
