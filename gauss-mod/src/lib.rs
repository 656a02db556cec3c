#![allow(non_snake_case)]

//! Step-by-step Gauss–Jordan elimination over the rationals or modulo p.
//!
//! ```
//! use gauss_mod::{gauss_jordan_mod_steps, parse_matrix, parse_modulus};
//! use gauss_mod::render::matrix_to_latex;
//!
//! let matrix = parse_matrix("2 1\n1 1").unwrap();
//! let ring = parse_modulus("5").unwrap();
//! let steps = gauss_jordan_mod_steps(&matrix, &ring).unwrap();
//!
//! for latex in steps.matrices().map(matrix_to_latex) {
//!     println!("{latex}");
//! }
//! ```

pub mod elimination;
pub mod errors;
pub mod matrix;
pub mod parse;
pub mod render;
pub mod ring;

pub use elimination::{RowOperation, Step, Steps, gauss_jordan_mod_steps};
pub use errors::GaussError;
pub use matrix::Matrix;
pub use parse::{parse_matrix, parse_modulus};
pub use ring::{Ring, Scalar};
