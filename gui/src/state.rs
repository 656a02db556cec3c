use gauss_mod::{Matrix, Ring, Steps, gauss_jordan_mod_steps, parse_matrix, parse_modulus};

use serde::{Deserialize, Serialize};

/// Everything written to disk by the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepsExport {
    pub modulus: Ring,
    pub input: Matrix,
    pub steps: Steps,
}

/// Text typed into the page plus whatever was derived from it on the last change.
pub struct State {
    pub matrix_text: String,
    pub modulus_text: String,
    pub matrix_error: Option<String>,
    pub modulus_error: Option<String>,
    pub run_error: Option<String>,
    ring: Ring,
    steps: Option<Steps>,
}

impl State {
    pub fn new() -> Self {
        Self {
            matrix_text: String::new(),
            modulus_text: "1".to_string(),
            matrix_error: None,
            modulus_error: None,
            run_error: None,
            ring: Ring::rational(),
            steps: None,
        }
    }

    pub fn steps(&self) -> Option<&Steps> {
        self.steps.as_ref()
    }

    /// Re-parses both fields and reruns the elimination. An untouched matrix field is not an error.
    pub fn recompute(&mut self) {
        self.steps = None;
        self.run_error = None;

        match parse_modulus(&self.modulus_text) {
            Ok(ring) => {
                self.ring = ring;
                self.modulus_error = None;
            }
            Err(e) => self.modulus_error = Some(e.to_string()),
        }

        if self.matrix_text.trim().is_empty() {
            self.matrix_error = None;
            return;
        }

        let matrix = match parse_matrix(&self.matrix_text) {
            Ok(matrix) => {
                self.matrix_error = None;
                matrix
            }
            Err(e) => {
                log::debug!("matrix input rejected: {}", e);
                self.matrix_error = Some(e.to_string());
                return;
            }
        };

        if self.modulus_error.is_some() {
            return;
        }

        match gauss_jordan_mod_steps(&matrix, &self.ring) {
            Ok(steps) => {
                log::debug!("recomputed {} steps", steps.len());
                self.steps = Some(steps);
            }
            Err(e) => self.run_error = Some(e.to_string()),
        }
    }

    pub fn export(&self) -> Option<StepsExport> {
        self.steps.as_ref().map(|steps| StepsExport {
            modulus: self.ring,
            input: steps.initial().clone(),
            steps: steps.clone(),
        })
    }
}
