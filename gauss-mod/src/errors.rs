#[derive(thiserror::Error, Debug)]
pub enum GaussError {
    /// Ordinary (p = 1) inverse requested for zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Error when creating a ring with an invalid modulus (p == 0 or unparsable).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Matrix input is empty")]
    EmptyInput,
    #[error("Invalid entry '{token}' on line {line}")]
    InvalidEntry { line: usize, token: String },

    /// A deserialized step history that no elimination run could have produced.
    #[error("InvalidSteps: {0}")]
    InvalidSteps(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
