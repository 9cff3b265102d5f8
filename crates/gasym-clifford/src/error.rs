//! Error type for the geometric-algebra engine.

use gasym_symbolic::SymbolicError;

#[derive(Debug, thiserror::Error)]
pub enum CliffordError {
    #[error("Multivector is not invertible: {0}")]
    NotInvertible(String),

    #[error("Inverse is only available for up to 5 generators, got {0}")]
    UnsupportedDimension(usize),

    #[error("Unknown algebra '{got}' (expected one of: {expected})")]
    UnknownAlgebra { got: String, expected: String },

    #[error("Unknown product '{got}' (expected one of: {expected})")]
    UnknownProduct { got: String, expected: String },

    #[error("Unknown input shape '{got}' (expected one of: {expected})")]
    UnknownShape { got: String, expected: String },

    #[error("Unknown layout '{got}' (expected one of: {expected})")]
    UnknownLayout { got: String, expected: String },

    #[error("Unknown output format '{got}' (expected one of: {expected})")]
    UnknownFormat { got: String, expected: String },

    #[error(transparent)]
    Symbolic(#[from] SymbolicError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
