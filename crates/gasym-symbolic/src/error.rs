//! Error type for symbolic computation.

/// Failures raised by the polynomial, matrix and solver layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolicError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Equation is not linear in the unknowns (offending term: {0})")]
    NonLinear(String),

    #[error("Singular system: coefficient determinant is identically zero")]
    Singular,

    #[error("No solution found for '{0}'")]
    MissingSolution(String),
}
