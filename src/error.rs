use std::fmt;

/// Error types for complex arithmetic.
///
/// Every failure is terminal for the call that produced it. Values are
/// immutable, so a failed operation leaves no partial state behind.
#[derive(Clone, Debug, PartialEq)]
pub enum MathError {
    /// A required component or operand was never supplied.
    MissingOperand(String),
    /// A mathematically undefined operation on otherwise valid input.
    DomainError(String),
    /// A structurally invalid parameter.
    InvalidArgument(String),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::MissingOperand(msg) => write!(f, "Missing operand: {}", msg),
            MathError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            MathError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for MathError {}
