//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating a well-formed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `in` asks what percent the left operand is of zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
