//! Parse error taxonomy.
//!
//! All parse failures are fatal to the call: no partial expression is
//! ever returned. The variants serialize with stable `kind` tags so the
//! CLI's JSON mode can emit them structurally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing an expression string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "operand", rename_all = "snake_case")]
pub enum ParseError {
    /// No operator token was recognised between the operands.
    #[error("no operator found in expression")]
    MissingOperator,

    /// The text before the operator did not parse as a signed decimal
    /// number. Carries the offending operand text.
    #[error("invalid left operand '{0}'")]
    InvalidLeftOperand(String),

    /// The text after the operator did not parse as a signed decimal
    /// number. Carries the offending operand text.
    #[error("invalid right operand '{0}'")]
    InvalidRightOperand(String),
}
