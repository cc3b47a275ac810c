//! Shared types for the centum pipeline.
//!
//! This crate defines the parsed [`Expr`] value, the closed [`Op`]
//! operator set, and the parse-error taxonomy shared by the scanner,
//! parser, and evaluator crates.

mod error;
mod expr;

pub use error::ParseError;
pub use expr::{Expr, Op};

/// Result type used throughout the centum parsing pipeline.
pub type Result<T> = std::result::Result<T, ParseError>;
