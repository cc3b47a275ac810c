//! centum evaluator: turns a parsed [`Expr`] into a rounded number.
//!
//! [`Expr`]: centum_types::Expr

mod error;
mod evaluator;

pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, round2};
