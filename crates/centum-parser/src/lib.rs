//! centum parser: converts expression text into a structured [`Expr`].
//!
//! [`Expr`]: centum_types::Expr

mod parser;

pub use parser::{parse, Parser};
