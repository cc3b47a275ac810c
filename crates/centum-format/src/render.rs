//! Human-readable rendering of expressions and their results.

use crate::comma::group_thousands;
use centum_eval::evaluate;
use centum_types::{Expr, Op};

/// Render the normalized form of a parsed expression.
///
/// `+ - * /` print as `"left <symbol> right%"` with `×` and `÷` glyphs
/// for multiplication and division; `of` and `in` print in their
/// reordered reading: `"left% of right"` and `"left in right"`.
/// Operands are comma-grouped.
pub fn format_expression(expr: &Expr) -> String {
    let left = group_thousands(expr.left);
    let right = group_thousands(expr.right);
    match expr.op {
        Op::Add => format!("{left} + {right}%"),
        Op::Sub => format!("{left} - {right}%"),
        Op::Mul => format!("{left} × {right}%"),
        Op::Div => format!("{left} ÷ {right}%"),
        Op::Of => format!("{left}% of {right}"),
        Op::In => format!("{left} in {right}"),
    }
}

/// Render the evaluated result.
///
/// The rounded value is comma-grouped; `in` results denote a
/// percentage and carry a `%` suffix. A failed evaluation renders the
/// error's message text in place of a number.
pub fn format_value(expr: &Expr) -> String {
    match evaluate(expr) {
        Ok(value) if expr.op.is_percentage() => format!("{}%", group_thousands(value)),
        Ok(value) => group_thousands(value),
        Err(err) => err.to_string(),
    }
}
