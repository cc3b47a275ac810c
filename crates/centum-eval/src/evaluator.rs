//! Operator formulas and fixed two-decimal rounding.

use crate::error::{EvalError, EvalResult};
use centum_types::{Expr, Op};

/// Evaluate an expression to its rounded numeric result.
///
/// For `+ - * /` the right operand is read as a percentage of the left,
/// and the operator is applied against that percent-of-left quantity.
/// `*` and `/` therefore multiply/divide by percent-of-left rather than
/// by the right operand itself: "50 * 10" is 50 × (50 × 10⁄100) = 250.
/// `of` and `in` reorder the operands as "left% of right" and "left as
/// a percentage of right".
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let value = match expr.op {
        Op::Add => expr.left + percent_of(expr.left, expr.right),
        Op::Sub => expr.left - percent_of(expr.left, expr.right),
        Op::Mul => expr.left * percent_of(expr.left, expr.right),
        Op::Div => expr.left / percent_of(expr.left, expr.right),
        Op::Of => percent_of(expr.right, expr.left),
        Op::In => {
            if expr.right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            expr.left / expr.right * 100.0
        }
    };

    Ok(round2(value))
}

/// `p` percent of `x`.
fn percent_of(x: f64, p: f64) -> f64 {
    x / 100.0 * p
}

/// Round to two decimal places, ties away from zero.
///
/// Scales by 100, shifts half a unit outward, truncates toward zero in
/// `f64` (no integer round-trip, so magnitudes like 3 × 10¹³ survive),
/// and scales back.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    (scaled + 0.5_f64.copysign(scaled)).trunc() / 100.0
}

// ── Tests ─────────────────────────────────────────────────────────────
