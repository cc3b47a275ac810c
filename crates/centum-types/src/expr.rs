//! The parsed expression value and its operator set.

use std::fmt;

// ── Operators ─────────────────────────────────────────────────────────

/// The closed set of percentage operators.
///
/// Parsing is the only producer, so an expression with an unknown or
/// missing operator is unrepresentable. Every consumer matches
/// exhaustively; there is no fallthrough arm anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`: add right percent of left.
    Add,
    /// `-`: subtract right percent of left.
    Sub,
    /// `*`, `x`, or `X`: multiply by right percent of left.
    Mul,
    /// `/`: divide by right percent of left.
    Div,
    /// `of` (any case): left percent of right.
    Of,
    /// `in` (any case): left as a percentage of right.
    In,
}

impl Op {
    /// Look up a single-rune operator. The two-letter keywords (`of`,
    /// `in`) need lookahead and are recognised by the parser instead.
    pub fn from_symbol(ch: char) -> Option<Op> {
        Some(match ch {
            '+' => Op::Add,
            '-' => Op::Sub,
            '*' | 'x' | 'X' => Op::Mul,
            '/' => Op::Div,
            _ => return None,
        })
    }

    /// Returns the operator's source symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Of => "of",
            Op::In => "in",
        }
    }

    /// Returns `true` if results under this operator denote a
    /// percentage and carry a `%` suffix when rendered.
    pub fn is_percentage(&self) -> bool {
        matches!(self, Op::In)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Expression ────────────────────────────────────────────────────────

/// A parsed percentage expression: one left operand, one operator, one
/// right operand.
///
/// Immutable once constructed; the parser is the only writer. For most
/// operators `right` is read as a percentage magnitude; `of` and `in`
/// reorder the roles (see the evaluator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expr {
    /// The value preceding the operator.
    pub left: f64,
    /// The recognised operator.
    pub op: Op,
    /// The value following the operator.
    pub right: f64,
}

impl Expr {
    /// Create an expression from its three parts.
    pub fn new(left: f64, op: Op, right: f64) -> Self {
        Self { left, op, right }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
