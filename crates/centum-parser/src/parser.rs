//! Three-phase expression parse: left operand, operator, right operand.

use centum_scanner::{is_numeric, is_separator, Scanner};
use centum_types::{Expr, Op, ParseError, Result};

/// Parse one percentage expression, e.g. `"55 + 55%"` or `"50% of 100"`.
///
/// Whitespace and literal `%` runes are interchangeable separators
/// anywhere between tokens. Trailing runes after the right operand are
/// tolerated and ignored.
pub fn parse(input: &str) -> Result<Expr> {
    Parser::new(input).parse()
}

/// The centum parser.
///
/// Drives a [`Scanner`] through the three phases and assembles an
/// [`Expr`]. Each instance parses exactly one input string.
pub struct Parser {
    scanner: Scanner,
}

impl Parser {
    /// Create a parser over the given expression text.
    pub fn new(input: &str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Run all three phases and build the expression.
    ///
    /// Failures are checked in a fixed order: missing operator first,
    /// then the left operand, then the right.
    pub fn parse(mut self) -> Result<Expr> {
        let left = self.scan_left_operand();
        let op = self.scan_operator().ok_or(ParseError::MissingOperator)?;
        let right = self.scan_right_operand();

        let left = left
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidLeftOperand(left))?;
        let right = right
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidRightOperand(right))?;

        Ok(Expr::new(left, op, right))
    }

    // ── Phase 1: left operand ─────────────────────────────────────────

    /// Collect the left operand's runes.
    ///
    /// A minus is a unary sign continuing the number unless the rune
    /// consumed just before it was a separator, in which case it opens the
    /// operator phase ("100 -50%") and is pushed back.
    fn scan_left_operand(&mut self) -> String {
        let mut buf = String::new();
        let mut after_separator = false;

        while let Some(ch) = self.scanner.read() {
            if is_separator(ch) {
                after_separator = true;
                continue;
            }

            if is_numeric(ch) {
                if ch == '-' && after_separator {
                    self.scanner.unread();
                    break;
                }
                buf.push(ch);
                after_separator = false;
                continue;
            }

            self.scanner.unread();
            break;
        }

        buf
    }

    // ── Phase 2: operator ─────────────────────────────────────────────

    /// Recognise the operator token, or `None` on anything else.
    ///
    /// The two-letter keywords need one rune of lookahead: after an
    /// `o`/`O` or `i`/`I`, a mismatched second rune is pushed back and
    /// the phase ends without an operator.
    fn scan_operator(&mut self) -> Option<Op> {
        loop {
            let ch = self.scanner.read()?;
            if is_separator(ch) {
                continue;
            }

            match ch {
                '+' | '-' | '*' | 'x' | 'X' | '/' => return Op::from_symbol(ch),
                'o' | 'O' => return self.finish_keyword(&['f', 'F'], Op::Of),
                'i' | 'I' => return self.finish_keyword(&['n', 'N'], Op::In),
                _ => {
                    self.scanner.unread();
                    return None;
                }
            }
        }
    }

    /// Read the second rune of a keyword operator.
    fn finish_keyword(&mut self, expected: &[char], op: Op) -> Option<Op> {
        match self.scanner.read() {
            Some(ch) if expected.contains(&ch) => Some(op),
            Some(_) => {
                self.scanner.unread();
                None
            }
            None => None,
        }
    }

    // ── Phase 3: right operand ────────────────────────────────────────

    /// Collect the right operand's runes.
    ///
    /// No minus ambiguity here: the operator is already consumed, so
    /// every minus is a sign. Stops at the first non-numeric,
    /// non-separator rune; whatever trails is ignored.
    fn scan_right_operand(&mut self) -> String {
        let mut buf = String::new();

        while let Some(ch) = self.scanner.read() {
            if is_separator(ch) {
                continue;
            }

            if is_numeric(ch) {
                buf.push(ch);
                continue;
            }

            self.scanner.unread();
            break;
        }

        buf
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
