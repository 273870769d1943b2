//! Formula evaluation.
//!
//! Recursive descent over a pre-tokenized formula, one function per
//! precedence tier:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor | '+/-')*
//! factor     := number | '(' expression ')' | cell-reference
//! ```
//!
//! The tiers share a forward-only `Cursor` into the token slice and hand
//! results up as `Eval` pairs. The first error latches: an errored `Eval`
//! is returned unchanged by every tier above it, so no further tokens are
//! consumed and no arithmetic is applied past the failure point. The value
//! inside an errored `Eval` is the rollback result reported to the caller -
//! the last sub-result that evaluated cleanly, except where an error forces
//! a specific value (zero for a truncated formula or a bad cell reference,
//! infinity for a zero divisor, the inner value for an unmatched paren).

use tallysheet_core::EvalError;

use crate::cell::CellSnapshot;
use crate::formula::token::{self, TokenKind};

/// Read-only source of cell contents, addressed by A1 label.
///
/// Labels that resolve to nothing (never written, or outside the sheet)
/// must read as default empty cells, not panic.
pub trait CellStore {
    fn cell_by_label(&self, label: &str) -> CellSnapshot;
}

/// Value plus latched error for one grammar tier.
#[derive(Debug, Clone, PartialEq)]
struct Eval {
    value: f64,
    error: Option<EvalError>,
}

impl Eval {
    fn ok(value: f64) -> Self {
        Self { value, error: None }
    }

    fn fail(value: f64, error: EvalError) -> Self {
        Self { value, error: Some(error) }
    }

    fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Forward-only cursor over the token slice: one token of lookahead,
/// nothing is ever re-read.
struct Cursor<'t> {
    tokens: &'t [String],
    pos: usize,
    /// Most recent sub-result that evaluated cleanly. Reported as the
    /// result when evaluation subsequently fails.
    last_good: f64,
}

impl<'t> Cursor<'t> {
    fn new(tokens: &'t [String]) -> Self {
        Self { tokens, pos: 0, last_good: 0.0 }
    }

    fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn advance(&mut self) -> Option<&'t str> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

/// Evaluates pre-tokenized formulas against a cell store.
///
/// One [`evaluate`](Self::evaluate) call is fully self-contained: parsing
/// state lives on the stack for that call, and the outcome is read back
/// through [`result`](Self::result) and [`error`](Self::error). The store
/// is only ever read, so evaluating different formulas concurrently is
/// safe whenever concurrent reads of the store are.
pub struct Evaluator<'a, S: CellStore> {
    store: &'a S,
    result: f64,
    error: String,
}

impl<'a, S: CellStore> Evaluator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            result: 0.0,
            error: String::new(),
        }
    }

    /// Evaluate `formula`, replacing the outcome of any previous call.
    pub fn evaluate(&mut self, formula: &[String]) {
        self.result = 0.0;
        self.error.clear();

        if formula.is_empty() {
            self.error = EvalError::EmptyFormula.to_string();
            return;
        }

        let mut cursor = Cursor::new(formula);
        let mut eval = self.expression(&mut cursor);

        // A clean parse must consume every token; anything left over is
        // trailing garbage, reported with the parsed value as rollback.
        if !eval.is_err() && cursor.remaining() > 0 {
            eval = Eval::fail(eval.value, EvalError::InvalidFormula);
        }

        self.result = eval.value;
        if let Some(error) = eval.error {
            self.error = error.to_string();
        }
    }

    /// Numeric result of the last `evaluate` call.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Error string of the last `evaluate` call; empty on success.
    pub fn error(&self) -> &str {
        &self.error
    }

    // expression := term (('+' | '-') term)*, left-associative
    fn expression(&self, cursor: &mut Cursor) -> Eval {
        let mut left = self.term(cursor);
        if left.is_err() {
            return left;
        }

        while let Some(op) = cursor.peek() {
            let kind = token::classify(op);
            if !matches!(kind, TokenKind::Plus | TokenKind::Minus) {
                break;
            }
            cursor.advance();
            let right = self.term(cursor);
            if right.is_err() {
                return right;
            }
            left.value = match kind {
                TokenKind::Plus => left.value + right.value,
                _ => left.value - right.value,
            };
            cursor.last_good = left.value;
        }

        left
    }

    // term := factor (('*' | '/') factor | '+/-')*, left-associative
    fn term(&self, cursor: &mut Cursor) -> Eval {
        let mut left = self.factor(cursor);
        if left.is_err() {
            return left;
        }

        while let Some(op) = cursor.peek() {
            match token::classify(op) {
                TokenKind::SignToggle => {
                    cursor.advance();
                    // Negate in place; leaving zero alone keeps the result
                    // from turning into -0.
                    if left.value != 0.0 {
                        left.value = -left.value;
                    }
                    cursor.last_good = left.value;
                }
                TokenKind::Star => {
                    cursor.advance();
                    let right = self.factor(cursor);
                    if right.is_err() {
                        return right;
                    }
                    left.value *= right.value;
                    cursor.last_good = left.value;
                }
                TokenKind::Slash => {
                    cursor.advance();
                    let right = self.factor(cursor);
                    if right.is_err() {
                        return right;
                    }
                    if right.value == 0.0 {
                        // Fatal for the whole term. Unlike every other
                        // error, this one overrides the rollback value with
                        // the infinity sentinel rather than preserving the
                        // pre-division result.
                        cursor.last_good = f64::INFINITY;
                        return Eval::fail(f64::INFINITY, EvalError::DivideByZero);
                    }
                    left.value /= right.value;
                    cursor.last_good = left.value;
                }
                _ => break,
            }
        }

        left
    }

    // factor := number | '(' expression ')' | cell-reference
    fn factor(&self, cursor: &mut Cursor) -> Eval {
        let Some(tok) = cursor.advance() else {
            // Ran out of tokens mid-grammar: the formula is truncated.
            return Eval::fail(0.0, EvalError::Partial);
        };

        if tok.is_empty() {
            return Eval::fail(cursor.last_good, EvalError::InvalidFormula);
        }

        match token::classify(tok) {
            TokenKind::Number(value) => {
                cursor.last_good = value;
                Eval::ok(value)
            }
            TokenKind::LParen => {
                let inner = self.expression(cursor);
                if inner.is_err() {
                    return inner;
                }
                if matches!(cursor.peek().map(token::classify), Some(TokenKind::RParen)) {
                    cursor.advance();
                    Eval::ok(inner.value)
                } else {
                    // The parenthesized value still stands as the rollback.
                    Eval::fail(inner.value, EvalError::MissingParentheses)
                }
            }
            TokenKind::CellRef => match self.cell_value(tok) {
                Ok(value) => {
                    cursor.last_good = value;
                    Eval::ok(value)
                }
                Err(error) => Eval::fail(0.0, error),
            },
            TokenKind::RParen
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::SignToggle
            | TokenKind::Invalid => Eval::fail(cursor.last_good, EvalError::InvalidFormula),
        }
    }

    /// Resolve a cell reference to its stored value.
    ///
    /// A cell holding a real error propagates that error text verbatim. A
    /// cell whose stored error is only the empty-formula marker is not
    /// treated as erroneous; if its formula is empty too, the reference
    /// points at a cell that was never written, which is its own error.
    fn cell_value(&self, label: &str) -> Result<f64, EvalError> {
        let cell = self.store.cell_by_label(label);
        if !cell.error.is_empty() && !EvalError::is_empty_formula_text(&cell.error) {
            return Err(EvalError::Propagated(cell.error));
        }
        if !cell.has_formula {
            return Err(EvalError::InvalidCell);
        }
        Ok(cell.value)
    }
}
