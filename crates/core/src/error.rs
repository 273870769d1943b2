//! Error taxonomy for formula evaluation.

use thiserror::Error;

/// Everything that can go wrong while evaluating a formula.
///
/// Errors render as spreadsheet-style strings (`#DIV/0!`, `#REF!`, ...)
/// because the engine's error surface is a plain string: cells store
/// whatever error text they are given, and a formula referencing such a
/// cell carries that text through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The formula has no tokens at all.
    #[error("#EMPTY!")]
    EmptyFormula,

    /// Unclassifiable token, empty-string token, or tokens left over after
    /// an otherwise complete parse.
    #[error("#ERROR!")]
    InvalidFormula,

    /// Tokens ran out while a factor was still expected.
    #[error("#PARTIAL!")]
    Partial,

    /// `(` without a matching `)`.
    #[error("#PAREN!")]
    MissingParentheses,

    /// Divisor evaluated to exactly zero.
    #[error("#DIV/0!")]
    DivideByZero,

    /// Referenced cell has never been written.
    #[error("#REF!")]
    InvalidCell,

    /// Error text carried over from a referenced cell, unchanged.
    #[error("{0}")]
    Propagated(String),
}

impl EvalError {
    /// True if `text` is the empty-formula marker.
    ///
    /// A referenced cell storing this marker is treated as unset rather
    /// than as holding a real error, so the marker never propagates.
    pub fn is_empty_formula_text(text: &str) -> bool {
        text == Self::EmptyFormula.to_string()
    }
}
