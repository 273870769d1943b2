//! Token classification.
//!
//! Formulas arrive pre-tokenized as strings; this module decides what each
//! string is. Classification is mutually exclusive and checked in order:
//! number, parenthesis, operator, sign toggle, cell reference. Anything
//! left over (including the empty string) is invalid.

use tallysheet_core::label;

/// What a single formula token is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    /// The `+/-` sign toggle. Negates the running result in place rather
    /// than consuming a following factor.
    SignToggle,
    CellRef,
    Invalid,
}

/// Parse a token as a numeric literal under standard `f64` rules.
pub fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

pub fn classify(token: &str) -> TokenKind {
    if let Some(n) = parse_number(token) {
        return TokenKind::Number(n);
    }
    match token {
        "(" => TokenKind::LParen,
        ")" => TokenKind::RParen,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "+/-" => TokenKind::SignToggle,
        _ if label::is_valid_label(token) => TokenKind::CellRef,
        _ => TokenKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify("0"), TokenKind::Number(0.0));
        assert_eq!(classify("42"), TokenKind::Number(42.0));
        assert_eq!(classify("3.25"), TokenKind::Number(3.25));
        assert_eq!(classify("-7"), TokenKind::Number(-7.0));
        assert_eq!(classify("1e3"), TokenKind::Number(1000.0));
    }

    #[test]
    fn test_classify_operators_and_parens() {
        assert_eq!(classify("("), TokenKind::LParen);
        assert_eq!(classify(")"), TokenKind::RParen);
        assert_eq!(classify("+"), TokenKind::Plus);
        assert_eq!(classify("-"), TokenKind::Minus);
        assert_eq!(classify("*"), TokenKind::Star);
        assert_eq!(classify("/"), TokenKind::Slash);
        assert_eq!(classify("+/-"), TokenKind::SignToggle);
    }

    #[test]
    fn test_classify_cell_refs() {
        assert_eq!(classify("A1"), TokenKind::CellRef);
        assert_eq!(classify("AA10"), TokenKind::CellRef);
        assert_eq!(classify("b2"), TokenKind::CellRef);
    }

    #[test]
    fn test_classify_invalid() {
        assert_eq!(classify(""), TokenKind::Invalid);
        assert_eq!(classify("@"), TokenKind::Invalid);
        assert_eq!(classify("A0"), TokenKind::Invalid);
        assert_eq!(classify("1A"), TokenKind::Invalid);
        assert_eq!(classify("**"), TokenKind::Invalid);
        assert_eq!(classify("SUM"), TokenKind::Invalid);
    }

    #[test]
    fn test_classification_order() {
        // Numeric check runs before the label check, so "1e3" is a number
        // while "E1" (a valid label that never parses as f64) is a ref.
        assert_eq!(classify("1e3"), TokenKind::Number(1000.0));
        assert_eq!(classify("E1"), TokenKind::CellRef);
    }
}
