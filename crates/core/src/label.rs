//! A1-style cell labels.
//!
//! A label is one or more ASCII letters (the column) followed by a 1-based
//! row number: `A1`, `B12`, `AA7`. Parsing is case-insensitive; formatting
//! always produces uppercase letters.

/// Parse a label into zero-based `(row, col)` coordinates.
///
/// Returns `None` for anything that is not letters followed by digits, for
/// row `0`, and for the empty string.
pub fn parse_label(label: &str) -> Option<(usize, usize)> {
    let mut chars = label.chars().peekable();

    let mut col_str = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphabetic() {
            col_str.push(c.to_ascii_uppercase());
            chars.next();
        } else {
            break;
        }
    }
    if col_str.is_empty() {
        return None;
    }

    let row_str: String = chars.collect();
    if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }

    // Convert column letters to an index (A=0, B=1, ..., Z=25, AA=26, ...).
    // Checked arithmetic: a long enough letter run overflows usize.
    let mut col: usize = 0;
    for c in col_str.chars() {
        col = col
            .checked_mul(26)?
            .checked_add(c as usize - 'A' as usize + 1)?;
    }

    Some((row - 1, col - 1))
}

/// The validity predicate for cell-reference tokens.
pub fn is_valid_label(token: &str) -> bool {
    parse_label(token).is_some()
}

/// Convert a column index to letter(s): 0 -> A, 25 -> Z, 26 -> AA, etc.
pub fn col_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col + 1; // 1-indexed for calculation
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// Format zero-based `(row, col)` coordinates as an A1 label.
pub fn format_label(row: usize, col: usize) -> String {
    format!("{}{}", col_to_letters(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_label("A1"), Some((0, 0)));
        assert_eq!(parse_label("B12"), Some((11, 1)));
        assert_eq!(parse_label("Z1"), Some((0, 25)));
    }

    #[test]
    fn test_parse_multi_letter_column() {
        assert_eq!(parse_label("AA1"), Some((0, 26)));
        assert_eq!(parse_label("AB10"), Some((9, 27)));
        assert_eq!(parse_label("ZZ1"), Some((0, 701)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_label("a1"), parse_label("A1"));
        assert_eq!(parse_label("aa7"), parse_label("AA7"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_label(""), None);
        assert_eq!(parse_label("A"), None);
        assert_eq!(parse_label("1"), None);
        assert_eq!(parse_label("1A"), None);
        assert_eq!(parse_label("A0"), None);
        assert_eq!(parse_label("A1B"), None);
        assert_eq!(parse_label("A-1"), None);
        assert_eq!(parse_label("A 1"), None);
    }

    #[test]
    fn test_parse_rejects_overlong_column() {
        // Enough letters to overflow the column index; must reject, not wrap
        assert_eq!(parse_label("ZZZZZZZZZZZZZZZ1"), None);
        assert_eq!(parse_label(&format!("{}1", "Z".repeat(64))), None);
        assert!(!is_valid_label("ZZZZZZZZZZZZZZZ1"));
    }

    #[test]
    fn test_validity_predicate() {
        assert!(is_valid_label("A1"));
        assert!(is_valid_label("AA99"));
        assert!(!is_valid_label("+"));
        assert!(!is_valid_label("12"));
        assert!(!is_valid_label(""));
    }

    #[test]
    fn test_col_to_letters() {
        assert_eq!(col_to_letters(0), "A");
        assert_eq!(col_to_letters(1), "B");
        assert_eq!(col_to_letters(25), "Z");
        assert_eq!(col_to_letters(26), "AA");
        assert_eq!(col_to_letters(27), "AB");
        assert_eq!(col_to_letters(701), "ZZ");
        assert_eq!(col_to_letters(702), "AAA");
    }

    #[test]
    fn test_format_round_trips() {
        for &(row, col) in &[(0, 0), (9, 27), (94, 14), (0, 701)] {
            let label = format_label(row, col);
            assert_eq!(parse_label(&label), Some((row, col)), "label {}", label);
        }
    }
}
