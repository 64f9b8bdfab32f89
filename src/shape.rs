//! Formula/name shape detection and input normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::NomenError;

static FORMULA_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\(?[A-Z][a-z]?\d{0,2} ?\)?\d{0,2} ?|\. ?\d{0,2} ?)+$").unwrap()
});
static NAME_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^0-9]+$").unwrap());

/// Surface form of a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Element symbols with counts, e.g. `Ca3(PO4)2`.
    Formula,
    /// Declined words without digits, e.g. `fosforečnan vápenatý`.
    Name,
}

/// Decides whether `s` is written as a formula or as a name.
///
/// The formula grammar wins when both could apply, so a digit-free formula
/// such as `NaClO` is still a formula.
pub fn classify_shape(s: &str) -> Result<Shape, NomenError> {
    let digits = normalize_digits(s.trim());
    if FORMULA_SHAPE.is_match(&digits) {
        Ok(Shape::Formula)
    } else if NAME_SHAPE.is_match(&digits) {
        Ok(Shape::Name)
    } else {
        Err(NomenError::incorrect_format(s))
    }
}

/// Maps subscript and superscript digits to ASCII digits.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '₀'..='₉' => char::from(b'0' + (c as u32 - '₀' as u32) as u8),
            '⁰' => '0',
            '¹' => '1',
            '²' => '2',
            '³' => '3',
            '⁴'..='⁹' => char::from(b'4' + (c as u32 - '⁴' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Splits a concatenated formula into space-separated element tokens.
///
/// A space goes in front of every uppercase letter, `(` and `.`, and in
/// front of whatever follows a `.`, unless the previous character already is
/// a space or an opening parenthesis: `Ca3(PO4)2` becomes `Ca3 (P O4)2`.
pub fn normalize_formula(s: &str) -> String {
    let digits = normalize_digits(s.trim());
    let mut out = String::with_capacity(digits.len() * 2);
    let mut last: Option<char> = None;
    for c in digits.chars() {
        let boundary = c != ' ' && (c.is_uppercase() || c == '(' || c == '.' || last == Some('.'));
        if let Some(prev) = last {
            if boundary && prev != '(' && prev != ' ' {
                out.push(' ');
            }
        }
        out.push(c);
        last = Some(c);
    }
    out
}

/// Lowercases a name and collapses runs of whitespace to single spaces.
pub fn normalize_name(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
