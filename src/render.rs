//! Subscript amounts and superscript oxidation markers.

const OXIDATION_MARKERS: [&str; 9] = ["^", "ᶦ", "ᶦᶦ", "ᶦᶦᶦ", "ᶦᵛ", "ᵛ", "ᵛᶦ", "ᵛᶦᶦ", "ᵛᶦᶦᶦ"];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const MINUS: char = '⁻';

/// Writes `n` with subscript digits.
pub fn subscript(n: u32) -> String {
    n.to_string()
        .bytes()
        .map(|b| SUBSCRIPT_DIGITS[(b - b'0') as usize])
        .collect()
}

/// Roman-numeral superscript for an oxidation number.
///
/// Zero renders as `^`; negative numbers get a leading superscript minus.
/// Numbers beyond the Roman markers fall back to superscript digits.
pub fn oxidation_marker(oxidation: i32) -> String {
    let mut out = String::new();
    if oxidation < 0 {
        out.push(MINUS);
    }
    let magnitude = oxidation.unsigned_abs();
    match OXIDATION_MARKERS.get(magnitude as usize) {
        Some(marker) => out.push_str(marker),
        None => out.extend(
            magnitude
                .to_string()
                .bytes()
                .map(|b| SUPERSCRIPT_DIGITS[(b - b'0') as usize]),
        ),
    }
    out
}

/// The decoration after a symbol or a parenthesized group.
///
/// The oxidation marker comes first, then the amount; an amount of 1 is
/// never written.
pub fn annotation(amount: i32, oxidation: Option<i32>) -> String {
    let mut out = oxidation.map(oxidation_marker).unwrap_or_default();
    if amount != 1 {
        out.push_str(&subscript(amount.unsigned_abs()));
    }
    out
}
