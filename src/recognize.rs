//! Turns arbitrary user input into a [`Compound`].

use crate::compound::{Compound, CompoundKind};
use crate::error::NomenError;
use crate::shape::{classify_shape, normalize_formula, normalize_name, Shape};

/// Recognizes a formula or a Czech name.
///
/// Kinds are tried in [`CompoundKind::ALL`] order, checking the name pattern
/// before the formula pattern, and the first match is constructed. Input
/// that looks like neither a formula nor a name is an error; input of a
/// valid shape that no kind matches gives `Ok(None)`. Errors raised while
/// constructing the matched kind are returned as they are, without trying
/// later kinds.
pub fn recognize(input: &str) -> Result<Option<Compound>, NomenError> {
    let shape = classify_shape(input)?;
    let name = normalize_name(input);
    let formula = normalize_formula(input);
    log::debug!("recognizing {input:?} as {shape:?}");

    for kind in CompoundKind::ALL {
        let (text, shape) = if kind.matches_name(&name) {
            (name.as_str(), Shape::Name)
        } else if kind.matches_formula(&formula) {
            (formula.as_str(), Shape::Formula)
        } else {
            log::trace!("{kind:?} does not match");
            continue;
        };
        log::debug!("{input:?} matches {kind:?} as {shape:?}");
        return kind.construct(text, shape).map(Some);
    }

    log::debug!("{input:?} matches no known compound");
    Ok(None)
}
