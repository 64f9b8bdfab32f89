use crate::compound::CompoundKind;
use crate::error::NomenError;
use crate::render::annotation;
use crate::shape::{classify_shape, Shape};

pub trait HasAmount {
    fn amount(&self) -> i32;
}

pub trait HasOxidation {
    /// `None` while the oxidation number is still unknown.
    fn oxidation(&self) -> Option<i32>;
}

/// A unit that renders in parentheses when it repeats or, in annotated
/// output, when it carries a charge: `(PO₄)₂`, `(HSeO₄)⁻ᶦ`.
pub trait Group: HasAmount + HasOxidation {
    /// Formula of a single unit, without parentheses.
    fn bare_formula(&self, with_oxidation: bool) -> String;

    fn group_formula(&self, with_oxidation: bool) -> String {
        let bare = self.bare_formula(with_oxidation);
        let oxidation = if with_oxidation { self.oxidation() } else { None };
        if self.amount() != 1 || oxidation.is_some_and(|o| o != 0) {
            format!("({bare}){}", annotation(self.amount(), oxidation))
        } else {
            bare
        }
    }
}

/// A compound kind that converts between its formula and its name.
pub trait Nomenclature: Sized {
    const KIND: CompoundKind;

    /// Whether a normalized name has this kind's shape.
    fn matches_name(name: &str) -> bool;

    /// Whether a normalized (space-separated) formula has this kind's shape.
    fn matches_formula(formula: &str) -> bool;

    /// Builds the compound from a Czech name such as `oxid lithný`.
    fn from_name(name: &str) -> Result<Self, NomenError>;

    /// Builds the compound from a formula such as `Li2O`.
    fn from_formula(formula: &str) -> Result<Self, NomenError>;

    /// Renders the formula, optionally with oxidation markers.
    fn formula(&self, with_oxidation: bool) -> String;

    /// Renders the Czech name.
    fn name(&self) -> String;

    /// Builds the compound from either representation.
    ///
    /// When `shape` is `None` it is detected with [`classify_shape`].
    fn construct(text: &str, shape: Option<Shape>) -> Result<Self, NomenError> {
        let shape = match shape {
            Some(shape) => shape,
            None => classify_shape(text)?,
        };
        match shape {
            Shape::Name => Self::from_name(text),
            Shape::Formula => Self::from_formula(text),
        }
    }
}
