//! A single element inside a compound: symbol, amount and oxidation number.

use serde::{Serialize, Serializer};

use crate::error::NomenError;
use crate::render::annotation;
use crate::tables::{self, ElementEntry, OxidationContext};
use crate::traits::{HasAmount, HasOxidation};

/// Counts in a formula have at most two digits.
const MAX_AMOUNT_DIGITS: usize = 2;

/// An element with its count and (possibly unknown) oxidation number.
///
/// Built from a formula token (`Ca3`) the amount is known and the oxidation
/// is not; built from a declined name (`vápenatý`) it is the other way
/// round. Compounds fill in the missing half by charge balancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(rename = "symbol", serialize_with = "serialize_sign")]
    entry: &'static ElementEntry,
    pub(crate) amount: i32,
    pub(crate) oxidation: Option<i32>,
}

fn serialize_sign<S: Serializer>(entry: &&'static ElementEntry, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&entry.sign)
}

impl Element {
    /// Parses a formula token: a one- or two-letter symbol and an optional count.
    ///
    /// # Examples
    ///
    /// ```
    /// use nazvoslovi::Element;
    ///
    /// let ca = Element::from_formula_token("Ca3").unwrap();
    /// assert_eq!(ca.symbol(), "Ca");
    /// assert_eq!(ca.amount(), 3);
    /// assert_eq!(ca.oxidation(), None);
    /// ```
    pub fn from_formula_token(token: &str) -> Result<Self, NomenError> {
        let token = token.trim();
        let split = match token.char_indices().nth(1) {
            Some((i, c)) if c.is_ascii_digit() => i,
            Some((i, c)) => i + c.len_utf8(),
            None => token.len(),
        };
        let (sign, digits) = token.split_at(split);
        let amount = match digits.len() {
            0 => 1,
            1..=MAX_AMOUNT_DIGITS => digits
                .parse::<i32>()
                .map_err(|_| NomenError::incorrect_format(token))?,
            _ => return Err(NomenError::incorrect_format(token)),
        };
        let entry = tables::get()
            .element(sign)
            .ok_or_else(|| NomenError::UnknownElement {
                text: sign.to_string(),
            })?;
        Ok(Self {
            entry,
            amount: checked_amount(amount, &entry.sign)?,
            oxidation: None,
        })
    }

    /// Parses a declined name such as `sodný` or `sírová`.
    ///
    /// The stem picks the element and the rest of the word is an oxidation
    /// suffix looked up in the vocabulary of `context`.
    pub fn from_name_token(token: &str, context: OxidationContext) -> Result<Self, NomenError> {
        let lower = token.trim().to_lowercase();
        let candidates = tables::get().stem_candidates(&lower);
        let mut rejected = None;
        for (entry, stem) in candidates {
            let suffix = &lower[stem.len()..];
            match tables::get().oxidation_of(context, suffix) {
                Some(oxidation) => {
                    log::trace!("{lower}: stem {stem} ({}), oxidation {oxidation}", entry.sign);
                    return Ok(Self {
                        entry,
                        amount: 1,
                        oxidation: Some(oxidation),
                    });
                }
                None => {
                    rejected.get_or_insert_with(|| suffix.to_string());
                }
            }
        }
        Err(match rejected {
            Some(suffix) => NomenError::WrongOxidation { suffix },
            None => NomenError::UnknownElement { text: lower },
        })
    }

    /// An element with a known amount and oxidation, e.g. the oxygen of an oxide.
    pub fn fixed(sign: &str, amount: i32, oxidation: i32) -> Result<Self, NomenError> {
        let entry = tables::get()
            .element(sign)
            .ok_or_else(|| NomenError::UnknownElement {
                text: sign.to_string(),
            })?;
        Ok(Self {
            entry,
            amount: checked_amount(amount, sign)?,
            oxidation: Some(oxidation),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.entry.sign
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn oxidation(&self) -> Option<i32> {
        self.oxidation
    }

    /// `oxidation × amount`, failing while the oxidation is unknown.
    pub fn charge(&self) -> Result<i32, NomenError> {
        let oxidation = self.oxidation.ok_or_else(|| {
            NomenError::unbalanced(format!("oxidační číslo prvku {} není známo", self.entry.sign))
        })?;
        oxidation.checked_mul(self.amount).ok_or_else(|| {
            NomenError::unbalanced(format!("náboj prvku {} je příliš velký", self.entry.sign))
        })
    }

    /// Renders `Ca₃`, or `Caᶦᶦ₃` with oxidation markers.
    pub fn formula(&self, with_oxidation: bool) -> String {
        let oxidation = if with_oxidation { self.oxidation } else { None };
        format!("{}{}", self.entry.sign, annotation(self.amount, oxidation))
    }

    /// Declined name in `context`, or the plain element name when the
    /// oxidation is not positive or the element has no naming stem.
    pub fn name(&self, context: OxidationContext) -> String {
        let declined = self.oxidation.filter(|&o| o > 0).and_then(|o| {
            let suffix = tables::get().suffix(context, o)?;
            let suffix = match suffix.strip_prefix('i') {
                Some(rest) if o == 5 && self.entry.irregular_five => format!("e{rest}"),
                _ => suffix.to_string(),
            };
            let stem = self.entry.stem_for(&suffix)?;
            Some(format!("{stem}{suffix}"))
        });
        declined.unwrap_or_else(|| self.entry.name.clone())
    }
}

impl HasAmount for Element {
    fn amount(&self) -> i32 {
        self.amount
    }
}

impl HasOxidation for Element {
    fn oxidation(&self) -> Option<i32> {
        self.oxidation
    }
}

/// Rejects amounts below one.
pub(crate) fn checked_amount(amount: i32, what: &str) -> Result<i32, NomenError> {
    if amount >= 1 {
        Ok(amount)
    } else {
        Err(NomenError::unbalanced(format!("počet {what} vychází {amount}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_token_with_amount() {
        let e = Element::from_formula_token("Li2").unwrap();
        assert_eq!(e.symbol(), "Li");
        assert_eq!(e.amount(), 2);
        assert_eq!(e.oxidation(), None);
    }

    #[test]
    fn formula_token_single_letter() {
        let e = Element::from_formula_token("O").unwrap();
        assert_eq!(e.symbol(), "O");
        assert_eq!(e.amount(), 1);

        let e = Element::from_formula_token("O4").unwrap();
        assert_eq!(e.symbol(), "O");
        assert_eq!(e.amount(), 4);
    }

    #[test]
    fn formula_token_two_digit_amount() {
        let e = Element::from_formula_token("C12").unwrap();
        assert_eq!(e.symbol(), "C");
        assert_eq!(e.amount(), 12);
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            Element::from_formula_token("Xx2"),
            Err(NomenError::UnknownElement {
                text: "Xx".to_string()
            })
        );
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert!(matches!(
            Element::from_formula_token("O0"),
            Err(NomenError::Unbalanced { .. })
        ));
    }

    #[test]
    fn name_token_resolves_oxidation() {
        let e = Element::from_name_token("lithný", OxidationContext::Element).unwrap();
        assert_eq!(e.symbol(), "Li");
        assert_eq!(e.oxidation(), Some(1));

        let e = Element::from_name_token("manganistan", OxidationContext::Salt).unwrap();
        assert_eq!(e.symbol(), "Mn");
        assert_eq!(e.oxidation(), Some(7));
    }

    #[test]
    fn name_token_is_case_insensitive() {
        let e = Element::from_name_token("Sodný", OxidationContext::Element).unwrap();
        assert_eq!(e.symbol(), "Na");
    }

    #[test]
    fn elided_stem_parses() {
        let e = Element::from_name_token("uhličitý", OxidationContext::Element).unwrap();
        assert_eq!(e.symbol(), "C");
        assert_eq!(e.oxidation(), Some(4));

        let e = Element::from_name_token("uhelnatý", OxidationContext::Element).unwrap();
        assert_eq!(e.oxidation(), Some(2));
    }

    #[test]
    fn irregular_five_parses() {
        let e = Element::from_name_token("fosforečnan", OxidationContext::Salt).unwrap();
        assert_eq!(e.symbol(), "P");
        assert_eq!(e.oxidation(), Some(5));
    }

    #[test]
    fn wrong_suffix() {
        assert_eq!(
            Element::from_name_token("sodový", OxidationContext::Salt),
            Err(NomenError::WrongOxidation {
                suffix: "ový".to_string()
            })
        );
    }

    #[test]
    fn unknown_stem() {
        assert!(matches!(
            Element::from_name_token("qwertý", OxidationContext::Element),
            Err(NomenError::UnknownElement { .. })
        ));
    }

    #[test]
    fn parsing_does_not_touch_shared_table() {
        let before = tables::get().element("S").unwrap().clone();
        Element::from_name_token("sirová", OxidationContext::Acid).unwrap();
        Element::from_name_token("síran", OxidationContext::Salt).unwrap();
        assert_eq!(tables::get().element("S").unwrap(), &before);
    }

    #[test]
    fn charge_needs_oxidation() {
        let e = Element::from_formula_token("Al2").unwrap();
        assert!(e.charge().is_err());
        let e = Element::fixed("O", 3, -2).unwrap();
        assert_eq!(e.charge(), Ok(-6));
    }

    #[test]
    fn oversized_amount_is_rejected() {
        assert_eq!(
            Element::from_formula_token("O2000000000"),
            Err(NomenError::incorrect_format("O2000000000"))
        );
        assert!(Element::from_formula_token("O123").is_err());
    }

    #[test]
    fn charge_overflow_is_unbalanced() {
        let e = Element::fixed("Fe", i32::MAX, 3).unwrap();
        assert!(matches!(e.charge(), Err(NomenError::Unbalanced { .. })));
    }

    #[test]
    fn formula_rendering() {
        let e = Element::fixed("Ca", 3, 2).unwrap();
        assert_eq!(e.formula(false), "Ca₃");
        assert_eq!(e.formula(true), "Caᶦᶦ₃");
        let e = Element::fixed("Na", 1, 1).unwrap();
        assert_eq!(e.formula(false), "Na");
        assert_eq!(e.formula(true), "Naᶦ");
    }

    #[test]
    fn name_rendering() {
        let e = Element::fixed("P", 1, 5).unwrap();
        assert_eq!(e.name(OxidationContext::Element), "fosforečný");
        assert_eq!(e.name(OxidationContext::Acid), "fosforečná");
        assert_eq!(e.name(OxidationContext::Salt), "fosforečnan");

        let e = Element::fixed("As", 1, 5).unwrap();
        assert_eq!(e.name(OxidationContext::Element), "arseničný");

        let e = Element::fixed("C", 1, 4).unwrap();
        assert_eq!(e.name(OxidationContext::Element), "uhličitý");

        let e = Element::fixed("S", 1, 6).unwrap();
        assert_eq!(e.name(OxidationContext::Acid), "sírová");
    }

    #[test]
    fn name_falls_back_to_element_name() {
        let e = Element::fixed("H", 2, 1).unwrap();
        assert_eq!(e.name(OxidationContext::Element), "vodík");
        let e = Element::fixed("O", 1, -2).unwrap();
        assert_eq!(e.name(OxidationContext::Element), "kyslík");
    }

    #[test]
    fn serializes_symbol() {
        let e = Element::fixed("Ca", 3, 2).unwrap();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json, serde_json::json!({"symbol": "Ca", "amount": 3, "oxidation": 2}));
    }
}
