//! Oxoacids: hydrogen, a central element and oxygen.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::balance::complete_charge;
use crate::compound::{multiplier_count, multiplier_word, tokens, CompoundKind};
use crate::element::Element;
use crate::error::NomenError;
use crate::shape::{normalize_formula, normalize_name};
use crate::tables::OxidationContext;
use crate::traits::Nomenclature;

const WORD: &str = "kyselina";
const HYDROGEN: &str = "hydrogen";

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^kyselina (?:[a-z]{2,6}hydrogen ?)?[^ 0-9]+$").unwrap());
static FORMULA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^H\d{0,2} ?[A-Z][a-z]?\d{0,2} ?O\d{0,2}$").unwrap());

/// An oxoacid such as `H₂SO₄` (kyselina sírová).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acid {
    pub hydrogen: Element,
    pub element: Element,
    pub oxygen: Element,
}

impl Acid {
    /// Hydrogen count implied by a name without an explicit `hydrogen` infix.
    ///
    /// An odd central charge implies no hydrogen, which cannot form an acid;
    /// such names need an explicit count (`kyselina hydrogendusičná`).
    fn default_hydrogens(element_charge: i32) -> i32 {
        if element_charge.rem_euclid(2) == 0 {
            2
        } else {
            0
        }
    }
}

impl Nomenclature for Acid {
    const KIND: CompoundKind = CompoundKind::Acid;

    fn matches_name(name: &str) -> bool {
        NAME.is_match(name)
    }

    fn matches_formula(formula: &str) -> bool {
        FORMULA.is_match(formula)
    }

    fn from_name(name: &str) -> Result<Self, NomenError> {
        let name = normalize_name(name);
        let rest = name
            .strip_prefix(WORD)
            .filter(|rest| rest.starts_with(' '))
            .ok_or_else(|| NomenError::incorrect_format(name.as_str()))?;
        // "trihydrogen fosforečná" and "trihydrogenfosforečná" are the same word
        let word: String = rest.split_whitespace().collect();

        let (element, hydrogens) = match word.split_once(HYDROGEN) {
            Some((prefix, element)) => {
                let hydrogens = multiplier_count(prefix, 1)?;
                (Element::from_name_token(element, OxidationContext::Acid)?, hydrogens)
            }
            None => {
                let element = Element::from_name_token(&word, OxidationContext::Acid)?;
                let hydrogens = Self::default_hydrogens(element.charge()?);
                (element, hydrogens)
            }
        };
        let hydrogen = Element::fixed("H", hydrogens, 1)?;
        let oxygens = complete_charge(hydrogen.charge()? + element.charge()?, 2)
            .ok_or_else(|| NomenError::unbalanced("kyslík"))?;
        let oxygen = Element::fixed("O", oxygens, -2)?;

        Ok(Self {
            hydrogen,
            element,
            oxygen,
        })
    }

    fn from_formula(formula: &str) -> Result<Self, NomenError> {
        let formula = normalize_formula(formula);
        let [hydrogen, element, oxygen] = tokens::<3>(&formula)?;
        let mut hydrogen = Element::from_formula_token(hydrogen)?;
        let mut oxygen = Element::from_formula_token(oxygen)?;
        if hydrogen.symbol() != "H" || oxygen.symbol() != "O" {
            return Err(NomenError::incorrect_format(formula.as_str()));
        }
        hydrogen.oxidation = Some(1);
        oxygen.oxidation = Some(-2);

        let mut element = Element::from_formula_token(element)?;
        element.oxidation = Some(-(oxygen.charge()? + hydrogen.charge()?));
        log::trace!("{}: oxidation {:?}", element.symbol(), element.oxidation);

        Ok(Self {
            hydrogen,
            element,
            oxygen,
        })
    }

    fn formula(&self, with_oxidation: bool) -> String {
        format!(
            "{}{}{}",
            self.hydrogen.formula(with_oxidation),
            self.element.formula(with_oxidation),
            self.oxygen.formula(with_oxidation)
        )
    }

    fn name(&self) -> String {
        let hydrogens = self.hydrogen.amount();
        let prefix = if hydrogens > 2 {
            format!("{}{HYDROGEN}", multiplier_word(hydrogens))
        } else {
            String::new()
        };
        format!("{WORD} {prefix}{}", self.element.name(OxidationContext::Acid))
    }
}
