//! Salts of oxoacids and their hydrogen-free acid radicals.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::balance::{complete_charge, cross_rule};
use crate::compound::{split_group, tokens, CompoundKind};
use crate::element::{checked_amount, Element};
use crate::error::NomenError;
use crate::shape::{normalize_formula, normalize_name};
use crate::tables::OxidationContext;
use crate::traits::{Group, HasAmount, HasOxidation, Nomenclature};

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ 0-9]*an [^ 0-9]+$").unwrap());
static FORMULA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]?\d{0,2} ?\(?[A-Z][a-z]?\d{0,2} ?O\d{0,2}\)?\d{0,2}$").unwrap()
});

/// Acid radical without hydrogen (`SO₄`, `PO₄`), only found inside a [`Salt`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaltAcidFragment {
    pub element: Element,
    pub oxygen: Element,
    /// How many radicals the salt holds.
    pub amount: i32,
    /// Charge of one radical.
    pub oxidation: i32,
}

impl SaltAcidFragment {
    pub const TYPE_TAG: &'static str = "kyselina soli";

    /// Builds the radical from its name (`síran`).
    ///
    /// The radical charge is -2 when the central element's charge is even
    /// and -1 otherwise; oxygen fills in the rest.
    pub fn from_name(token: &str) -> Result<Self, NomenError> {
        let element = Element::from_name_token(token, OxidationContext::Salt)?;
        let charge = element.charge()?;
        let oxidation = if charge.rem_euclid(2) == 0 { -2 } else { -1 };
        let oxygens = complete_charge(charge - oxidation, 2)
            .ok_or_else(|| NomenError::unbalanced("kyslík"))?;
        Ok(Self {
            element,
            oxygen: Element::fixed("O", oxygens, -2)?,
            amount: 1,
            oxidation,
        })
    }

    /// Builds the radical from its tokens (`S O4`) with the amount and
    /// charge the owning salt worked out.
    pub fn from_formula(formula: &str, amount: i32, oxidation: i32) -> Result<Self, NomenError> {
        let [element, oxygen] = tokens::<2>(formula)?;
        let mut oxygen = Element::from_formula_token(oxygen)?;
        if oxygen.symbol() != "O" {
            return Err(NomenError::incorrect_format(formula));
        }
        oxygen.oxidation = Some(-2);
        let mut element = Element::from_formula_token(element)?;
        element.oxidation = Some(-(oxygen.charge()? - oxidation));
        log::trace!("{}: oxidation {:?}", element.symbol(), element.oxidation);
        Ok(Self {
            element,
            oxygen,
            amount,
            oxidation,
        })
    }

    pub fn name(&self) -> String {
        self.element.name(OxidationContext::Salt)
    }
}

impl HasAmount for SaltAcidFragment {
    fn amount(&self) -> i32 {
        self.amount
    }
}

impl HasOxidation for SaltAcidFragment {
    fn oxidation(&self) -> Option<i32> {
        Some(self.oxidation)
    }
}

impl Group for SaltAcidFragment {
    fn bare_formula(&self, with_oxidation: bool) -> String {
        format!(
            "{}{}",
            self.element.formula(with_oxidation),
            self.oxygen.formula(with_oxidation)
        )
    }
}

/// A salt of a cation and a hydrogen-free acid radical: `Ca₃(PO₄)₂`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Salt {
    pub element: Element,
    pub acid: SaltAcidFragment,
}

impl Nomenclature for Salt {
    const KIND: CompoundKind = CompoundKind::Salt;

    fn matches_name(name: &str) -> bool {
        NAME.is_match(name)
            && name
                .split(' ')
                .next()
                .is_some_and(|radical| !radical.contains("hydrogen"))
    }

    fn matches_formula(formula: &str) -> bool {
        FORMULA.is_match(formula)
    }

    fn from_name(name: &str) -> Result<Self, NomenError> {
        let name = normalize_name(name);
        let [acid, element] = tokens::<2>(&name)?;
        let mut element = Element::from_name_token(element, OxidationContext::Element)?;
        let mut acid = SaltAcidFragment::from_name(acid)?;
        let (element_amount, acid_amount) = cross_rule(element.charge()?, acid.oxidation)
            .ok_or_else(|| NomenError::unbalanced("nulová oxidační čísla"))?;
        element.amount = checked_amount(element_amount, element.symbol())?;
        acid.amount = checked_amount(acid_amount, "kyselin")?;
        Ok(Self { element, acid })
    }

    fn from_formula(formula: &str) -> Result<Self, NomenError> {
        let formula = normalize_formula(formula);
        let (element, acid) = formula
            .split_once(' ')
            .ok_or_else(|| NomenError::incorrect_format(formula.as_str()))?;
        let (acid, acid_amount) = split_group(acid)?;
        let mut element = Element::from_formula_token(element)?;
        let (element_oxidation, acid_oxidation) = cross_rule(element.amount, acid_amount)
            .ok_or_else(|| NomenError::unbalanced("nulové počty"))?;
        element.oxidation = Some(element_oxidation);
        let acid = SaltAcidFragment::from_formula(acid, acid_amount, acid_oxidation)?;
        Ok(Self { element, acid })
    }

    fn formula(&self, with_oxidation: bool) -> String {
        format!(
            "{}{}",
            self.element.formula(with_oxidation),
            self.acid.group_formula(with_oxidation)
        )
    }

    fn name(&self) -> String {
        format!(
            "{} {}",
            self.acid.name(),
            self.element.name(OxidationContext::Element)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calcium_phosphate_from_formula() {
        let salt = Salt::from_formula("Ca3(PO4)2").unwrap();
        assert_eq!(salt.element.oxidation(), Some(2));
        assert_eq!(salt.acid.oxidation, -3);
        assert_eq!(salt.acid.amount, 2);
        assert_eq!(salt.acid.element.oxidation(), Some(5));
        assert_eq!(salt.name(), "fosforečnan vápenatý");
        assert_eq!(salt.formula(false), "Ca₃(PO₄)₂");
        assert_eq!(salt.formula(true), "Caᶦᶦ₃(PᵛO⁻ᶦᶦ₄)⁻ᶦᶦᶦ₂");
    }

    #[test]
    fn sodium_hypochlorite_from_formula() {
        let salt = Salt::from_formula("NaClO").unwrap();
        assert_eq!(salt.name(), "chlornan sodný");
        assert_eq!(salt.formula(false), "NaClO");
        assert_eq!(salt.formula(true), "Naᶦ(ClᶦO⁻ᶦᶦ)⁻ᶦ");
    }

    #[test]
    fn unit_radical_with_charge_is_parenthesized_when_annotated() {
        let salt = Salt::from_name("manganistan draselný").unwrap();
        assert_eq!(salt.formula(false), "KMnO₄");
        assert_eq!(salt.formula(true), "Kᶦ(MnᵛᶦᶦO⁻ᶦᶦ₄)⁻ᶦ");
    }

    #[test]
    fn magnesium_hypoiodite_from_name() {
        let salt = Salt::from_name("jodnan hořečnatý").unwrap();
        assert_eq!(salt.element.amount(), 1);
        assert_eq!(salt.acid.amount, 2);
        assert_eq!(salt.formula(false), "Mg(IO)₂");
    }

    #[test]
    fn radical_charge_heuristic() {
        let even = SaltAcidFragment::from_name("síran").unwrap();
        assert_eq!(even.oxidation, -2);
        assert_eq!(even.oxygen.amount(), 4);

        let odd = SaltAcidFragment::from_name("dusičnan").unwrap();
        assert_eq!(odd.oxidation, -1);
        assert_eq!(odd.oxygen.amount(), 3);
    }

    #[test]
    fn name_to_formula_to_name() {
        // an odd central charge always yields a -1 radical
        let salt = Salt::from_name("fosforečnan vápenatý").unwrap();
        assert_eq!(salt.formula(false), "Ca(PO₃)₂");
        let again = Salt::from_formula(&salt.formula(false)).unwrap();
        assert_eq!(again.name(), "fosforečnan vápenatý");
        assert_eq!(again, salt);
    }

    #[test]
    fn patterns() {
        assert!(Salt::matches_name("síran sodný"));
        assert!(!Salt::matches_name("hydrogensíran sodný"));
        assert!(!Salt::matches_name("oxid sodný"));
        assert!(Salt::matches_formula("Ca3 (P O4)2"));
        assert!(Salt::matches_formula("Na Cl O"));
        assert!(!Salt::matches_formula("Pb H As O4"));
    }

    #[test]
    fn unopened_parenthesis() {
        assert!(matches!(
            Salt::from_formula("NaClO)2"),
            Err(NomenError::IncorrectFormat { .. })
        ));
    }

    #[test]
    fn unknown_cation() {
        assert!(matches!(
            Salt::from_formula("Xx(SO4)2"),
            Err(NomenError::UnknownElement { .. })
        ));
    }
}
