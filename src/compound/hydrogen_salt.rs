//! Hydrogen salts: salts whose acid radical keeps some of its hydrogens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::balance::{complete_charge, cross_rule};
use crate::compound::{multiplier_count, multiplier_word, split_group, tokens, CompoundKind};
use crate::element::{checked_amount, Element};
use crate::error::NomenError;
use crate::shape::{normalize_formula, normalize_name};
use crate::tables::OxidationContext;
use crate::traits::{Group, HasAmount, HasOxidation, Nomenclature};

const HYDROGEN: &str = "hydrogen";

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-z]{2,6})?hydrogen[^ 0-9]*an [^ 0-9]+$").unwrap());
static FORMULA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]?\d{0,2} ?\(?H\d{0,2} ?[A-Z][a-z]?\d{0,2} ?O\d{0,2}\)?\d{0,2}$").unwrap()
});

/// Acid radical that still carries hydrogen (`HSO₄`, `H₂PO₄`), only found
/// inside a [`HydrogenSalt`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrogenAcidFragment {
    pub hydrogen: Element,
    pub element: Element,
    pub oxygen: Element,
    pub amount: i32,
    /// Charge of one radical: the protons given away.
    pub oxidation: i32,
}

impl HydrogenAcidFragment {
    pub const TYPE_TAG: &'static str = "kyselina hydrogensoli";

    /// Builds the radical from its name (`dihydrogenfosforečnan`).
    ///
    /// Oxygen is counted against a provisional hydrogen total: the parent
    /// acid's count, raised in even steps until it exceeds the hydrogens the
    /// name keeps. The radical's charge is the difference between kept and
    /// provisional hydrogens, and only the kept ones stay in the radical.
    pub fn from_name(token: &str) -> Result<Self, NomenError> {
        let (prefix, element) = token
            .split_once(HYDROGEN)
            .ok_or_else(|| NomenError::incorrect_format(token))?;
        let kept = multiplier_count(prefix, 1)?;
        let element = Element::from_name_token(element, OxidationContext::Salt)?;
        let charge = element.charge()?;

        let mut hydrogens = if charge.rem_euclid(2) == 0 { 2 } else { 1 };
        if hydrogens <= kept {
            let missing = kept - hydrogens + 1;
            hydrogens += missing + missing % 2;
        }
        let mut hydrogen = Element::fixed("H", hydrogens, 1)?;
        let oxygens = complete_charge(hydrogen.charge()? + charge, 2)
            .ok_or_else(|| NomenError::unbalanced("kyslík"))?;
        let oxygen = Element::fixed("O", oxygens, -2)?;
        let oxidation = kept - hydrogens;
        log::trace!("{token}: {hydrogens} provisional hydrogens, {kept} kept, charge {oxidation}");
        hydrogen.amount = checked_amount(kept, "vodíků")?;

        Ok(Self {
            hydrogen,
            element,
            oxygen,
            amount: 1,
            oxidation,
        })
    }

    /// Builds the radical from its tokens (`H As O4`) with the amount and
    /// charge the owning salt worked out.
    pub fn from_formula(formula: &str, amount: i32, oxidation: i32) -> Result<Self, NomenError> {
        let [hydrogen, element, oxygen] = tokens::<3>(formula)?;
        let mut hydrogen = Element::from_formula_token(hydrogen)?;
        let mut oxygen = Element::from_formula_token(oxygen)?;
        if hydrogen.symbol() != "H" || oxygen.symbol() != "O" {
            return Err(NomenError::incorrect_format(formula));
        }
        hydrogen.oxidation = Some(1);
        oxygen.oxidation = Some(-2);
        let mut element = Element::from_formula_token(element)?;
        element.oxidation = Some(-(oxygen.charge()? + hydrogen.charge()? - oxidation));
        Ok(Self {
            hydrogen,
            element,
            oxygen,
            amount,
            oxidation,
        })
    }

    pub fn name(&self) -> String {
        let hydrogens = self.hydrogen.amount();
        let prefix = if hydrogens != 1 {
            multiplier_word(hydrogens)
        } else {
            String::new()
        };
        format!(
            "{prefix}{HYDROGEN}{}",
            self.element.name(OxidationContext::Salt)
        )
    }
}

impl HasAmount for HydrogenAcidFragment {
    fn amount(&self) -> i32 {
        self.amount
    }
}

impl HasOxidation for HydrogenAcidFragment {
    fn oxidation(&self) -> Option<i32> {
        Some(self.oxidation)
    }
}

impl Group for HydrogenAcidFragment {
    fn bare_formula(&self, with_oxidation: bool) -> String {
        format!(
            "{}{}{}",
            self.hydrogen.formula(with_oxidation),
            self.element.formula(with_oxidation),
            self.oxygen.formula(with_oxidation)
        )
    }
}

/// A salt of a cation and a partially deprotonated acid: `Zn(HSeO₄)₂`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrogenSalt {
    pub element: Element,
    pub acid: HydrogenAcidFragment,
}

impl Nomenclature for HydrogenSalt {
    const KIND: CompoundKind = CompoundKind::HydrogenSalt;

    fn matches_name(name: &str) -> bool {
        NAME.is_match(name)
    }

    fn matches_formula(formula: &str) -> bool {
        FORMULA.is_match(formula)
    }

    fn from_name(name: &str) -> Result<Self, NomenError> {
        let name = normalize_name(name);
        let [acid, element] = tokens::<2>(&name)?;
        let mut acid = HydrogenAcidFragment::from_name(acid)?;
        let mut element = Element::from_name_token(element, OxidationContext::Element)?;
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
        let acid = HydrogenAcidFragment::from_formula(acid, acid_amount, acid_oxidation)?;
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
    fn zinc_hydrogen_selenate_from_name() {
        let salt = HydrogenSalt::from_name("hydrogenselenan zinečnatý").unwrap();
        assert_eq!(salt.acid.hydrogen.amount(), 1);
        assert_eq!(salt.acid.oxygen.amount(), 4);
        assert_eq!(salt.acid.oxidation, -1);
        assert_eq!(salt.formula(false), "Zn(HSeO₄)₂");
        assert_eq!(salt.name(), "hydrogenselenan zinečnatý");
    }

    #[test]
    fn provisional_hydrogens_are_padded() {
        // iodine +7 starts from one hydrogen; keeping three pads it to five
        let acid = HydrogenAcidFragment::from_name("trihydrogenjodistan").unwrap();
        assert_eq!(acid.hydrogen.amount(), 3);
        assert_eq!(acid.oxygen.amount(), 6);
        assert_eq!(acid.oxidation, -2);

        let salt = HydrogenSalt::from_name("trihydrogenjodistan sodný").unwrap();
        assert_eq!(salt.formula(false), "Na₂H₃IO₆");
    }

    #[test]
    fn dihydrogen_phosphate() {
        let acid = HydrogenAcidFragment::from_name("dihydrogenfosforečnan").unwrap();
        assert_eq!(acid.hydrogen.amount(), 2);
        assert_eq!(acid.oxygen.amount(), 4);
        assert_eq!(acid.oxidation, -1);
        assert_eq!(acid.name(), "dihydrogenfosforečnan");
    }

    #[test]
    fn aluminium_dihydrogen_silicate_from_formula() {
        let salt = HydrogenSalt::from_formula("Al2(H2SiO4)3").unwrap();
        assert_eq!(salt.element.oxidation(), Some(3));
        assert_eq!(salt.acid.oxidation, -2);
        assert_eq!(salt.acid.element.oxidation(), Some(4));
        assert_eq!(salt.name(), "dihydrogenkřemičitan hlinitý");
        assert_eq!(salt.formula(false), "Al₂(H₂SiO₄)₃");
    }

    #[test]
    fn lead_hydrogen_arsenate_from_formula() {
        // a 1:1 formula balances as +1/-1
        let salt = HydrogenSalt::from_formula("PbHAsO4").unwrap();
        assert_eq!(salt.element.oxidation(), Some(1));
        assert_eq!(salt.acid.element.oxidation(), Some(6));
        assert_eq!(salt.formula(false), "PbHAsO₄");
        assert_eq!(salt.name(), "hydrogenarsenan olovný");
    }

    #[test]
    fn patterns() {
        assert!(HydrogenSalt::matches_name("hydrogenselenan zinečnatý"));
        assert!(HydrogenSalt::matches_name("trihydrogenjodistan sodný"));
        assert!(!HydrogenSalt::matches_name("selenan zinečnatý"));
        assert!(HydrogenSalt::matches_formula("Pb H As O4"));
        assert!(HydrogenSalt::matches_formula("Al2 (H2 Si O4)3"));
        assert!(!HydrogenSalt::matches_formula("Na Cl O"));
    }
}
