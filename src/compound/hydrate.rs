//! Salt hydrates: a salt carrying a fixed count of crystal water,
//! `CuSO4.5H2O` or `pentahydrát síranu měďnatého`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::compound::{multiplier_count, multiplier_word, tokens, CompoundKind, Salt};
use crate::error::NomenError;
use crate::render::annotation;
use crate::shape::{normalize_formula, normalize_name};
use crate::tables::OxidationContext;
use crate::traits::Nomenclature;

const HYDRATE: &str = "hydrát";
const WATER: &str = "H2O";

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,6}hydrát [^ 0-9]*anu [^ 0-9]*ého$").unwrap());
static FORMULA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Z][a-z]?\d{0,2} ?\(?[A-Z][a-z]?\d{0,2} ?O\d{0,2}\)?\d{0,2} ?\. ?\d{1,2} ?H2 ?O$",
    )
    .unwrap()
});

/// A salt with crystal water: `CuSO₄ . 5H₂O`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaltHydrate {
    pub salt: Salt,
    /// Water molecules per formula unit.
    pub hydrate: i32,
}

impl Nomenclature for SaltHydrate {
    const KIND: CompoundKind = CompoundKind::SaltHydrate;

    fn matches_name(name: &str) -> bool {
        NAME.is_match(name)
    }

    fn matches_formula(formula: &str) -> bool {
        FORMULA.is_match(formula)
    }

    /// Parses `dihydrát fosforečnanu vápenatého`: the salt name appears in
    /// the genitive and is turned back into `fosforečnan vápenatý`.
    fn from_name(name: &str) -> Result<Self, NomenError> {
        let name = normalize_name(name);
        let [hydrate, acid, element] = tokens::<3>(&name)?;
        let bad = || NomenError::incorrect_format(name.as_str());
        let prefix = hydrate.strip_suffix(HYDRATE).ok_or_else(bad)?;
        let acid = acid.strip_suffix('u').ok_or_else(bad)?;
        let element = element.strip_suffix("ého").ok_or_else(bad)?;

        let hydrate = multiplier_count(prefix, 1)?;
        let salt = Salt::from_name(&format!("{acid} {element}ý"))?;
        Ok(Self { salt, hydrate })
    }

    fn from_formula(formula: &str) -> Result<Self, NomenError> {
        let formula = normalize_formula(formula);
        let (salt, water) = formula
            .split_once('.')
            .ok_or_else(|| NomenError::incorrect_format(formula.as_str()))?;
        let water: String = water.split_whitespace().collect();
        let count = water
            .strip_suffix(WATER)
            .ok_or_else(|| NomenError::incorrect_format(formula.as_str()))?;
        let hydrate = match count {
            "" => 1,
            digits => digits
                .parse::<i32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| NomenError::incorrect_format(formula.as_str()))?,
        };
        let salt = Salt::from_formula(salt.trim())?;
        Ok(Self { salt, hydrate })
    }

    fn formula(&self, with_oxidation: bool) -> String {
        let (hydrogen, oxygen) = if with_oxidation {
            (Some(1), Some(-2))
        } else {
            (None, None)
        };
        format!(
            "{} . {}H{}O{}",
            self.salt.formula(with_oxidation),
            self.hydrate,
            annotation(2, hydrogen),
            annotation(1, oxygen)
        )
    }

    fn name(&self) -> String {
        let acid = self.salt.acid.name();
        let element = self.salt.element.name(OxidationContext::Element);
        let mut stem = element.chars();
        stem.next_back();
        format!(
            "{}{HYDRATE} {acid}u {}ého",
            multiplier_word(self.hydrate),
            stem.as_str()
        )
    }
}
