//! Two-element compounds of a fixed partner: oxides and sulfides.

use std::fmt::Debug;
use std::marker::PhantomData;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::balance::{complete_charge, cross_rule, reduce_by_gcd};
use crate::compound::{tokens, CompoundKind};
use crate::element::{checked_amount, Element};
use crate::error::NomenError;
use crate::shape::{normalize_formula, normalize_name};
use crate::tables::OxidationContext;
use crate::traits::Nomenclature;

static OXIDE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^oxid [^ 0-9]+$").unwrap());
static OXIDE_FORMULA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]?\d{0,2} ?O\d{0,2}$").unwrap());
static SULFIDE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^sulfid [^ 0-9]+$").unwrap());
static SULFIDE_FORMULA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]?\d{0,2} ?S\d{0,2}$").unwrap());

/// The fixed partner of a [`Binary`] compound.
pub trait Partner: Debug + Clone + PartialEq {
    const KIND: CompoundKind;
    const SIGN: &'static str;
    /// Leading word of the name ("oxid").
    const WORD: &'static str;
    const OXIDATION: i32;

    fn name_pattern() -> &'static Regex;
    fn formula_pattern() -> &'static Regex;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oxygen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sulfur;

impl Partner for Oxygen {
    const KIND: CompoundKind = CompoundKind::Oxide;
    const SIGN: &'static str = "O";
    const WORD: &'static str = "oxid";
    const OXIDATION: i32 = -2;

    fn name_pattern() -> &'static Regex {
        &OXIDE_NAME
    }

    fn formula_pattern() -> &'static Regex {
        &OXIDE_FORMULA
    }
}

impl Partner for Sulfur {
    const KIND: CompoundKind = CompoundKind::Sulfide;
    const SIGN: &'static str = "S";
    const WORD: &'static str = "sulfid";
    const OXIDATION: i32 = -2;

    fn name_pattern() -> &'static Regex {
        &SULFIDE_NAME
    }

    fn formula_pattern() -> &'static Regex {
        &SULFIDE_FORMULA
    }
}

/// An element bonded to a fixed partner `P`: `Li₂O`, `Al₂S₃`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Binary<P: Partner> {
    /// The fixed partner (oxygen or sulfur).
    pub main: Element,
    /// The element named in the compound.
    pub alt: Element,
    #[serde(skip)]
    partner: PhantomData<P>,
}

pub type Oxide = Binary<Oxygen>;
pub type Sulfide = Binary<Sulfur>;

impl<P: Partner> Nomenclature for Binary<P> {
    const KIND: CompoundKind = P::KIND;

    fn matches_name(name: &str) -> bool {
        P::name_pattern().is_match(name)
    }

    fn matches_formula(formula: &str) -> bool {
        P::formula_pattern().is_match(formula)
    }

    fn from_name(name: &str) -> Result<Self, NomenError> {
        let name = normalize_name(name);
        let [word, alt] = tokens::<2>(&name)?;
        if word != P::WORD {
            return Err(NomenError::incorrect_format(name.as_str()));
        }
        let mut main = Element::fixed(P::SIGN, 1, P::OXIDATION)?;
        let mut alt = Element::from_name_token(alt, OxidationContext::Element)?;
        let alt_oxidation = alt.charge()?;
        let (main_amount, alt_amount) = cross_rule(P::OXIDATION, alt_oxidation)
            .ok_or_else(|| NomenError::unbalanced("nulová oxidační čísla"))?;
        main.amount = checked_amount(main_amount, main.symbol())?;
        alt.amount = checked_amount(alt_amount, alt.symbol())?;
        Ok(Self {
            main,
            alt,
            partner: PhantomData,
        })
    }

    fn from_formula(formula: &str) -> Result<Self, NomenError> {
        let formula = normalize_formula(formula);
        let [alt, main] = tokens::<2>(&formula)?;
        let mut main = Element::from_formula_token(main)?;
        if main.symbol() != P::SIGN {
            return Err(NomenError::incorrect_format(formula.as_str()));
        }
        main.oxidation = Some(P::OXIDATION);
        let mut alt = Element::from_formula_token(alt)?;
        alt.oxidation = complete_charge(-main.charge()?, alt.amount);
        log::trace!("{}: oxidation {:?}", alt.symbol(), alt.oxidation);

        let (main_amount, alt_amount) = reduce_by_gcd(main.amount, alt.amount)
            .ok_or_else(|| NomenError::unbalanced("nulové počty atomů"))?;
        main.amount = main_amount;
        alt.amount = alt_amount;
        Ok(Self {
            main,
            alt,
            partner: PhantomData,
        })
    }

    fn formula(&self, with_oxidation: bool) -> String {
        format!(
            "{}{}",
            self.alt.formula(with_oxidation),
            self.main.formula(with_oxidation)
        )
    }

    fn name(&self) -> String {
        format!("{} {}", P::WORD, self.alt.name(OxidationContext::Element))
    }
}
