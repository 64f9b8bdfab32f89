//! The compound kinds and the closed [`Compound`] union over them.

mod acid;
mod binary;
mod hydrate;
mod hydrogen_salt;
mod salt;

pub use acid::Acid;
pub use binary::{Binary, Oxide, Oxygen, Partner, Sulfide, Sulfur};
pub use hydrate::SaltHydrate;
pub use hydrogen_salt::{HydrogenAcidFragment, HydrogenSalt};
pub use salt::{Salt, SaltAcidFragment};

use std::fmt;

use serde::Serialize;

use crate::error::NomenError;
use crate::shape::{normalize_digits, Shape};
use crate::tables;
use crate::traits::Nomenclature;

/// The recognizable compound kinds.
///
/// [`CompoundKind::ALL`] is the order in which the recognizer tries them;
/// earlier kinds win when several patterns match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundKind {
    Oxide,
    Sulfide,
    Acid,
    Salt,
    HydrogenSalt,
    SaltHydrate,
}

impl CompoundKind {
    pub const ALL: [CompoundKind; 6] = [
        CompoundKind::Oxide,
        CompoundKind::Sulfide,
        CompoundKind::Acid,
        CompoundKind::Salt,
        CompoundKind::HydrogenSalt,
        CompoundKind::SaltHydrate,
    ];

    /// Czech label shown to the user.
    pub fn type_tag(self) -> &'static str {
        match self {
            CompoundKind::Oxide => "oxid",
            CompoundKind::Sulfide => "sulfid",
            CompoundKind::Acid => "kyselina",
            CompoundKind::Salt => "sůl",
            CompoundKind::HydrogenSalt => "hydrogensůl",
            CompoundKind::SaltHydrate => "hydrát soli",
        }
    }

    pub fn matches_name(self, name: &str) -> bool {
        match self {
            CompoundKind::Oxide => Oxide::matches_name(name),
            CompoundKind::Sulfide => Sulfide::matches_name(name),
            CompoundKind::Acid => Acid::matches_name(name),
            CompoundKind::Salt => Salt::matches_name(name),
            CompoundKind::HydrogenSalt => HydrogenSalt::matches_name(name),
            CompoundKind::SaltHydrate => SaltHydrate::matches_name(name),
        }
    }

    pub fn matches_formula(self, formula: &str) -> bool {
        match self {
            CompoundKind::Oxide => Oxide::matches_formula(formula),
            CompoundKind::Sulfide => Sulfide::matches_formula(formula),
            CompoundKind::Acid => Acid::matches_formula(formula),
            CompoundKind::Salt => Salt::matches_formula(formula),
            CompoundKind::HydrogenSalt => HydrogenSalt::matches_formula(formula),
            CompoundKind::SaltHydrate => SaltHydrate::matches_formula(formula),
        }
    }

    /// Builds a compound of this kind from text of a known shape.
    pub fn construct(self, text: &str, shape: Shape) -> Result<Compound, NomenError> {
        let shape = Some(shape);
        Ok(match self {
            CompoundKind::Oxide => Compound::Oxide(Oxide::construct(text, shape)?),
            CompoundKind::Sulfide => Compound::Sulfide(Sulfide::construct(text, shape)?),
            CompoundKind::Acid => Compound::Acid(Acid::construct(text, shape)?),
            CompoundKind::Salt => Compound::Salt(Salt::construct(text, shape)?),
            CompoundKind::HydrogenSalt => {
                Compound::HydrogenSalt(HydrogenSalt::construct(text, shape)?)
            }
            CompoundKind::SaltHydrate => {
                Compound::SaltHydrate(SaltHydrate::construct(text, shape)?)
            }
        })
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// A recognized compound of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compound {
    Oxide(Oxide),
    Sulfide(Sulfide),
    Acid(Acid),
    Salt(Salt),
    HydrogenSalt(HydrogenSalt),
    SaltHydrate(SaltHydrate),
}

impl Compound {
    pub fn kind(&self) -> CompoundKind {
        match self {
            Compound::Oxide(_) => Oxide::KIND,
            Compound::Sulfide(_) => Sulfide::KIND,
            Compound::Acid(_) => Acid::KIND,
            Compound::Salt(_) => Salt::KIND,
            Compound::HydrogenSalt(_) => HydrogenSalt::KIND,
            Compound::SaltHydrate(_) => SaltHydrate::KIND,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind().type_tag()
    }

    /// Renders the formula with subscript amounts and, optionally,
    /// superscript oxidation numbers.
    pub fn formula(&self, with_oxidation: bool) -> String {
        match self {
            Compound::Oxide(c) => c.formula(with_oxidation),
            Compound::Sulfide(c) => c.formula(with_oxidation),
            Compound::Acid(c) => c.formula(with_oxidation),
            Compound::Salt(c) => c.formula(with_oxidation),
            Compound::HydrogenSalt(c) => c.formula(with_oxidation),
            Compound::SaltHydrate(c) => c.formula(with_oxidation),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Compound::Oxide(c) => c.name(),
            Compound::Sulfide(c) => c.name(),
            Compound::Acid(c) => c.name(),
            Compound::Salt(c) => c.name(),
            Compound::HydrogenSalt(c) => c.name(),
            Compound::SaltHydrate(c) => c.name(),
        }
    }

    /// The plain formula with ASCII digits: `Ca3(PO4)2`.
    pub fn ascii_formula(&self) -> String {
        normalize_digits(&self.formula(false))
    }
}

/// Splits `text` on whitespace into exactly `N` tokens.
pub(crate) fn tokens<const N: usize>(text: &str) -> Result<[&str; N], NomenError> {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| NomenError::incorrect_format(text))
}

/// Splits a parenthesized group from its trailing count: `(P O4)2` gives
/// `("P O4", 2)`. Text without parentheses counts once.
pub(crate) fn split_group(text: &str) -> Result<(&str, i32), NomenError> {
    let Some(inner) = text.strip_prefix('(') else {
        if text.contains(')') {
            return Err(NomenError::incorrect_format(text));
        }
        return Ok((text, 1));
    };
    let (inner, count) = inner
        .split_once(')')
        .ok_or_else(|| NomenError::incorrect_format(text))?;
    let count = match count.trim() {
        "" => 1,
        digits => digits
            .parse()
            .map_err(|_| NomenError::incorrect_format(text))?,
    };
    Ok((inner, count))
}

/// Resolves a numeral prefix (`di`, `tri`) to its count; an empty prefix
/// means `default`.
pub(crate) fn multiplier_count(prefix: &str, default: i32) -> Result<i32, NomenError> {
    if prefix.is_empty() {
        return Ok(default);
    }
    tables::get()
        .multiplier_index(prefix)
        .and_then(|index| i32::try_from(index).ok())
        .filter(|count| *count >= 1)
        .ok_or_else(|| NomenError::UnknownMultiplier {
            word: prefix.to_string(),
        })
}

/// The numeral prefix for `count`, or its digits past the end of the table.
pub(crate) fn multiplier_word(count: i32) -> String {
    usize::try_from(count)
        .ok()
        .and_then(|index| tables::get().multiplier(index))
        .map_or_else(|| count.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_order() {
        let tags: Vec<_> = CompoundKind::ALL.iter().map(|k| k.type_tag()).collect();
        assert_eq!(
            tags,
            ["oxid", "sulfid", "kyselina", "sůl", "hydrogensůl", "hydrát soli"]
        );
    }

    #[test]
    fn fragment_tags() {
        assert_eq!(SaltAcidFragment::TYPE_TAG, "kyselina soli");
        assert_eq!(HydrogenAcidFragment::TYPE_TAG, "kyselina hydrogensoli");
    }

    #[test]
    fn token_count_must_match() {
        assert_eq!(tokens::<2>("oxid lithný"), Ok(["oxid", "lithný"]));
        assert!(tokens::<2>("oxid").is_err());
        assert!(tokens::<2>("a b c").is_err());
    }

    #[test]
    fn groups() {
        assert_eq!(split_group("(P O4)2"), Ok(("P O4", 2)));
        assert_eq!(split_group("(P O4)"), Ok(("P O4", 1)));
        assert_eq!(split_group("Cl O"), Ok(("Cl O", 1)));
        assert!(split_group("(P O4").is_err());
        assert_eq!(
            split_group("Cl O)2"),
            Err(NomenError::incorrect_format("Cl O)2"))
        );
    }

    #[test]
    fn multipliers() {
        assert_eq!(multiplier_count("", 1), Ok(1));
        assert_eq!(multiplier_count("tri", 1), Ok(3));
        assert_eq!(
            multiplier_count("bla", 1),
            Err(NomenError::UnknownMultiplier {
                word: "bla".to_string()
            })
        );
        assert_eq!(multiplier_word(2), "di");
        assert_eq!(multiplier_word(99), "99");
    }

    #[test]
    fn construct_by_kind() {
        let compound = CompoundKind::Oxide.construct("Li2O", Shape::Formula).unwrap();
        assert_eq!(compound.kind(), CompoundKind::Oxide);
        assert_eq!(compound.name(), "oxid lithný");
        assert_eq!(compound.ascii_formula(), "Li2O");
    }

    #[test]
    fn each_type_knows_its_kind() {
        assert_eq!(Oxide::KIND, CompoundKind::Oxide);
        assert_eq!(Sulfide::KIND, CompoundKind::Sulfide);
        assert_eq!(Acid::KIND, CompoundKind::Acid);
        assert_eq!(Salt::KIND, CompoundKind::Salt);
        assert_eq!(HydrogenSalt::KIND, CompoundKind::HydrogenSalt);
        assert_eq!(SaltHydrate::KIND, CompoundKind::SaltHydrate);
        for kind in CompoundKind::ALL {
            let sample = match kind {
                CompoundKind::Oxide => "Li2O",
                CompoundKind::Sulfide => "Na2S",
                CompoundKind::Acid => "H2SO4",
                CompoundKind::Salt => "NaClO",
                CompoundKind::HydrogenSalt => "PbHAsO4",
                CompoundKind::SaltHydrate => "CuSO4.5H2O",
            };
            let compound = kind.construct(sample, Shape::Formula).unwrap();
            assert_eq!(compound.kind(), kind, "{sample}");
        }
    }

    #[test]
    fn serializes_with_kind_tag() {
        let compound = CompoundKind::Oxide.construct("Li2O", Shape::Formula).unwrap();
        let json = serde_json::to_value(&compound).unwrap();
        assert_eq!(json["kind"], "oxide");
        assert_eq!(json["alt"]["symbol"], "Li");
        assert_eq!(json["main"]["oxidation"], -2);
    }
}
