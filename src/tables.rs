//! Lookup tables consumed by the naming engine.
//!
//! Three tables drive every conversion: the element registry (symbol to
//! Czech name and naming stem), the oxidation-suffix vocabulary keyed by the
//! role an atom plays, and the multiplier words ("di", "tri", ...). They are
//! bundled as JSON and parsed once into a process-wide [`Tables`]; nothing
//! writes to them afterwards.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::NomenError;

const BUNDLED_ELEMENTS: &str = include_str!("../tables/table.json");
const BUNDLED_OXIDATION: &str = include_str!("../tables/oxidation.json");
const BUNDLED_MULTIPLIERS: &str = include_str!("../tables/amount.json");

/// Suffix ending that marks oxidation +5 in spellings such as "fosforečný".
const IRREGULAR_FIVE: &str = "ečn";

/// Grammatical role an atom plays, which selects the suffix vocabulary.
///
/// The same suffix spelling can mean different oxidation numbers in
/// different roles, so lookups are always made against one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OxidationContext {
    /// Adjectival form used for cations and oxide/sulfide partners ("sodný").
    Element,
    /// Feminine adjective used in acid names ("sírová").
    Acid,
    /// Noun form used for acid radicals in salts ("síran").
    Salt,
}

/// One row of the element registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ElementEntry {
    pub sign: String,
    pub name: String,
    /// Stem an oxidation suffix is appended to; `None` for elements that are
    /// never named with a suffix (hydrogen, oxygen, noble gases).
    pub naming: Option<String>,
    /// Stem with an elided vowel, used before suffixes starting with a vowel.
    #[serde(default)]
    pub elided: Option<String>,
    /// Extra spellings accepted while parsing but never rendered.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Renders oxidation +5 with `-eč-` instead of `-ič-`.
    #[serde(default)]
    pub irregular_five: bool,
}

impl ElementEntry {
    /// All stems that may start a declined name of this element.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.naming
            .iter()
            .chain(self.elided.iter())
            .chain(self.variants.iter())
            .map(String::as_str)
    }

    /// The stem to render in front of `suffix`.
    pub fn stem_for(&self, suffix: &str) -> Option<&str> {
        let naming = self.naming.as_deref()?;
        match (&self.elided, suffix.chars().next()) {
            (Some(elided), Some(c)) if is_vowel(c) => Some(elided),
            _ => Some(naming),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'á' | 'é' | 'ě' | 'í' | 'ó' | 'ú' | 'ů' | 'ý'
    )
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct OxidationFile {
    element: Vec<String>,
    acid: Vec<String>,
    salt: Vec<String>,
}

/// The three lookup tables, immutable once built.
#[derive(Debug, Clone)]
pub struct Tables {
    elements: HashMap<String, ElementEntry>,
    oxidation: OxidationFile,
    multipliers: Vec<String>,
}

impl Tables {
    /// Parses the three tables from their JSON text.
    pub fn from_json(elements: &str, oxidation: &str, multipliers: &str) -> Result<Self, NomenError> {
        let elements: HashMap<String, ElementEntry> = serde_json::from_str(elements)?;
        let oxidation: OxidationFile = serde_json::from_str(oxidation)?;
        let multipliers: Vec<String> = serde_json::from_str(multipliers)?;

        if let Some((key, entry)) = elements.iter().find(|(key, entry)| **key != entry.sign) {
            return Err(NomenError::Table {
                detail: format!("klíč \"{key}\" neodpovídá značce \"{}\"", entry.sign),
            });
        }
        for (context, suffixes) in [
            ("element", &oxidation.element),
            ("acid", &oxidation.acid),
            ("salt", &oxidation.salt),
        ] {
            if suffixes.is_empty() {
                return Err(NomenError::Table {
                    detail: format!("prázdný seznam koncovek \"{context}\""),
                });
            }
        }
        if multipliers.is_empty() {
            return Err(NomenError::Table {
                detail: "prázdný seznam číslovek".to_string(),
            });
        }

        Ok(Self {
            elements,
            oxidation,
            multipliers,
        })
    }

    /// The tables compiled into the crate.
    pub fn bundled() -> Result<Self, NomenError> {
        Self::from_json(BUNDLED_ELEMENTS, BUNDLED_OXIDATION, BUNDLED_MULTIPLIERS)
    }

    /// Loads `table.json`, `oxidation.json` and `amount.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, NomenError> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|e| NomenError::Table {
                detail: format!("{}: {e}", path.display()),
            })
        };
        Self::from_json(&read("table.json")?, &read("oxidation.json")?, &read("amount.json")?)
    }

    /// Looks up an element by its exact symbol.
    pub fn element(&self, sign: &str) -> Option<&ElementEntry> {
        self.elements.get(sign)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Entries having a stem that prefixes `token`, longest stem first.
    ///
    /// Each candidate carries the stem that matched, so callers never need
    /// to remember it on the shared entry.
    pub fn stem_candidates<'a>(&'a self, token: &str) -> Vec<(&'a ElementEntry, &'a str)> {
        let mut found: Vec<(&ElementEntry, &str)> = self
            .elements
            .values()
            .flat_map(|entry| entry.stems().map(move |stem| (entry, stem)))
            .filter(|(_, stem)| !stem.is_empty() && token.starts_with(stem))
            .collect();
        found.sort_by(|a, b| {
            b.1.len()
                .cmp(&a.1.len())
                .then_with(|| a.0.sign.cmp(&b.0.sign))
        });
        found
    }

    fn suffixes(&self, context: OxidationContext) -> &[String] {
        match context {
            OxidationContext::Element => &self.oxidation.element,
            OxidationContext::Acid => &self.oxidation.acid,
            OxidationContext::Salt => &self.oxidation.salt,
        }
    }

    /// Oxidation number spelled by `suffix` in `context`.
    pub fn oxidation_of(&self, context: OxidationContext, suffix: &str) -> Option<i32> {
        if let Some(index) = self.suffixes(context).iter().position(|s| s == suffix) {
            return i32::try_from(index).ok();
        }
        if suffix.contains(IRREGULAR_FIVE) {
            return Some(5);
        }
        None
    }

    /// Suffix spelling `oxidation` in `context`.
    pub fn suffix(&self, context: OxidationContext, oxidation: i32) -> Option<&str> {
        let index = usize::try_from(oxidation).ok()?;
        self.suffixes(context).get(index).map(String::as_str)
    }

    /// Multiplier word for `count` ("di" for 2).
    pub fn multiplier(&self, count: usize) -> Option<&str> {
        self.multipliers.get(count).map(String::as_str)
    }

    /// Count spelled by a multiplier word.
    pub fn multiplier_index(&self, word: &str) -> Option<usize> {
        self.multipliers.iter().position(|w| w == word)
    }

    pub fn multiplier_count(&self) -> usize {
        self.multipliers.len()
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Installs custom tables for the whole process.
///
/// Must run before the first recognition; once tables are in place they are
/// never replaced, and the rejected tables are handed back.
pub fn install(tables: Tables) -> Result<(), Tables> {
    TABLES.set(tables)
}

/// The process-wide tables, falling back to the bundled ones.
pub fn get() -> &'static Tables {
    TABLES.get_or_init(|| {
        Tables::bundled().unwrap_or_else(|e| panic!("Failed to parse bundled tables: {e}"))
    })
}
