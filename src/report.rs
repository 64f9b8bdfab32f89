use std::fmt;

use serde::Serialize;

use crate::compound::{Compound, CompoundKind};

/// Everything shown to the user about one recognized compound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The input as the user typed it.
    pub entry: String,
    pub kind: CompoundKind,
    pub name: String,
    pub formula: String,
    pub oxidation_formula: String,
    pub compound: Compound,
}

impl Report {
    pub fn new(entry: impl Into<String>, compound: Compound) -> Self {
        Self {
            entry: entry.into(),
            kind: compound.kind(),
            name: compound.name(),
            formula: compound.formula(false),
            oxidation_formula: compound.formula(true),
            compound,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- {}", self.entry)?;
        writeln!(f, "typ sloučeniny: {}", self.kind.type_tag())?;
        writeln!(f, "název: {}", self.name)?;
        writeln!(f, "vzoreček: {}", self.formula)?;
        write!(f, "vzoreček s oxi.: {}", self.oxidation_formula)
    }
}
