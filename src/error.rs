use std::fmt;

/// Errors produced while recognizing or constructing a compound.
///
/// Every variant is terminal: the input is malformed or refers to data the
/// lookup tables do not know, so retrying the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NomenError {
    /// The input is neither a formula nor a digit-free name.
    IncorrectFormat { input: String },
    /// A formula symbol or a name stem is missing from the element table.
    UnknownElement { text: String },
    /// A name stem matched but its oxidation suffix is not in the vocabulary.
    WrongOxidation { suffix: String },
    /// A multiplier prefix ("di", "tri", ...) is not in the multiplier vocabulary.
    UnknownMultiplier { word: String },
    /// Charge balancing produced an impossible amount or needed an unknown oxidation.
    Unbalanced { detail: String },
    /// A lookup table could not be loaded.
    Table { detail: String },
}

impl NomenError {
    pub(crate) fn incorrect_format(input: impl Into<String>) -> Self {
        Self::IncorrectFormat {
            input: input.into(),
        }
    }

    pub(crate) fn unbalanced(detail: impl Into<String>) -> Self {
        Self::Unbalanced {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for NomenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectFormat { input } => {
                write!(f, "Sloučenina \"{input}\" je v nesprávném formátu.")
            }
            Self::UnknownElement { text } => write!(f, "Nebyl rozpoznán prvek \"{text}\"."),
            Self::WrongOxidation { suffix } => {
                write!(f, "Nebyla rozpoznána koncovka oxidace \"{suffix}\".")
            }
            Self::UnknownMultiplier { word } => {
                write!(f, "Nebyla rozpoznána číslovková předpona \"{word}\".")
            }
            Self::Unbalanced { detail } => write!(f, "Sloučeninu nelze vyčíslit: {detail}."),
            Self::Table { detail } => write!(f, "Tabulku nelze načíst: {detail}."),
        }
    }
}

impl std::error::Error for NomenError {}

impl From<serde_json::Error> for NomenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Table {
            detail: e.to_string(),
        }
    }
}
