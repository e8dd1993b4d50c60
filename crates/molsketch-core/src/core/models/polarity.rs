use serde::{Deserialize, Serialize};
use std::fmt;

/// A polar bond record naming which atoms carry the partial charges.
///
/// `from` and `to` are informational only; the layout engine reads just
/// `delta_plus` and `delta_minus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculePolarity {
    pub from: String,
    pub to: String,
    pub delta_plus: String,
    pub delta_minus: String,
}

impl MoleculePolarity {
    pub fn new(from: &str, to: &str, delta_plus: &str, delta_minus: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            delta_plus: delta_plus.to_string(),
            delta_minus: delta_minus.to_string(),
        }
    }

    /// Returns the partial charge this record assigns to `atom_id`, if any.
    ///
    /// When a record names the same atom on both sides, δ+ wins.
    pub fn charge_of(&self, atom_id: &str) -> Option<ChargeSign> {
        if self.delta_plus == atom_id {
            Some(ChargeSign::DeltaPlus)
        } else if self.delta_minus == atom_id {
            Some(ChargeSign::DeltaMinus)
        } else {
            None
        }
    }
}

/// The sign of a partial-charge annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeSign {
    DeltaPlus,
    DeltaMinus,
}

impl ChargeSign {
    /// The text drawn next to the atom.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::DeltaPlus => "\u{03B4}+",
            Self::DeltaMinus => "\u{03B4}\u{2212}",
        }
    }
}

impl fmt::Display for ChargeSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
