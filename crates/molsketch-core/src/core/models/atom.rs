use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Represents a single atom of a 2-D structural diagram.
///
/// Positions are expressed in abstract grid units supplied by the data
/// pipeline; the layout engine scales them into visual units and never moves
/// them. Everything besides the identity, symbol and position is optional
/// annotation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeAtom {
    /// Identifier, unique within the owning structure.
    pub id: String,
    /// The element symbol (e.g., "O", "Na").
    pub symbol: String,
    /// Horizontal position in grid units.
    pub x: f64,
    /// Vertical position in grid units (screen convention, growing downward).
    pub y: f64,
    /// The oxidation state, when the data pipeline provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox: Option<i32>,
    /// The number of non-bonding electron pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lone_pairs: Option<u32>,
    /// Overrides the displayed text; the symbol is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MoleculeAtom {
    /// Creates a new `MoleculeAtom` without any annotation data.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the atom.
    /// * `symbol` - The element symbol.
    /// * `x` - Horizontal grid coordinate.
    /// * `y` - Vertical grid coordinate.
    pub fn new(id: &str, symbol: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            x,
            y,
            ox: None,
            lone_pairs: None,
            label: None,
        }
    }

    pub fn with_ox(mut self, ox: i32) -> Self {
        self.ox = Some(ox);
        self
    }

    pub fn with_lone_pairs(mut self, count: u32) -> Self {
        self.lone_pairs = Some(count);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Returns the position of the atom in grid units.
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Returns the number of lone pairs, treating an absent count as zero.
    pub fn lone_pair_count(&self) -> u32 {
        self.lone_pairs.unwrap_or(0)
    }

    /// Returns the text drawn at the atom's position.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.symbol)
    }
}

/// Formats an oxidation state the way it is printed above an atom.
///
/// Positive values carry an explicit `+`, negative values use the typographic
/// minus sign (U+2212) and zero is printed bare.
pub fn oxidation_label(ox: i32) -> String {
    match ox {
        0 => "0".to_string(),
        n if n > 0 => format!("+{}", n),
        n => format!("\u{2212}{}", n.unsigned_abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_no_annotations() {
        let atom = MoleculeAtom::new("o1", "O", 1.0, 2.0);

        assert_eq!(atom.id, "o1");
        assert_eq!(atom.symbol, "O");
        assert_eq!(atom.position(), Point2::new(1.0, 2.0));
        assert_eq!(atom.ox, None);
        assert_eq!(atom.lone_pairs, None);
        assert_eq!(atom.label, None);
        assert_eq!(atom.lone_pair_count(), 0);
    }

    #[test]
    fn display_label_prefers_override() {
        let atom = MoleculeAtom::new("n1", "N", 0.0, 0.0);
        assert_eq!(atom.display_label(), "N");

        let labelled = atom.with_label("NH\u{2084}\u{207A}");
        assert_eq!(labelled.display_label(), "NH\u{2084}\u{207A}");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"id":"o","symbol":"O","x":0.5,"y":-1,"ox":-2,"lonePairs":2}"#;
        let atom: MoleculeAtom = serde_json::from_str(json).unwrap();

        assert_eq!(atom.ox, Some(-2));
        assert_eq!(atom.lone_pairs, Some(2));
        assert_eq!(atom.y, -1.0);
    }

    #[test]
    fn negative_lone_pair_count_is_rejected() {
        let json = r#"{"id":"o","symbol":"O","x":0,"y":0,"lonePairs":-1}"#;
        assert!(serde_json::from_str::<MoleculeAtom>(json).is_err());
    }

    #[test]
    fn serialization_omits_absent_annotations() {
        let atom = MoleculeAtom::new("h", "H", 0.0, 0.0);
        let json = serde_json::to_string(&atom).unwrap();

        assert!(!json.contains("lonePairs"));
        assert!(!json.contains("ox"));
        assert!(!json.contains("label"));
    }

    #[test]
    fn oxidation_label_formats_sign() {
        assert_eq!(oxidation_label(2), "+2");
        assert_eq!(oxidation_label(-2), "\u{2212}2");
        assert_eq!(oxidation_label(0), "0");
        assert_eq!(oxidation_label(i32::MIN), format!("\u{2212}{}", 2147483648u32));
    }
}
