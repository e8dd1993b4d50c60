use super::atom::MoleculeAtom;
use super::bond::MoleculeBond;
use super::polarity::{ChargeSign, MoleculePolarity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete 2-D structural diagram: atoms, bonds and polarity records.
///
/// The structure is the unit of input to the layout engine. It is treated as
/// immutable; every derived quantity (angles, annotations, bond strokes) is
/// recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoleculeStructure {
    /// Opaque identifier. May be omitted in keyed collections, where the key
    /// is used instead.
    #[serde(default)]
    pub id: String,
    pub atoms: Vec<MoleculeAtom>,
    #[serde(default)]
    pub bonds: Vec<MoleculeBond>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polarity: Vec<MoleculePolarity>,
}

impl MoleculeStructure {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_atom(mut self, atom: MoleculeAtom) -> Self {
        self.atoms.push(atom);
        self
    }

    pub fn with_bond(mut self, bond: MoleculeBond) -> Self {
        self.bonds.push(bond);
        self
    }

    pub fn with_polarity(mut self, polarity: MoleculePolarity) -> Self {
        self.polarity.push(polarity);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Finds an atom by id. With duplicate ids, the first occurrence wins.
    pub fn atom(&self, id: &str) -> Option<&MoleculeAtom> {
        self.atoms.iter().find(|atom| atom.id == id)
    }

    /// Builds an id → atom lookup table. With duplicate ids, the first
    /// occurrence wins, matching [`MoleculeStructure::atom`].
    pub fn atom_lookup(&self) -> HashMap<&str, &MoleculeAtom> {
        let mut lookup = HashMap::with_capacity(self.atoms.len());
        for atom in &self.atoms {
            lookup.entry(atom.id.as_str()).or_insert(atom);
        }
        lookup
    }

    /// Returns the partial charge shown for `atom_id`.
    ///
    /// An atom may be referenced by several polarity records, possibly with
    /// opposite signs. Records are scanned in order and the first reference
    /// decides, so each atom carries at most one charge label.
    pub fn charge_of(&self, atom_id: &str) -> Option<ChargeSign> {
        self.polarity
            .iter()
            .find_map(|polarity| polarity.charge_of(atom_id))
    }

    /// Returns `true` if `atom_id` is referenced as δ+ or δ− by any record.
    pub fn has_charge(&self, atom_id: &str) -> bool {
        self.charge_of(atom_id).is_some()
    }

    /// Collapses all polarity records into one charge per atom id.
    pub fn charges(&self) -> HashMap<&str, ChargeSign> {
        let mut charges = HashMap::new();
        for polarity in &self.polarity {
            charges
                .entry(polarity.delta_plus.as_str())
                .or_insert(ChargeSign::DeltaPlus);
            charges
                .entry(polarity.delta_minus.as_str())
                .or_insert(ChargeSign::DeltaMinus);
        }
        charges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;

    fn water() -> MoleculeStructure {
        MoleculeStructure::new("h2o")
            .with_atom(MoleculeAtom::new("o", "O", 0.0, 0.0).with_lone_pairs(2))
            .with_atom(MoleculeAtom::new("h1", "H", -1.0, 1.0))
            .with_atom(MoleculeAtom::new("h2", "H", 1.0, 1.0))
            .with_bond(MoleculeBond::new("o", "h1", BondOrder::Single))
            .with_bond(MoleculeBond::new("o", "h2", BondOrder::Single))
            .with_polarity(MoleculePolarity::new("o", "h1", "h1", "o"))
            .with_polarity(MoleculePolarity::new("o", "h2", "h2", "o"))
    }

    #[test]
    fn atom_lookup_finds_all_atoms() {
        let structure = water();
        let lookup = structure.atom_lookup();

        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup["o"].symbol, "O");
        assert!(structure.atom("missing").is_none());
    }

    #[test]
    fn atom_lookup_keeps_first_duplicate() {
        let structure = MoleculeStructure::new("dup")
            .with_atom(MoleculeAtom::new("a", "C", 0.0, 0.0))
            .with_atom(MoleculeAtom::new("a", "N", 5.0, 5.0));

        assert_eq!(structure.atom_lookup()["a"].symbol, "C");
        assert_eq!(structure.atom("a").map(|a| a.symbol.as_str()), Some("C"));
    }

    #[test]
    fn charges_collapse_duplicate_references() {
        let structure = water();
        let charges = structure.charges();

        assert_eq!(charges.len(), 3);
        assert_eq!(charges["o"], ChargeSign::DeltaMinus);
        assert_eq!(charges["h1"], ChargeSign::DeltaPlus);
        assert_eq!(structure.charge_of("h2"), Some(ChargeSign::DeltaPlus));
    }

    #[test]
    fn first_polarity_reference_decides_conflicting_signs() {
        let structure = MoleculeStructure::new("conflict")
            .with_atom(MoleculeAtom::new("c", "C", 0.0, 0.0))
            .with_polarity(MoleculePolarity::new("c", "o", "c", "o"))
            .with_polarity(MoleculePolarity::new("c", "li", "li", "c"));

        assert_eq!(structure.charge_of("c"), Some(ChargeSign::DeltaPlus));
        assert_eq!(structure.charges()["c"], ChargeSign::DeltaPlus);
    }

    #[test]
    fn has_charge_is_false_without_polarity() {
        let structure = MoleculeStructure::new("h2")
            .with_atom(MoleculeAtom::new("a", "H", 0.0, 0.0))
            .with_atom(MoleculeAtom::new("b", "H", 1.0, 0.0));

        assert!(!structure.has_charge("a"));
        assert!(structure.charges().is_empty());
    }

    #[test]
    fn deserializes_without_optional_sections() {
        let json = r#"{"id":"ne","atoms":[{"id":"ne","symbol":"Ne","x":0,"y":0,"lonePairs":4}]}"#;
        let structure: MoleculeStructure = serde_json::from_str(json).unwrap();

        assert!(structure.bonds.is_empty());
        assert!(structure.polarity.is_empty());
        assert!(!structure.is_empty());
    }
}
