use crate::core::models::structure::MoleculeStructure;
use crate::core::utils::geometry::angle_towards;
use std::collections::HashMap;

/// Maps every atom id to the angles (radians) at which its bonds depart.
///
/// Each bond contributes one angle to each endpoint, measured from that
/// endpoint toward its partner, so the two angles of a bond differ by π.
/// Atoms without bonds map to an empty list; bonds with an unresolved
/// endpoint contribute nothing. Angles keep bond input order.
pub fn bond_angles(structure: &MoleculeStructure) -> HashMap<&str, Vec<f64>> {
    let lookup = structure.atom_lookup();
    let mut angles: HashMap<&str, Vec<f64>> = lookup.keys().map(|&id| (id, Vec::new())).collect();

    for bond in &structure.bonds {
        let (Some(from), Some(to)) = (lookup.get(bond.from.as_str()), lookup.get(bond.to.as_str()))
        else {
            continue;
        };
        let (from_pos, to_pos) = (from.position(), to.position());

        if let Some(list) = angles.get_mut(from.id.as_str()) {
            list.push(angle_towards(&from_pos, &to_pos));
        }
        if let Some(list) = angles.get_mut(to.id.as_str()) {
            list.push(angle_towards(&to_pos, &from_pos));
        }
    }

    angles
}
