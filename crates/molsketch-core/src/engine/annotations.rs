use super::config::{LayoutConfig, Visibility};
use super::placement::{place_lone_pairs, place_single_annotation};
use crate::core::models::structure::MoleculeStructure;
use crate::core::utils::geometry::polar_offset;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::collections::HashMap;

/// Annotation placement for one atom, relative to the atom center.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomAnnotations {
    /// One angle per lone pair. Computed whether or not lone pairs are shown.
    pub lone_pair_angles: Vec<f64>,
    /// Offset of the oxidation-state label, when shown and defined.
    pub ox_offset: Option<Vector2<f64>>,
    /// Offset of the partial-charge label, when shown and defined.
    pub charge_offset: Option<Vector2<f64>>,
}

impl AtomAnnotations {
    /// Positions of the two dots of every lone pair around `center`.
    ///
    /// Each pair sits at `lone_pair_radius` along its angle, with its dots
    /// spread `lone_pair_dot_spacing` apart across the radial direction.
    pub fn lone_pair_dots(&self, center: Point2<f64>, config: &LayoutConfig) -> Vec<[Point2<f64>; 2]> {
        let half_spacing = config.lone_pair_dot_spacing / 2.0;
        self.lone_pair_angles
            .iter()
            .map(|&angle| {
                let pair_center = center + polar_offset(angle, config.lone_pair_radius);
                let across = Vector2::new(-angle.sin(), angle.cos()) * half_spacing;
                [pair_center + across, pair_center - across]
            })
            .collect()
    }
}

/// Places lone pairs, oxidation labels and charge labels for every atom.
///
/// Works atom by atom in a fixed priority order: bonds, then lone pairs, then
/// the oxidation label, then the charge label. Each shown annotation claims
/// its angle before the next one is placed, so later labels steer around
/// earlier ones. Lone-pair angles are always computed, but only claim space
/// when the lone-pair layer is shown.
///
/// The result is aligned with `structure.atoms`.
pub fn annotate_atoms(
    structure: &MoleculeStructure,
    bond_angles: &HashMap<&str, Vec<f64>>,
    visibility: &Visibility,
    config: &LayoutConfig,
) -> Vec<AtomAnnotations> {
    let charges = structure.charges();

    structure
        .atoms
        .iter()
        .map(|atom| {
            let mut occupied = bond_angles
                .get(atom.id.as_str())
                .cloned()
                .unwrap_or_default();

            let lone_pair_angles = place_lone_pairs(&occupied, atom.lone_pair_count());
            if visibility.lone_pairs {
                occupied.extend_from_slice(&lone_pair_angles);
            }

            let ox_offset = match atom.ox {
                Some(_) if visibility.oxidation_states => {
                    let angle = place_single_annotation(&occupied);
                    occupied.push(angle);
                    Some(polar_offset(angle, config.oxidation_radius))
                }
                _ => None,
            };

            let charge_offset = (visibility.charges && charges.contains_key(atom.id.as_str()))
                .then(|| polar_offset(place_single_annotation(&occupied), config.charge_radius));

            AtomAnnotations {
                lone_pair_angles,
                ox_offset,
                charge_offset,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::MoleculeAtom;
    use crate::core::models::bond::{BondOrder, MoleculeBond};
    use crate::core::models::polarity::MoleculePolarity;
    use crate::engine::angles::bond_angles;
    use crate::engine::config::Layer;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    fn angle_of(offset: Vector2<f64>) -> f64 {
        offset.y.atan2(offset.x)
    }

    fn hydrogen_chloride() -> MoleculeStructure {
        MoleculeStructure::new("hcl")
            .with_atom(MoleculeAtom::new("h", "H", 0.0, 0.0).with_ox(1))
            .with_atom(MoleculeAtom::new("cl", "Cl", 1.0, 0.0).with_ox(-1).with_lone_pairs(3))
            .with_bond(MoleculeBond::new("h", "cl", BondOrder::Single))
            .with_polarity(MoleculePolarity::new("h", "cl", "h", "cl"))
    }

    fn annotate(structure: &MoleculeStructure, visibility: Visibility) -> Vec<AtomAnnotations> {
        let angles = bond_angles(structure);
        annotate_atoms(structure, &angles, &visibility, &LayoutConfig::default())
    }

    #[test]
    fn hidden_layers_produce_no_label_offsets() {
        let annotations = annotate(&hydrogen_chloride(), Visibility::default());

        assert_eq!(annotations.len(), 2);
        assert!(annotations.iter().all(|a| a.ox_offset.is_none()));
        assert!(annotations.iter().all(|a| a.charge_offset.is_none()));
    }

    #[test]
    fn lone_pair_angles_are_computed_even_when_hidden() {
        let hidden = annotate(&hydrogen_chloride(), Visibility::default());
        let shown = annotate(&hydrogen_chloride(), Visibility::all());

        assert_eq!(hidden[1].lone_pair_angles.len(), 3);
        assert_eq!(hidden[1].lone_pair_angles, shown[1].lone_pair_angles);
        assert!(hidden[0].lone_pair_angles.is_empty());
    }

    #[test]
    fn oxidation_label_of_isolated_atom_points_up() {
        let structure = MoleculeStructure::new("o2-")
            .with_atom(MoleculeAtom::new("o", "O", 0.0, 0.0).with_ox(-2));
        let visibility = Visibility {
            oxidation_states: true,
            ..Visibility::default()
        };
        let annotations = annotate(&structure, visibility);
        let offset = annotations[0].ox_offset.unwrap();

        assert!((angle_of(offset) + FRAC_PI_2).abs() < TOLERANCE);
        assert!((offset.norm() - LayoutConfig::default().oxidation_radius).abs() < TOLERANCE);
    }

    #[test]
    fn atom_without_ox_gets_no_oxidation_label() {
        let structure = MoleculeStructure::new("c")
            .with_atom(MoleculeAtom::new("c", "C", 0.0, 0.0));
        let annotations = annotate(&structure, Visibility::all());

        assert!(annotations[0].ox_offset.is_none());
        assert!(annotations[0].charge_offset.is_none());
    }

    #[test]
    fn charge_label_avoids_oxidation_label() {
        let structure = hydrogen_chloride();
        let visibility = Visibility {
            oxidation_states: true,
            charges: true,
            ..Visibility::default()
        };
        let annotations = annotate(&structure, visibility);
        let hydrogen = &annotations[0];

        // Bond at 0: oxidation takes the opposite side, charge splits what remains.
        let ox_angle = angle_of(hydrogen.ox_offset.unwrap());
        let charge_angle = angle_of(hydrogen.charge_offset.unwrap());
        assert!((ox_angle.abs() - PI).abs() < TOLERANCE);
        assert!((charge_angle - FRAC_PI_2).abs() < TOLERANCE);
        assert!(
            (hydrogen.charge_offset.unwrap().norm() - LayoutConfig::default().charge_radius).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn shown_lone_pairs_push_oxidation_label_aside() {
        let structure = MoleculeStructure::new("linear")
            .with_atom(MoleculeAtom::new("a", "C", -1.0, 0.0))
            .with_atom(MoleculeAtom::new("x", "Xe", 0.0, 0.0).with_ox(2).with_lone_pairs(1))
            .with_atom(MoleculeAtom::new("b", "C", 1.0, 0.0))
            .with_bond(MoleculeBond::new("x", "a", BondOrder::Single))
            .with_bond(MoleculeBond::new("x", "b", BondOrder::Single));

        let ox_only = Visibility {
            oxidation_states: true,
            ..Visibility::default()
        };
        let with_pairs = ox_only.with_layer(Layer::LonePairs, true);

        let hidden_pairs = annotate(&structure, ox_only);
        let shown_pairs = annotate(&structure, with_pairs);
        let pair_angle = shown_pairs[1].lone_pair_angles[0];

        let ox_hidden = angle_of(hidden_pairs[1].ox_offset.unwrap());
        let ox_shown = angle_of(shown_pairs[1].ox_offset.unwrap());
        assert!((ox_hidden - pair_angle).abs() < TOLERANCE);
        assert!((ox_shown - pair_angle).abs() > 1.0);
    }

    #[test]
    fn each_atom_gets_at_most_one_charge_label() {
        let structure = hydrogen_chloride()
            .with_polarity(MoleculePolarity::new("cl", "h", "cl", "h"));
        let annotations = annotate(&structure, Visibility::all());

        assert!(annotations[0].charge_offset.is_some());
        assert!(annotations[1].charge_offset.is_some());
    }

    #[test]
    fn annotation_is_idempotent() {
        let structure = hydrogen_chloride();
        let first = annotate(&structure, Visibility::all());
        let second = annotate(&structure, Visibility::all());

        assert_eq!(first, second);
    }

    #[test]
    fn lone_pair_dots_straddle_the_pair_direction() {
        let config = LayoutConfig::default();
        let annotations = AtomAnnotations {
            lone_pair_angles: vec![0.0],
            ..Default::default()
        };
        let dots = annotations.lone_pair_dots(Point2::new(10.0, 10.0), &config);

        assert_eq!(dots.len(), 1);
        let [first, second] = dots[0];
        let half = config.lone_pair_dot_spacing / 2.0;
        assert!((first - Point2::new(10.0 + config.lone_pair_radius, 10.0 + half)).norm() < TOLERANCE);
        assert!((second - Point2::new(10.0 + config.lone_pair_radius, 10.0 - half)).norm() < TOLERANCE);
    }
}
