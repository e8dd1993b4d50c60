use super::config::LayoutConfig;
use crate::core::models::bond::BondOrder;
use crate::core::models::structure::MoleculeStructure;
use crate::core::utils::geometry::{LineSegment, offset_line, shorten_line};
use nalgebra::Point2;
use serde::Serialize;
use tracing::trace;

/// How a bond's strokes are drawn. Style never changes geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeStyle {
    Solid,
    Dative,
}

/// The drawable strokes of one bond, in visual units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBond {
    pub from: String,
    pub to: String,
    pub order: BondOrder,
    pub style: StrokeStyle,
    /// One segment per drawn line. For triple bonds the center line comes first.
    pub lines: Vec<LineSegment>,
}

/// Scales a grid-unit position into visual units.
pub fn to_visual(position: Point2<f64>, config: &LayoutConfig) -> Point2<f64> {
    Point2::from(position.coords * config.unit_scale)
}

/// Computes the strokes for every bond whose endpoints resolve to atoms.
///
/// The center line is trimmed by `stroke_clearance` at both ends so strokes
/// stop short of atom labels. Double bonds are drawn as two rails at half the
/// double-bond gap on either side; triple bonds as the center line plus two
/// rails at the full triple-bond gap. Bonds referencing unknown atoms are
/// skipped.
pub fn render_bonds(structure: &MoleculeStructure, config: &LayoutConfig) -> Vec<RenderedBond> {
    let lookup = structure.atom_lookup();

    structure
        .bonds
        .iter()
        .filter_map(|bond| {
            let (Some(from), Some(to)) =
                (lookup.get(bond.from.as_str()), lookup.get(bond.to.as_str()))
            else {
                trace!(from = %bond.from, to = %bond.to, "Skipping bond with unresolved endpoint.");
                return None;
            };

            let center = shorten_line(
                LineSegment::new(
                    to_visual(from.position(), config),
                    to_visual(to.position(), config),
                ),
                config.stroke_clearance,
            );

            let lines = match bond.order {
                BondOrder::Single => vec![center],
                BondOrder::Double => {
                    let half_gap = config.double_bond_gap / 2.0;
                    vec![offset_line(center, half_gap), offset_line(center, -half_gap)]
                }
                BondOrder::Triple => vec![
                    center,
                    offset_line(center, config.triple_bond_gap),
                    offset_line(center, -config.triple_bond_gap),
                ],
            };

            Some(RenderedBond {
                from: bond.from.clone(),
                to: bond.to.clone(),
                order: bond.order,
                style: if bond.dative {
                    StrokeStyle::Dative
                } else {
                    StrokeStyle::Solid
                },
                lines,
            })
        })
        .collect()
}
