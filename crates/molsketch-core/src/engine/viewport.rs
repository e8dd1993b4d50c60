use super::bonds::to_visual;
use super::config::LayoutConfig;
use crate::core::models::atom::MoleculeAtom;
use nalgebra::Point2;
use serde::Serialize;

/// The coordinate frame of a diagram, in visual units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// The value of an SVG `viewBox` attribute for this frame.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Derives the frame from the atom positions.
///
/// The bounding box of all scaled atom positions is grown by
/// `viewport_padding` on every side. Annotation offsets are not considered;
/// they are expected to fit within the padding. Without atoms the configured
/// default frame is used.
pub fn compute_viewport(atoms: &[MoleculeAtom], config: &LayoutConfig) -> Viewport {
    let mut positions = atoms.iter().map(|atom| to_visual(atom.position(), config));

    let Some(first) = positions.next() else {
        let frame = config.default_frame;
        return Viewport {
            min_x: frame.min_x,
            min_y: frame.min_y,
            width: frame.width,
            height: frame.height,
        };
    };

    let (min, max) = positions.fold((first, first), |(min, max), p| {
        (
            Point2::new(min.x.min(p.x), min.y.min(p.y)),
            Point2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });

    let padding = config.viewport_padding;
    Viewport {
        min_x: min.x - padding,
        min_y: min.y - padding,
        width: max.x - min.x + 2.0 * padding,
        height: max.y - min.y + 2.0 * padding,
    }
}
