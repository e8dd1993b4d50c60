use crate::core::io::format::load_structure;
use crate::core::models::polarity::ChargeSign;
use crate::core::models::structure::MoleculeStructure;
use crate::engine::angles::bond_angles;
use crate::engine::annotations::{AtomAnnotations, annotate_atoms};
use crate::engine::bonds::{RenderedBond, render_bonds, to_visual};
use crate::engine::config::{LayoutConfig, Visibility};
use crate::engine::error::EngineError;
use crate::engine::viewport::{Viewport, compute_viewport};
use nalgebra::Point2;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Everything a drawing layer needs to place one atom and its annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomLayout {
    pub id: String,
    pub symbol: String,
    /// Text drawn at the atom position.
    pub label: String,
    /// Atom center in visual units.
    pub position: Point2<f64>,
    pub oxidation_state: Option<i32>,
    /// The collapsed partial charge of this atom, whether or not it is shown.
    pub charge: Option<ChargeSign>,
    pub annotations: AtomAnnotations,
    /// Absolute positions of the two dots of every lone pair.
    pub lone_pair_dots: Vec<[Point2<f64>; 2]>,
}

impl AtomLayout {
    /// Absolute position of the oxidation label, if placed.
    pub fn oxidation_label_position(&self) -> Option<Point2<f64>> {
        self.annotations.ox_offset.map(|offset| self.position + offset)
    }

    /// Absolute position of the charge label, if placed.
    pub fn charge_label_position(&self) -> Option<Point2<f64>> {
        self.annotations
            .charge_offset
            .map(|offset| self.position + offset)
    }
}

/// The complete, drawable layout of one structure.
///
/// All coordinates share the viewport's coordinate space. Atoms appear in
/// input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub structure_id: String,
    pub visibility: Visibility,
    pub viewport: Viewport,
    pub bonds: Vec<RenderedBond>,
    pub atoms: Vec<AtomLayout>,
}

impl LayoutResult {
    /// Looks up an atom's layout by id. With duplicate ids, the first wins.
    pub fn atom(&self, id: &str) -> Option<&AtomLayout> {
        self.atoms.iter().find(|atom| atom.id == id)
    }

    /// Whether the atom carries a partial-charge annotation.
    ///
    /// Derived from the structure's polarity records, independent of whether
    /// the charge layer is currently shown, so hosts can style and handle
    /// clicks consistently.
    pub fn has_charge(&self, atom_id: &str) -> bool {
        self.atom(atom_id).is_some_and(|atom| atom.charge.is_some())
    }
}

/// Computes the layout of `structure` with the default geometric constants.
pub fn compute_layout(structure: &MoleculeStructure, visibility: &Visibility) -> LayoutResult {
    compute_layout_with(structure, visibility, &LayoutConfig::default())
}

/// Computes the layout of `structure` with explicit geometric constants.
///
/// A pure function of its inputs: identical arguments give identical output.
/// Bonds whose endpoints do not resolve are left out; an empty structure
/// yields the default frame and no atoms.
///
/// `config` is expected to be valid. Build it with `LayoutConfigBuilder` or
/// call [`LayoutConfig::validate`] first; debug builds assert this.
#[instrument(skip_all, name = "compute_layout", fields(structure = %structure.id))]
pub fn compute_layout_with(
    structure: &MoleculeStructure,
    visibility: &Visibility,
    config: &LayoutConfig,
) -> LayoutResult {
    debug_assert!(config.validate().is_ok(), "invalid layout configuration");
    let angles = bond_angles(structure);
    let annotations = annotate_atoms(structure, &angles, visibility, config);
    let bonds = render_bonds(structure, config);
    let viewport = compute_viewport(&structure.atoms, config);
    let charges = structure.charges();

    let atoms: Vec<AtomLayout> = structure
        .atoms
        .iter()
        .zip(annotations)
        .map(|(atom, annotations)| {
            let position = to_visual(atom.position(), config);
            AtomLayout {
                id: atom.id.clone(),
                symbol: atom.symbol.clone(),
                label: atom.display_label().to_string(),
                position,
                oxidation_state: atom.ox,
                charge: charges.get(atom.id.as_str()).copied(),
                lone_pair_dots: annotations.lone_pair_dots(position, config),
                annotations,
            }
        })
        .collect();

    debug!(
        atoms = atoms.len(),
        bonds = bonds.len(),
        skipped_bonds = structure.bonds.len() - bonds.len(),
        view_box = %viewport.view_box(),
        "Layout computed."
    );

    LayoutResult {
        structure_id: structure.id.clone(),
        visibility: *visibility,
        viewport,
        bonds,
        atoms,
    }
}

/// Loads a structure document, picks one structure and lays it out.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if `config` is invalid and
/// [`EngineError::StructureFile`] if the document cannot be read or the
/// structure cannot be resolved.
#[instrument(skip_all, name = "layout_workflow")]
pub fn run(
    input: &Path,
    structure_id: Option<&str>,
    visibility: &Visibility,
    config: &LayoutConfig,
) -> Result<(MoleculeStructure, LayoutResult), EngineError> {
    config.validate()?;
    let structure = load_structure(input, structure_id)?;
    info!(
        "Loaded structure '{}' ({} atoms, {} bonds) from {:?}.",
        structure.id,
        structure.atoms.len(),
        structure.bonds.len(),
        input
    );
    let layout = compute_layout_with(&structure, visibility, config);
    Ok((structure, layout))
}
