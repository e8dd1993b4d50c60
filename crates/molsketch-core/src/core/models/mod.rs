//! # Core Models Module
//!
//! Data structures describing a 2-D structural diagram as supplied by the data
//! pipeline.
//!
//! ## Key Components
//!
//! - [`atom`] - Positioned atoms with optional oxidation state, lone-pair count and label
//! - [`bond`] - Bonds between atoms, their order and dative flag
//! - [`polarity`] - Partial-charge records and the δ+/δ− sign
//! - [`structure`] - The complete structure record handed to the layout engine
//! - [`validation`] - Non-fatal data-quality diagnostics
//!
//! ## Usage
//!
//! ```
//! use molsketch::core::models::atom::MoleculeAtom;
//! use molsketch::core::models::bond::{BondOrder, MoleculeBond};
//! use molsketch::core::models::structure::MoleculeStructure;
//!
//! let structure = MoleculeStructure::new("co2")
//!     .with_atom(MoleculeAtom::new("c", "C", 0.0, 0.0))
//!     .with_atom(MoleculeAtom::new("o1", "O", -1.0, 0.0).with_lone_pairs(2))
//!     .with_atom(MoleculeAtom::new("o2", "O", 1.0, 0.0).with_lone_pairs(2))
//!     .with_bond(MoleculeBond::new("c", "o1", BondOrder::Double))
//!     .with_bond(MoleculeBond::new("c", "o2", BondOrder::Double));
//!
//! assert_eq!(structure.atom_lookup().len(), 3);
//! ```

pub mod atom;
pub mod bond;
pub mod polarity;
pub mod structure;
pub mod validation;
