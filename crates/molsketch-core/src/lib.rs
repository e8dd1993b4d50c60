//! # Molsketch Core Library
//!
//! A deterministic layout engine for 2D molecular diagrams. Given atoms on a
//! grid, their bonds and a set of visible layers, it computes where every
//! drawable element goes: shortened and offset bond strokes, lone-pair dots,
//! oxidation-state labels and partial-charge labels, placed so annotations
//! steer around bonds and each other.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Plain data models (`MoleculeStructure`),
//!   geometry helpers and structure document I/O.
//!
//! - **[`engine`]: The Placement Logic.** Bond angles, angular gap search,
//!   lone-pair and label placement, bond strokes and the viewport, driven by
//!   a validated `LayoutConfig`.
//!
//! - **[`workflows`]: The Public API.** `compute_layout` assembles the full
//!   layout of a structure; the SVG exporter draws it.
//!
//! ```
//! use molsketch::core::models::atom::MoleculeAtom;
//! use molsketch::core::models::structure::MoleculeStructure;
//! use molsketch::engine::config::Visibility;
//! use molsketch::workflows::layout::compute_layout;
//!
//! let structure = MoleculeStructure::new("neon")
//!     .with_atom(MoleculeAtom::new("ne", "Ne", 0.0, 0.0).with_lone_pairs(4));
//! let layout = compute_layout(&structure, &Visibility::all());
//!
//! assert_eq!(layout.atoms[0].lone_pair_dots.len(), 4);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
