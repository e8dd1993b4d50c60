//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] data model and the
//! [`crate::engine`] placement algorithms together.
//!
//! - **Layout Workflow** ([`layout`]) - Turns a structure and a set of visible
//!   layers into a complete, drawable [`layout::LayoutResult`]: bond strokes,
//!   atom positions, lone-pair dots, label positions and the viewport.
//! - **SVG Export** ([`svg`]) - Serializes a layout into a standalone SVG
//!   document.
//!
//! Every workflow is a pure function of its inputs; recomputing after a layer
//! toggle is cheap and always gives the same positions for the same inputs.

pub mod layout;
pub mod svg;
