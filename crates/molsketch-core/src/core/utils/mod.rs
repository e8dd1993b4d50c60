//! Helpers shared by the layout engine and the exporters: 2-D geometry and
//! per-element display data.

pub mod elements;
pub mod geometry;
