//! # Engine Module
//!
//! The layout engine: pure functions that turn a structure into bond strokes,
//! annotation positions and a viewport.
//!
//! ## Pipeline
//!
//! Leaves first:
//!
//! - **Bond angles** ([`angles`]) - Per-atom departure angles of all bonds
//! - **Angular gaps** ([`gaps`]) - Free arcs between occupied angles, largest first
//! - **Placement** ([`placement`]) - Lone-pair bisection and single-label placement
//! - **Annotations** ([`annotations`]) - Priority-ordered placement for every atom
//! - **Bonds** ([`bonds`]) - Shortened and offset strokes for single, double and triple bonds
//! - **Viewport** ([`viewport`]) - Padded bounding frame of the atom positions
//!
//! Geometric constants and layer visibility live in [`config`]; errors raised
//! while preparing a layout (invalid configuration, unreadable input) in
//! [`error`]. The computations themselves never fail: unresolved references
//! are skipped and degenerate segments are left untouched.

pub mod angles;
pub mod annotations;
pub mod bonds;
pub mod config;
pub mod error;
pub mod gaps;
pub mod placement;
pub mod viewport;
