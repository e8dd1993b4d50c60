//! # Core Module
//!
//! The stateless foundation of molsketch: the structure records supplied by
//! the data pipeline, the 2-D geometry helpers the layout engine is built on,
//! and reading and writing structure documents.
//!
//! - **Structure Representation** ([`models`]) - Atoms, bonds, polarity records and validation
//! - **Utilities** ([`utils`]) - Segment shortening/offsetting, angle arithmetic, element colours
//! - **File I/O** ([`io`]) - JSON and TOML structure documents

pub mod io;
pub mod models;
pub mod utils;
