//! Reading and writing structure documents.
//!
//! Structures arrive as JSON (the content pipeline's format) or TOML (for
//! hand-written fixtures). Both go through the [`traits::StructureFile`]
//! interface; [`format`] picks the implementation from a file extension and
//! resolves a structure by identifier.

pub mod error;
pub mod format;
pub mod json;
pub mod toml;
pub mod traits;
