use super::error::StructureFileError;
use super::json::JsonStructure;
use super::toml::TomlStructure;
use super::traits::{StructureFile, select_structure};
use crate::core::models::structure::MoleculeStructure;
use std::path::Path;
use tracing::debug;

/// The structure document formats understood by molsketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Json,
    Toml,
}

impl StructureFormat {
    /// Chooses a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, StructureFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(StructureFormat::Json),
            Some("toml") => Ok(StructureFormat::Toml),
            _ => Err(StructureFileError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Reads every structure in the document at `path`.
pub fn load_structures(path: &Path) -> Result<Vec<MoleculeStructure>, StructureFileError> {
    let format = StructureFormat::from_path(path)?;
    debug!("Reading {:?} structure document from {:?}", format, path);
    match format {
        StructureFormat::Json => JsonStructure::read_from_path(path),
        StructureFormat::Toml => TomlStructure::read_from_path(path),
    }
}

/// Reads the document at `path` and picks one structure from it.
///
/// See [`select_structure`] for how `id` is resolved.
pub fn load_structure(
    path: &Path,
    id: Option<&str>,
) -> Result<MoleculeStructure, StructureFileError> {
    select_structure(load_structures(path)?, id)
}

/// Writes `structure` to `path` in the format implied by its extension.
pub fn save_structure(structure: &MoleculeStructure, path: &Path) -> Result<(), StructureFileError> {
    match StructureFormat::from_path(path)? {
        StructureFormat::Json => JsonStructure::write_to_path(structure, path),
        StructureFormat::Toml => TomlStructure::write_to_path(structure, path),
    }
}
