use super::error::StructureFileError;
use crate::core::models::structure::MoleculeStructure;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing structure documents.
///
/// A document holds one or more structures. Implementors handle the
/// format-specific (de)serialization; path handling is shared.
pub trait StructureFile {
    /// Reads every structure contained in a document.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the document is malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<MoleculeStructure>, StructureFileError>;

    /// Writes a single structure as a standalone document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(
        structure: &MoleculeStructure,
        writer: &mut impl Write,
    ) -> Result<(), StructureFileError>;

    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<MoleculeStructure>, StructureFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(
        structure: &MoleculeStructure,
        path: P,
    ) -> Result<(), StructureFileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(structure, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// The accepted top-level shapes of a structure document.
///
/// Data pipelines ship either one structure, a list, or a collection keyed
/// by structure id. In keyed collections a missing `id` is taken from the key.
/// Readers pick the shape first and then deserialize it directly, so field
/// errors surface with their own message.
#[derive(Debug)]
pub(crate) enum StructureDocument {
    Single(MoleculeStructure),
    List(Vec<MoleculeStructure>),
    Keyed(BTreeMap<String, MoleculeStructure>),
}

impl StructureDocument {
    /// A top-level map is a keyed collection when every value is itself a
    /// map. A single structure always carries an id string or atom arrays.
    pub(crate) fn is_keyed_map<'a, V: 'a>(
        values: impl IntoIterator<Item = &'a V>,
        is_map: impl Fn(&V) -> bool,
    ) -> bool {
        let mut values = values.into_iter().peekable();
        values.peek().is_some() && values.all(|value| is_map(value))
    }

    pub(crate) fn into_structures(self) -> Vec<MoleculeStructure> {
        match self {
            StructureDocument::Single(structure) => vec![structure],
            StructureDocument::List(structures) => structures,
            StructureDocument::Keyed(map) => map
                .into_iter()
                .map(|(key, mut structure)| {
                    if structure.id.is_empty() {
                        structure.id = key;
                    }
                    structure
                })
                .collect(),
        }
    }
}

/// Picks one structure out of a document.
///
/// With an `id`, the first structure carrying it is returned. Without one,
/// the document must contain exactly one structure.
pub fn select_structure(
    structures: Vec<MoleculeStructure>,
    id: Option<&str>,
) -> Result<MoleculeStructure, StructureFileError> {
    match id {
        Some(id) => {
            let available = structures
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            structures
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| StructureFileError::StructureNotFound {
                    id: id.to_string(),
                    available,
                })
        }
        None => {
            let count = structures.len();
            let mut iter = structures.into_iter();
            match (iter.next(), count) {
                (None, _) => Err(StructureFileError::Empty),
                (Some(structure), 1) => Ok(structure),
                (Some(_), count) => Err(StructureFileError::AmbiguousStructure { count }),
            }
        }
    }
}
