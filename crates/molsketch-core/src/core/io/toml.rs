use super::error::StructureFileError;
use super::traits::{StructureDocument, StructureFile};
use crate::core::models::structure::MoleculeStructure;
use std::io::{BufRead, Read, Write};

/// Hand-editable structure documents in TOML.
///
/// A document is either one structure at the top level or a set of tables
/// keyed by structure id.
pub struct TomlStructure;

impl StructureFile for TomlStructure {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<MoleculeStructure>, StructureFileError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let table: ::toml::Table = ::toml::from_str(&content)?;
        let document = if StructureDocument::is_keyed_map(table.values(), ::toml::Value::is_table) {
            StructureDocument::Keyed(::toml::from_str(&content)?)
        } else {
            StructureDocument::Single(::toml::from_str(&content)?)
        };
        Ok(document.into_structures())
    }

    fn write_to(
        structure: &MoleculeStructure,
        writer: &mut impl Write,
    ) -> Result<(), StructureFileError> {
        let content = ::toml::to_string_pretty(structure)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
