use super::error::StructureFileError;
use super::traits::{StructureDocument, StructureFile};
use crate::core::models::structure::MoleculeStructure;
use serde_json::Value;
use std::io::{BufRead, Read, Write};

/// Structure documents in the JSON layout produced by the content pipeline.
pub struct JsonStructure;

impl StructureFile for JsonStructure {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<MoleculeStructure>, StructureFileError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let document = match serde_json::from_str::<Value>(&content)? {
            Value::Array(_) => StructureDocument::List(serde_json::from_str(&content)?),
            Value::Object(map) if StructureDocument::is_keyed_map(map.values(), Value::is_object) => {
                StructureDocument::Keyed(serde_json::from_str(&content)?)
            }
            _ => StructureDocument::Single(serde_json::from_str(&content)?),
        };
        Ok(document.into_structures())
    }

    fn write_to(
        structure: &MoleculeStructure,
        writer: &mut impl Write,
    ) -> Result<(), StructureFileError> {
        serde_json::to_writer_pretty(&mut *writer, structure)?;
        writeln!(writer)?;
        Ok(())
    }
}
