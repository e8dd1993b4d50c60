use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON structure document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML structure document: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize structure as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Unsupported structure file format for '{path}' (expected .json or .toml)", path = path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("Structure '{id}' not found (available: {available})")]
    StructureNotFound { id: String, available: String },
    #[error("Document contains {count} structures; an identifier is required to pick one")]
    AmbiguousStructure { count: usize },
    #[error("Document contains no structures")]
    Empty,
}
