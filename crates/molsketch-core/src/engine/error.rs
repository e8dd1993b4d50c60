use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::error::StructureFileError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid layout configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load structure: {source}")]
    StructureFile {
        #[from]
        source: StructureFileError,
    },
}
