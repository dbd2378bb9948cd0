use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building enum definitions and registries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid enum type name: '{0}'")]
    InvalidTypeName(String),

    #[error("Duplicate value '{value}' in enum {type_name}")]
    DuplicateValue { type_name: String, value: String },

    #[error("Enum {0} is already registered")]
    DuplicateType(String),

    #[error("'{value}' is not a valid {type_name} value")]
    UnknownValue { type_name: String, value: String },
}

/// Errors raised while writing declaration files
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by persistent cache stores
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize cached payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
