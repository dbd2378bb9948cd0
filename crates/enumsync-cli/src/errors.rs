//! Error types for the enumsync CLI

use enumsync_config::ConfigError;
use enumsync_core::{CacheError, EmitError};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Enum '{0}' is not registered")]
    EnumNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize payload: {0}")]
    Json(#[from] serde_json::Error),
}
