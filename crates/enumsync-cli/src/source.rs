//! Selection of the enum source used by a command
//!
//! Precedence: `--source DIR`, then the `source-dir` config key, then the
//! built-in registry compiled into the binary.

use crate::enums;
use enumsync_config::Config;
use enumsync_core::{EnumRegistry, EnumSource};
use enumsync_discovery::DirectorySource;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum SourceSelection {
    BuiltIn,
    Directory(DirectorySource),
}

impl SourceSelection {
    pub fn resolve(cli_source: Option<PathBuf>, config: &Config) -> Self {
        match cli_source.or_else(|| config.source_dir()) {
            Some(dir) => SourceSelection::Directory(DirectorySource::new(dir)),
            None => SourceSelection::BuiltIn,
        }
    }
}

impl EnumSource for SourceSelection {
    fn discover(&self) -> EnumRegistry {
        match self {
            SourceSelection::BuiltIn => enums::registry(),
            SourceSelection::Directory(source) => source.scan(),
        }
    }

    fn fingerprint(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SourceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSelection::BuiltIn => write!(f, "built-in registry"),
            SourceSelection::Directory(source) => write!(f, "{}", source.root().display()),
        }
    }
}
