//! Enum discovery from a definition directory
//!
//! Scans one directory (non-recursively) for enum definition files and
//! builds a registry from the ones that declare the EnumHelpers capability.
//! Discovery never fails:
//! - a missing directory yields an empty registry
//! - files that do not parse as definitions are skipped
//! - definitions without the capability are excluded
//!
//! Files are visited in file-name order so repeated scans of the same
//! directory produce the same registry order on every platform.

pub mod definition_file;

use definition_file::{parse_definition, ParsedDefinition, DEFINITION_EXTENSION};
use enumsync_core::{EnumRegistry, EnumSource, RegistryError};
use enumsync_logger as logger;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Enum source backed by a directory of definition files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySource { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scan(&self) -> EnumRegistry {
        discover_enums(&self.root)
    }
}

impl EnumSource for DirectorySource {
    fn discover(&self) -> EnumRegistry {
        self.scan()
    }

    fn fingerprint(&self) -> String {
        self.root.display().to_string()
    }
}

/// Definition files directly under `root`, sorted by file name
fn candidate_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == DEFINITION_EXTENSION)
        })
        .map(|e| e.into_path())
        .collect()
}

/// Build a registry from every eligible definition under `root`
pub fn discover_enums(root: &Path) -> EnumRegistry {
    let start = Instant::now();
    let mut registry = EnumRegistry::new();

    if !root.is_dir() {
        logger::debug(&format!(
            "Enum source directory {:?} does not exist, nothing to discover",
            root
        ));
        return registry;
    }

    for path in candidate_files(root) {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                logger::debug(&format!("Skipping {:?}: {}", path, e));
                continue;
            }
        };

        match parse_definition(&path, &content) {
            Ok(ParsedDefinition::Eligible(definition)) => {
                if let Err(e) = registry.insert(definition) {
                    logger::warn(&format!("Skipping {:?}: {}", path, e));
                }
            }
            Ok(ParsedDefinition::WithoutCapability(name)) => {
                logger::debug(&format!(
                    "Excluding {}: EnumHelpers capability not declared",
                    name
                ));
            }
            Err(e) if e.downcast_ref::<RegistryError>().is_some() => {
                logger::warn(&format!("Skipping {:?}: {}", path, e));
            }
            Err(e) => {
                logger::debug(&format!("Skipping {:?}: {}", path, e));
            }
        }
    }

    logger::debug(&format!(
        "discover_enums: found {} enums in {:?} in {:.2}ms",
        registry.len(),
        root,
        start.elapsed().as_secs_f64() * 1000.0
    ));

    registry
}
