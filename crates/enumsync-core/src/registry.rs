//! Explicit enum registry
//!
//! Definitions keep their registration order everywhere downstream: the
//! aggregated payload, the cached snapshot and the emitted declarations.

use crate::errors::RegistryError;
use crate::helpers::EnumHelpers;
use crate::types::{AggregatedEnums, EnumDefinition};
use ahash::AHashMap;
use tracing::debug;

/// Ordered set of enum definitions keyed by type name
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    definitions: Vec<EnumDefinition>,
    /// Runtime only - type name -> position in `definitions`
    index: AHashMap<String, usize>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition; type names must be unique
    pub fn insert(&mut self, definition: EnumDefinition) -> Result<(), RegistryError> {
        let type_name = definition.type_name().to_string();
        if self.index.contains_key(&type_name) {
            return Err(RegistryError::DuplicateType(type_name));
        }
        debug!(
            "Registered enum {} ({} cases)",
            type_name,
            definition.len()
        );
        self.index.insert(type_name, self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Register a Rust enum that carries the EnumHelpers capability
    pub fn register<E: EnumHelpers>(&mut self) -> Result<&mut Self, RegistryError> {
        self.insert(E::definition()?)?;
        Ok(self)
    }

    pub fn get(&self, type_name: &str) -> Option<&EnumDefinition> {
        self.index.get(type_name).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumDefinition> {
        self.definitions.iter()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.definitions.iter().map(EnumDefinition::type_name).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Merge every definition's array form into one payload
    pub fn aggregate(&self) -> AggregatedEnums {
        self.definitions
            .iter()
            .map(|def| (def.type_name().to_string(), def.to_array()))
            .collect()
    }
}

impl PartialEq for EnumRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
    }
}

impl<'a> IntoIterator for &'a EnumRegistry {
    type Item = &'a EnumDefinition;
    type IntoIter = std::slice::Iter<'a, EnumDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Anything that can produce the current set of frontend-visible enums
///
/// Called by the payload cache on every miss, so implementations must be
/// pure: the same declarations always yield an equal registry.
pub trait EnumSource: Send + Sync {
    fn discover(&self) -> EnumRegistry;

    /// Identifies where the enums come from
    ///
    /// Stored next to cached payloads; a payload built from a different
    /// source is never served.
    fn fingerprint(&self) -> String {
        String::new()
    }
}

impl<F> EnumSource for F
where
    F: Fn() -> EnumRegistry + Send + Sync,
{
    fn discover(&self) -> EnumRegistry {
        self()
    }
}
