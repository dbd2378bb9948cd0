//! Enum data model shared by the registry, the cache and the emitter
//!
//! - `EnumCase` / `EnumDefinition`: the validated model, in declaration order
//! - `EnumItem` / `EnumOption`: the serialized records sent to the frontend
//! - `AggregatedEnums`: type name -> items, insertion ordered

use crate::errors::RegistryError;
use ahash::AHashSet;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Type name -> ordered `{value, name, label}` records
pub type AggregatedEnums = IndexMap<String, Vec<EnumItem>>;

static TYPE_NAME_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").ok());

/// Whether `name` can be used as a TypeScript type identifier
pub fn is_valid_type_name(name: &str) -> bool {
    TYPE_NAME_RE
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// One `{value, name, label}` record of the array form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumItem {
    pub value: String,
    pub name: String,
    pub label: String,
}

/// One `{value, label}` record of the options form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

impl From<&EnumItem> for EnumOption {
    fn from(item: &EnumItem) -> Self {
        EnumOption {
            value: item.value.clone(),
            label: item.label.clone(),
        }
    }
}

/// A single case of an enum definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    pub value: String,
    pub name: String,
    pub label: String,
}

impl EnumCase {
    /// Build a case; the label falls back to the case name
    pub fn new(value: impl Into<String>, name: impl Into<String>, label: Option<String>) -> Self {
        let name = name.into();
        let label = label.unwrap_or_else(|| name.clone());
        EnumCase {
            value: value.into(),
            name,
            label,
        }
    }

    pub fn to_item(&self) -> EnumItem {
        EnumItem {
            value: self.value.clone(),
            name: self.name.clone(),
            label: self.label.clone(),
        }
    }

    pub fn to_option(&self) -> EnumOption {
        EnumOption {
            value: self.value.clone(),
            label: self.label.clone(),
        }
    }
}

/// A named, ordered set of cases with unique values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    type_name: String,
    cases: Vec<EnumCase>,
}

impl EnumDefinition {
    pub fn new(type_name: impl Into<String>, cases: Vec<EnumCase>) -> Result<Self, RegistryError> {
        let type_name = type_name.into();
        if !is_valid_type_name(&type_name) {
            return Err(RegistryError::InvalidTypeName(type_name));
        }

        let mut seen = AHashSet::with_capacity(cases.len());
        for case in &cases {
            if !seen.insert(case.value.as_str()) {
                return Err(RegistryError::DuplicateValue {
                    type_name,
                    value: case.value.clone(),
                });
            }
        }

        Ok(EnumDefinition { type_name, cases })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// `{value, name, label}` per case, in declaration order
    pub fn to_array(&self) -> Vec<EnumItem> {
        self.cases.iter().map(EnumCase::to_item).collect()
    }

    /// `{value, label}` per case, in declaration order
    pub fn get_options(&self) -> Vec<EnumOption> {
        self.cases.iter().map(EnumCase::to_option).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.value.as_str())
    }
}
