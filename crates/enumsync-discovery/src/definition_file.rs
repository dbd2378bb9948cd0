//! Enum definition files
//!
//! One TOML file per enum, named after the enum:
//!
//! ```toml
//! # UserStatus.toml
//! name = "UserStatus"
//! capabilities = ["EnumHelpers"]
//!
//! [[cases]]
//! name = "ACTIVE"
//! value = "active"
//! label = "Active"   # optional, defaults to the case name
//! ```

use anyhow::{anyhow, Result};
use enumsync_core::{EnumCase, EnumDefinition};
use serde::Deserialize;
use std::path::Path;

/// Capability a definition must declare to be exposed to the frontend
pub const ENUM_HELPERS_CAPABILITY: &str = "EnumHelpers";

/// Extension of definition files
pub const DEFINITION_EXTENSION: &str = "toml";

#[derive(Debug, Deserialize)]
struct RawDefinition {
    name: String,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    cases: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
struct RawCase {
    name: String,
    value: String,
    label: Option<String>,
}

/// What a well-formed definition file turned out to be
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedDefinition {
    /// Declares the EnumHelpers capability
    Eligible(EnumDefinition),
    /// Valid enum without the capability; excluded from the registry
    WithoutCapability(String),
}

/// Parse a definition file's content
///
/// The declared `name` must match the file stem, mirroring the one-type-per-file
/// convention of the enum source directory.
pub fn parse_definition(path: &Path, content: &str) -> Result<ParsedDefinition> {
    let raw: RawDefinition = toml::from_str(content)
        .map_err(|e| anyhow!("not an enum definition: {}", e.message()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if raw.name != stem {
        return Err(anyhow!(
            "declares enum '{}' but the file is named '{}'",
            raw.name,
            stem
        ));
    }

    if !raw
        .capabilities
        .iter()
        .any(|capability| capability == ENUM_HELPERS_CAPABILITY)
    {
        return Ok(ParsedDefinition::WithoutCapability(raw.name));
    }

    let cases = raw
        .cases
        .into_iter()
        .map(|case| EnumCase::new(case.value, case.name, case.label))
        .collect();
    let definition = EnumDefinition::new(raw.name, cases)?;
    Ok(ParsedDefinition::Eligible(definition))
}
