//! TypeScript declaration emitter
//!
//! Renders the registry into a `.d.ts` artifact: per-enum value unions and
//! item/option shapes, the `AppEnums` aggregate and a `PageProps` module
//! augmentation. Rendering is a pure function of the registry, so an unchanged
//! registry always produces byte-identical output.

use crate::errors::EmitError;
use crate::registry::EnumRegistry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const GENERATED_NOTICE: &str = "// Do not modify this file manually\n\n";

/// Options for the enum declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Module whose `PageProps` interface is augmented with `enums`
    pub props_module: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            props_module: "@inertiajs/vue3".to_string(),
        }
    }
}

/// Result of an emission request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Written { path: PathBuf, enums: Vec<String> },
    /// Nothing to emit; no file was touched
    Skipped,
}

/// Quote a value as a single-quoted TypeScript string literal
fn ts_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Render the enum declaration file
pub fn render_declarations(registry: &EnumRegistry, options: &EmitOptions) -> String {
    let mut content =
        String::from("// Auto-generated enum types from backend enums implementing EnumHelpers\n");
    content.push_str(GENERATED_NOTICE);

    for definition in registry {
        let name = definition.type_name();

        let union = if definition.is_empty() {
            "never".to_string()
        } else {
            definition
                .values()
                .map(ts_string_literal)
                .collect::<Vec<_>>()
                .join(" | ")
        };
        content.push_str(&format!("export type {}Value = {};\n\n", name, union));

        content.push_str(&format!("export interface {}Item {{\n", name));
        content.push_str(&format!("  value: {}Value;\n", name));
        content.push_str("  name: string;\n");
        content.push_str("  label: string;\n");
        content.push_str("}\n\n");

        content.push_str(&format!("export type {0}Array = {0}Item[];\n\n", name));

        content.push_str(&format!("export interface {}Option {{\n", name));
        content.push_str(&format!("  value: {}Value;\n", name));
        content.push_str("  label: string;\n");
        content.push_str("}\n\n");

        content.push_str(&format!("export type {0}Options = {0}Option[];\n\n", name));
    }

    content.push_str("export interface AppEnums {\n");
    for name in registry.type_names() {
        content.push_str(&format!("  {0}: {0}Array;\n", name));
    }
    content.push_str("}\n\n");

    content.push_str(&format!(
        "declare module {} {{\n",
        ts_string_literal(&options.props_module)
    ));
    content.push_str("  interface PageProps {\n");
    content.push_str("    enums: AppEnums;\n");
    content.push_str("  }\n");
    content.push_str("}\n");

    content
}

/// Render the shared page-props declaration file
pub fn render_page_props(registry: &EnumRegistry) -> String {
    let mut content = String::from("// Auto-generated shared page props\n");
    content.push_str(GENERATED_NOTICE);

    content.push_str("export interface EnumValue {\n");
    content.push_str("  value: string;\n");
    content.push_str("  name: string;\n");
    content.push_str("  label: string;\n");
    content.push_str("}\n\n");

    content.push_str("export interface Enums {\n");
    for name in registry.type_names() {
        content.push_str(&format!("  {}: EnumValue[];\n", name));
    }
    content.push_str("}\n\n");

    content.push_str("export interface PageProps {\n");
    content.push_str("  enums?: Enums;\n");
    content.push_str("  [key: string]: unknown;\n");
    content.push_str("}\n");

    content
}

/// Write the enum declaration file, creating parent directories as needed
pub fn write_declarations(
    registry: &EnumRegistry,
    output_path: &Path,
    options: &EmitOptions,
) -> Result<EmitOutcome, EmitError> {
    if registry.is_empty() {
        debug!("No enums registered, skipping {:?}", output_path);
        return Ok(EmitOutcome::Skipped);
    }
    write_atomic(output_path, &render_declarations(registry, options))?;
    info!("Enum declarations written to {:?}", output_path);
    Ok(written(registry, output_path))
}

/// Write the shared page-props declaration file
pub fn write_page_props(
    registry: &EnumRegistry,
    output_path: &Path,
) -> Result<EmitOutcome, EmitError> {
    if registry.is_empty() {
        debug!("No enums registered, skipping {:?}", output_path);
        return Ok(EmitOutcome::Skipped);
    }
    write_atomic(output_path, &render_page_props(registry))?;
    info!("Page props declarations written to {:?}", output_path);
    Ok(written(registry, output_path))
}

fn written(registry: &EnumRegistry, output_path: &Path) -> EmitOutcome {
    EmitOutcome::Written {
        path: output_path.to_path_buf(),
        enums: registry
            .type_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Write to a temp file next to the target, then rename over it
fn write_atomic(path: &Path, content: &str) -> Result<(), EmitError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|source| EmitError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let written = fs::File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.flush()
        })
        .and_then(|()| fs::rename(&temp_path, path));
    written.map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        EmitError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
