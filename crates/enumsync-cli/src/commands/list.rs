//! `enumsync list` - show frontend-visible enums and their cases

use crate::errors::CliError;
use crate::source::SourceSelection;
use crate::GlobalOpts;
use colored::Colorize;
use enumsync_config::Config;
use enumsync_core::{EnumDefinition, EnumSource};
use std::path::PathBuf;

pub fn handle_list(
    name: Option<String>,
    source: Option<PathBuf>,
    opts: &GlobalOpts,
) -> Result<(), CliError> {
    let config = Config::load()?;
    let selection = SourceSelection::resolve(source, &config);
    let registry = selection.discover();

    if let Some(name) = name {
        let definition = registry
            .get(&name)
            .ok_or_else(|| CliError::EnumNotFound(name.clone()))?;
        print_definition(definition);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No enums with the EnumHelpers capability were found.");
        return Ok(());
    }

    if opts.verbosity_level() > 0 {
        println!("{} {}", "Source:".bold(), selection);
    }
    for definition in &registry {
        print_definition(definition);
    }
    Ok(())
}

fn print_definition(definition: &EnumDefinition) {
    println!(
        "{} ({} cases)",
        definition.type_name().bold().green(),
        definition.len()
    );

    let name_width = definition
        .cases()
        .iter()
        .map(|case| case.name.len())
        .max()
        .unwrap_or(0);
    let value_width = definition
        .cases()
        .iter()
        .map(|case| case.value.len())
        .max()
        .unwrap_or(0);

    for case in definition.cases() {
        let name = format!("{:<width$}", case.name, width = name_width);
        println!(
            "  {}  {:<width$}  {}",
            name.cyan(),
            case.value,
            case.label,
            width = value_width,
        );
    }
}
