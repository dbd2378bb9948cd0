//! `enumsync generate` - TypeScript declaration files

use crate::errors::CliError;
use crate::source::SourceSelection;
use crate::GlobalOpts;
use clap::Subcommand;
use enumsync_config::Config;
use enumsync_core::declarations::{self, EmitOptions, EmitOutcome};
use enumsync_core::{EmitError, EnumSource};
use enumsync_logger as logger;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum GenerateAction {
    /// Generate enum declarations (value unions, item and option shapes, AppEnums)
    Enums {
        /// Output file (default: resources/js/types/enums.d.ts)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory of enum definition files to use instead of the built-in enums
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Generate the shared page props declaration
    PageProps {
        /// Output file (default: resources/js/types/inertia.d.ts)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory of enum definition files to use instead of the built-in enums
        #[arg(long)]
        source: Option<PathBuf>,
    },
}

pub fn handle_generate(action: GenerateAction, _opts: &GlobalOpts) -> Result<(), CliError> {
    let config = Config::load()?;

    match action {
        GenerateAction::Enums { output, source } => {
            let selection = SourceSelection::resolve(source, &config);
            logger::info(&format!("Discovering enums from {}", selection));
            let registry = selection.discover();

            let path = output.unwrap_or_else(|| config.enums_output_path());
            let options = EmitOptions {
                props_module: config.props_module().to_string(),
            };

            logger::spinner_start("Generating enum declarations");
            report(declarations::write_declarations(&registry, &path, &options))
        }
        GenerateAction::PageProps { output, source } => {
            let selection = SourceSelection::resolve(source, &config);
            logger::info(&format!("Discovering enums from {}", selection));
            let registry = selection.discover();

            let path = output.unwrap_or_else(|| config.page_props_output_path());

            logger::spinner_start("Generating page props declarations");
            report(declarations::write_page_props(&registry, &path))
        }
    }
}

fn report(outcome: Result<EmitOutcome, EmitError>) -> Result<(), CliError> {
    match outcome {
        Ok(EmitOutcome::Written { path, enums }) => {
            logger::spinner_success(&format!("TypeScript declarations written to {}", path.display()));
            println!("Generated {}", path.display());
            println!("Enums: {}", enums.join(", "));
            Ok(())
        }
        Ok(EmitOutcome::Skipped) => {
            logger::spinner_stop();
            println!("No enums with the EnumHelpers capability were found.");
            Ok(())
        }
        Err(e) => {
            logger::spinner_stop();
            Err(e.into())
        }
    }
}
