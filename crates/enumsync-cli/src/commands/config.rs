//! `enumsync config` - inspect and edit enumsync.toml

use crate::errors::CliError;
use crate::GlobalOpts;
use clap::Subcommand;
use colored::Colorize;
use enumsync_config::Config;
use enumsync_logger as logger;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set a configuration key
    Set { key: String, value: String },
    /// Print the resolved config file path
    Path,
}

pub fn handle_config(action: Option<ConfigAction>, opts: &GlobalOpts) -> Result<(), CliError> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", "Configuration:".bold().green());
            if config.is_empty() {
                if opts.verbosity_level() > 0 {
                    println!("  {}", "(empty)".yellow());
                }
            } else {
                for (key, value) in config.values_iter() {
                    println!("  {}: {}", key.cyan(), value);
                }
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, value.clone())?;
            config.save()?;
            logger::success(&format!("Set {} = {}", key, value));
            Ok(())
        }
        ConfigAction::Path => {
            let path = Config::path();
            logger::debug(&format!("Reading config from: {}", path.display()));
            println!("{}", path.display());
            Ok(())
        }
    }
}
