//! `enumsync cache` - manage the stored enum payload

use crate::errors::CliError;
use crate::GlobalOpts;
use clap::Subcommand;
use enumsync_config::Config;
use enumsync_core::{CacheStore, FileStore, CACHE_KEY};
use enumsync_logger as logger;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum CacheAction {
    /// Drop the cached enum payload so the next request recomputes it
    Clear,
    /// Show the cache directory, or set it when a path is given
    Path {
        /// Optional new cache directory
        new_path: Option<String>,
    },
}

pub fn handle_cache(action: CacheAction, opts: &GlobalOpts) -> Result<(), CliError> {
    match action {
        CacheAction::Clear => clear_cache(opts),
        CacheAction::Path { new_path } => handle_cache_path(new_path),
    }
}

fn clear_cache(opts: &GlobalOpts) -> Result<(), CliError> {
    let config = Config::load()?;
    let store = FileStore::new(config.cache_dir());
    let entry = store.entry_path(CACHE_KEY);

    if !entry.exists() {
        logger::debug("Enum payload cache already clean");
        if opts.verbosity_level() > 0 {
            println!("Nothing to clear");
        }
        return Ok(());
    }

    store.forget(CACHE_KEY)?;
    logger::success(&format!("Removed {}", entry.display()));
    Ok(())
}

fn handle_cache_path(new_path: Option<String>) -> Result<(), CliError> {
    let mut config = Config::load()?;
    match new_path {
        Some(path) => {
            fs::create_dir_all(PathBuf::from(&path))?;
            config.cache_path = Some(path.clone());
            config.save()?;
            logger::success(&format!("Cache path set to {}", path));
        }
        None => println!("{}", config.cache_dir().display()),
    }
    Ok(())
}
