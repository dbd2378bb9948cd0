//! `enumsync payload` - the shared props a page response would carry

use crate::errors::CliError;
use crate::source::SourceSelection;
use crate::GlobalOpts;
use chrono::Utc;
use enumsync_config::Config;
use enumsync_core::{shared_props, EnumCache, FileStore};
use enumsync_logger as logger;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

pub fn handle_payload(
    no_cache: bool,
    source: Option<PathBuf>,
    pretty: bool,
    _opts: &GlobalOpts,
) -> Result<(), CliError> {
    let config = Config::load()?;
    let selection = SourceSelection::resolve(source, &config);
    logger::debug(&format!("Enum source: {}", selection));

    let cache = EnumCache::new(selection, FileStore::new(config.cache_dir()))
        .with_ttl(Duration::from_secs(config.cache_ttl_secs()));
    if no_cache {
        cache.clear_cache();
    }

    let props = Value::Object(shared_props::share(&cache));
    if let Some(cached_at) = cache.cached_at() {
        let age = Utc::now().signed_duration_since(cached_at);
        logger::debug(&format!(
            "Payload cached at {} ({}s old, ttl {}s)",
            cached_at.to_rfc3339(),
            age.num_seconds(),
            cache.ttl().as_secs()
        ));
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&props)?
    } else {
        serde_json::to_string(&props)?
    };
    println!("{}", rendered);
    Ok(())
}
