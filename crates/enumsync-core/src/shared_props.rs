//! Props shared with every page response
//!
//! The aggregated enum payload travels under the `enums` key of the shared
//! props; there is no separate endpoint for it.

use crate::cache::EnumCache;
use serde_json::{Map, Value};
use tracing::warn;

/// Key of the enum payload inside page props
pub const ENUMS_PROP: &str = "enums";

/// Shared props contributed by enumsync: `{ "enums": { ... } }`
pub fn share(cache: &EnumCache) -> Map<String, Value> {
    let enums = cache.get_aggregated_enums();
    let value = serde_json::to_value(enums.as_ref()).unwrap_or_else(|e| {
        warn!("Failed to serialize enum payload: {}", e);
        Value::Object(Map::new())
    });

    let mut props = Map::new();
    props.insert(ENUMS_PROP.to_string(), value);
    props
}

/// Add the shared enum payload to an existing props object
///
/// Non-object props are replaced by an object holding only the shared keys.
pub fn merge_into(props: &mut Value, cache: &EnumCache) {
    let shared = share(cache);
    match props {
        Value::Object(existing) => existing.extend(shared),
        other => *other = Value::Object(shared),
    }
}
