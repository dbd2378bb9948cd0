//! Time-boxed cache for the aggregated enum payload
//!
//! Cache-aside: the first call after a miss or expiry runs discovery and
//! serialization synchronously, then replaces the stored payload in one write.
//! Recomputation is single-flight: concurrent callers that observe an expired
//! entry wait on one lock and re-check the store before recomputing.

use crate::errors::CacheError;
use crate::registry::EnumSource;
use crate::types::AggregatedEnums;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Process-wide key of the enum payload
pub const CACHE_KEY: &str = "frontend_enums";

/// Default payload lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Source of "now", injectable for deterministic expiry
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Snapshot of the aggregated payload and the time it was computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedEnumPayload {
    pub enums: Arc<AggregatedEnums>,
    pub cached_at: DateTime<Utc>,
    /// Fingerprint of the source that produced `enums`
    #[serde(default)]
    pub source: String,
}

impl CachedEnumPayload {
    pub fn new(enums: AggregatedEnums, cached_at: DateTime<Utc>) -> Self {
        CachedEnumPayload {
            enums: Arc::new(enums),
            cached_at,
            source: String::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Fresh while less than `ttl` has elapsed since `cached_at`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match (now - self.cached_at).to_std() {
            Ok(elapsed) => elapsed < ttl,
            // clock moved backwards
            Err(_) => true,
        }
    }
}

/// Key-value store holding cached payloads
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Arc<CachedEnumPayload>>;

    /// Replace the whole entry for `key`
    fn put(&self, key: &str, payload: Arc<CachedEnumPayload>) -> Result<(), CacheError>;

    fn forget(&self, key: &str) -> Result<(), CacheError>;
}

/// In-process store
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<AHashMap<String, Arc<CachedEnumPayload>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Arc<CachedEnumPayload>> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, payload: Arc<CachedEnumPayload>) -> Result<(), CacheError> {
        self.entries.write().insert(key.to_string(), payload);
        Ok(())
    }

    fn forget(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// One JSON file per key under a cache directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Option<Arc<CachedEnumPayload>> {
        let path = self.entry_path(key);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<CachedEnumPayload>(&content) {
            Ok(payload) => Some(Arc::new(payload)),
            Err(e) => {
                debug!("Ignoring unreadable cache entry {:?}: {}", path, e);
                None
            }
        }
    }

    fn put(&self, key: &str, payload: Arc<CachedEnumPayload>) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        let content = serde_json::to_vec(payload.as_ref())?;

        // Atomic write: temp file then rename
        let temp_path = path.with_extension("json.tmp");
        let written = fs::File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&content)?;
                file.flush()
            })
            .and_then(|()| fs::rename(&temp_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn forget(&self, key: &str) -> Result<(), CacheError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Cached access to the aggregated enum payload
pub struct EnumCache {
    source: Arc<dyn EnumSource>,
    fingerprint: String,
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    clock: Clock,
    recompute: Mutex<()>,
}

impl EnumCache {
    pub fn new(source: impl EnumSource + 'static, store: impl CacheStore + 'static) -> Self {
        EnumCache {
            fingerprint: source.fingerprint(),
            source: Arc::new(source),
            store: Arc::new(store),
            ttl: DEFAULT_TTL,
            clock: Arc::new(Utc::now),
            recompute: Mutex::new(()),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Type name -> `{value, name, label}` records; never fails
    pub fn get_aggregated_enums(&self) -> Arc<AggregatedEnums> {
        if let Some(payload) = self.fresh_payload() {
            return Arc::clone(&payload.enums);
        }

        let _guard = self.recompute.lock();
        // another caller may have refreshed while we waited
        if let Some(payload) = self.fresh_payload() {
            return Arc::clone(&payload.enums);
        }

        let payload = Arc::new(self.compute());
        if let Err(e) = self.store.put(CACHE_KEY, Arc::clone(&payload)) {
            warn!("Failed to store enum payload: {}", e);
        }
        Arc::clone(&payload.enums)
    }

    /// Drop the cached payload so the next call recomputes
    pub fn clear_cache(&self) {
        if let Err(e) = self.store.forget(CACHE_KEY) {
            warn!("Failed to clear enum payload cache: {}", e);
        }
    }

    /// When the stored payload was computed, if one is present
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.store.get(CACHE_KEY).map(|payload| payload.cached_at)
    }

    fn fresh_payload(&self) -> Option<Arc<CachedEnumPayload>> {
        let payload = self.store.get(CACHE_KEY)?;
        if payload.source != self.fingerprint {
            debug!(
                "Enum payload was built from '{}', not '{}'",
                payload.source, self.fingerprint
            );
            None
        } else if payload.is_fresh((self.clock)(), self.ttl) {
            Some(payload)
        } else {
            debug!("Enum payload cached at {} has expired", payload.cached_at);
            None
        }
    }

    fn compute(&self) -> CachedEnumPayload {
        let registry = self.source.discover();
        debug!("Recomputed enum payload for {} enums", registry.len());
        CachedEnumPayload::new(registry.aggregate(), (self.clock)())
            .with_source(self.fingerprint.clone())
    }
}
