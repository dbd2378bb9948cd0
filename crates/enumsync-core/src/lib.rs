//! enumsync core
//!
//! Keeps backend enums and a typed frontend in sync:
//!
//! - [`helpers`]: the EnumHelpers capability and the `backed_enum!` macro
//! - [`registry`]: explicit, ordered registration of frontend-visible enums
//! - [`cache`]: the time-boxed aggregated payload (`frontend_enums`)
//! - [`shared_props`] / [`accessor`]: injecting and reading the `enums` page prop
//! - [`declarations`]: TypeScript declaration emission

pub mod accessor;
pub mod cache;
pub mod declarations;
pub mod errors;
pub mod helpers;
pub mod registry;
pub mod shared_props;
pub mod types;

pub use accessor::EnumAccessor;
pub use cache::{CacheStore, CachedEnumPayload, EnumCache, FileStore, MemoryStore, CACHE_KEY};
pub use declarations::{EmitOptions, EmitOutcome};
pub use errors::{CacheError, EmitError, RegistryError};
pub use helpers::{BackedEnum, EnumHelpers};
pub use registry::{EnumRegistry, EnumSource};
pub use types::{AggregatedEnums, EnumCase, EnumDefinition, EnumItem, EnumOption};

// Used by `backed_enum!` expansions
#[doc(hidden)]
pub use serde;
