//! Enums exposed to the admin frontend
//!
//! Registration order here is the order of the shared payload and of the
//! generated declarations.

pub mod user_role;
pub mod user_status;

pub use user_role::UserRole;
pub use user_status::UserStatus;

use enumsync_core::{EnumAccessor, EnumOption, EnumRegistry, RegistryError};
use enumsync_logger as logger;

/// Registry of the built-in frontend-visible enums
pub fn registry() -> EnumRegistry {
    let mut registry = EnumRegistry::new();
    if let Err(e) = register_all(&mut registry) {
        logger::warn(&format!("Failed to register built-in enums: {}", e));
    }
    registry
}

fn register_all(registry: &mut EnumRegistry) -> Result<(), RegistryError> {
    registry
        .register::<UserStatus>()?
        .register::<UserRole>()?;
    Ok(())
}

pub fn user_status_options(accessor: &EnumAccessor) -> Vec<EnumOption> {
    accessor.options_of::<UserStatus>()
}

pub fn user_role_options(accessor: &EnumAccessor) -> Vec<EnumOption> {
    accessor.options_of::<UserRole>()
}
