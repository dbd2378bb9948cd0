//! enumsync CLI library - exposes command handlers for testing

pub mod commands;
pub mod common;
pub mod enums;
pub mod errors;
pub mod source;

pub use common::GlobalOpts;
