//! Core types and sync engine for the calsync ecosystem.
//!
//! calsync mirrors events from a pull calendar into a push calendar over a
//! rolling window of days, tagging every copy it creates so the next pass
//! can find and replace its own output. This crate provides:
//! - `Event` and related provider-neutral types
//! - the `engine`/`runner` mirroring passes
//! - `protocol`/`provider` for talking to provider binaries
//! - persisted `settings` and global configuration

pub mod calsync_config;
pub mod engine;
pub mod error;
pub mod event;
pub mod marker;
pub mod materialize;
pub mod protocol;
pub mod provider;
pub mod recurrence;
pub mod runner;
pub mod settings;
pub mod store;
pub mod window;

#[cfg(test)]
mod testing;

// Re-export the everyday types at crate root for convenience
pub use error::{CalSyncError, CalSyncResult};
pub use event::*;
