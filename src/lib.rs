//! Library root for dotcfg
//!
//! A small per-application JSON config store living under the user's home
//! directory (`~/.<app>/config.json` by default).
pub mod models;
pub mod error;
pub mod util;

pub mod config;
pub mod store;
pub mod commands;

// Convenience re-exports
pub use error::{Result, StoreError};
pub use models::StoreSettings;
pub use store::ConfigStore;
