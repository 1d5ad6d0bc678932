//! Subcommands of the `dotcfg` binary.
pub mod list;
pub mod crud;

pub use list::list_keys;
pub use crud::{get, init, replace, set, show, unset};
