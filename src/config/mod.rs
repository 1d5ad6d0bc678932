//! Path derivation and JSON file I/O used by the store.
pub mod path;
pub mod io;

pub use path::{config_dir, config_path};
pub use io::{read_json, read_object, write_json};
