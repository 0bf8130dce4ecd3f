//! Loading the list of requested declaration categories.
//!
//! The list is a JSON array such as `["class", "function", "field"]`.

pub mod loader;

pub use loader::{load_from_path, load_from_str, ConfigError};
