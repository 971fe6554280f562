//! Filesystem layer for changeset
//!
//! Provides slash-normalized paths, read-or-empty text loading, wholesale
//! atomic overwrites and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
