//! Git diff providers for changeset
//!
//! Lists the files that differ between two refs inside a folder, either
//! through `libgit2` or by running the `git` executable.

pub mod change;
pub mod command;
pub mod error;
pub mod provider;
pub mod repository;

pub use change::{ChangeSet, ChangeStatus, FileChange, parse_name_status};
pub use command::CommandProvider;
pub use error::{Error, Result};
pub use provider::DiffProvider;
pub use repository::Git2Provider;
