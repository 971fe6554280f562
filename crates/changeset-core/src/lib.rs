//! Core orchestration layer for changeset
//!
//! This crate ties the Layer 0 crates together:
//!
//! - **Path normalization**: trim changed paths to a fixed depth, deduplicate, sort
//! - **Configuration**: defaults overridden by `.changeset.toml` or an explicit file
//! - **Output planning**: plain-text path lists or spliced YAML manifests
//! - **ChangesetEngine**: diff, plan, then write
//!
//! # Architecture
//!
//! `changeset-core` sits above the Layer 0 crates and below the CLI:
//!
//! ```text
//!                      CLI
//!                       |
//!                changeset-core
//!                       |
//!      +----------------+----------------+
//!      |                |                |
//! changeset-fs    changeset-git   changeset-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use changeset_core::{ChangesetConfig, ChangesetEngine, ChangesetRequest, OutputTarget, open_provider};
//! use changeset_fs::NormalizedPath;
//!
//! fn example() -> changeset_core::Result<()> {
//!     let repo = NormalizedPath::new(".");
//!     let config = ChangesetConfig::load(&repo, None)?;
//!     let engine = ChangesetEngine::new(open_provider(config.backend, &repo)?, config)?;
//!     let request = ChangesetRequest::new("feature", "main", "industries", OutputTarget::text_in_cwd())?;
//!     let report = engine.run(&request)?;
//!     println!("{} changed folders", report.added_modified.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod paths;
pub mod provider;

pub use config::{CONFIG_FILE_NAME, ChangesetConfig, DiffBackend};
pub use engine::{ChangesetEngine, ChangesetReport, ChangesetRequest};
pub use error::{Error, Result};
pub use output::{OutputKind, OutputTarget, PlannedWrite};
pub use provider::open_provider;
