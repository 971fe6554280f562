//! Shared test utilities for the changeset workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — helpers that drive the `git` CLI
//! - [`repo`] — [`repo::TestRepo`], a temporary repository with branch and
//!   commit helpers

pub mod git;
pub mod repo;
