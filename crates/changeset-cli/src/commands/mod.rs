//! Command implementations for changeset-cli

pub mod generate;

pub use generate::run_generate;
