//! CLI argument parsing using clap derive

use std::path::PathBuf;

use changeset_core::DiffBackend;
use clap::Parser;

/// changeset - List the folders changed between two branches
///
/// Without --yml-file, writes <folder>.txt (and destructive-changes-<folder>.txt
/// when files were deleted). With --yml-file, splices the entries into the
/// descriptor's `manifest:` block and a sibling `destructiveChanges:` file.
#[derive(Parser, Debug)]
#[command(name = "changeset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Branch holding the changes
    #[arg(long, env = "CHANGESET_SOURCE_BRANCH")]
    pub source_branch: String,

    /// Branch to compare against
    #[arg(long, env = "CHANGESET_TARGET_BRANCH")]
    pub target_branch: String,

    /// Folder the diff is restricted to
    #[arg(long, env = "CHANGESET_FOLDER")]
    pub folder: String,

    /// YAML descriptor to update instead of writing text lists
    #[arg(long, env = "CHANGESET_YML_FILE")]
    pub yml_file: Option<PathBuf>,

    /// Directory for the text lists (defaults to the current directory)
    #[arg(long, conflicts_with = "yml_file")]
    pub output_dir: Option<PathBuf>,

    /// Repository directory
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file (defaults to <repo>/.changeset.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diff backend: git2 or cli
    #[arg(long)]
    pub backend: Option<DiffBackend>,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
