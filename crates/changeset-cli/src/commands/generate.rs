//! Changeset generation
//!
//! Resolves configuration, runs the engine, and reports each written file.

use std::io::Write;

use colored::Colorize;

use changeset_core::{
    ChangesetConfig, ChangesetEngine, ChangesetReport, ChangesetRequest, OutputTarget,
    open_provider,
};
use changeset_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Run a full changeset generation from parsed arguments.
pub fn run_generate(cli: &Cli) -> Result<()> {
    let repo = NormalizedPath::canonicalize(&cli.repo)?;
    let explicit = cli.config.as_ref().map(NormalizedPath::new);

    let mut config = ChangesetConfig::load(&repo, explicit.as_ref())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    tracing::debug!(?config, "Resolved configuration");

    let request = ChangesetRequest::new(
        &cli.source_branch,
        &cli.target_branch,
        &cli.folder,
        output_target(cli)?,
    )?
    .dry_run(cli.dry_run);

    let provider = open_provider(config.backend, &repo)?;
    let engine = ChangesetEngine::new(provider, config)?;
    let report = engine.run(&request)?;

    if cli.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn output_target(cli: &Cli) -> Result<OutputTarget> {
    match &cli.yml_file {
        Some(yml) if yml.is_dir() => Err(CliError::user(format!(
            "--yml-file must name a file, but '{}' is a directory",
            yml.display()
        ))),
        Some(yml) => Ok(OutputTarget::Manifest {
            yml_file: NormalizedPath::new(yml),
        }),
        None => Ok(match &cli.output_dir {
            Some(dir) => OutputTarget::TextFiles {
                dir: NormalizedPath::new(dir),
            },
            None => OutputTarget::text_in_cwd(),
        }),
    }
}

fn print_report(report: &ChangesetReport) {
    if report.added_modified.is_empty() && report.deleted.is_empty() {
        eprintln!(
            "{} No changes under {} between {} and {}",
            "note".yellow().bold(),
            report.folder.cyan(),
            report.target_branch,
            report.source_branch
        );
    }

    for write in &report.writes {
        let message = write.kind.describe(&write.path);
        if report.applied {
            println!("{message}");
        } else {
            println!("{} Would write {message}", "[dry-run]".yellow());
        }
    }
}
