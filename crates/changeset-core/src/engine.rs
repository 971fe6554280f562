//! ChangesetEngine implementation
//!
//! The engine turns a branch comparison into the files a release pipeline
//! consumes: it asks a [`DiffProvider`] for the changes under a folder,
//! normalizes the paths, plans every output file in memory, and only then
//! writes them.

use changeset_blocks::splice_block;
use changeset_fs::{NormalizedPath, io};
use changeset_git::{ChangeSet, DiffProvider};
use serde::Serialize;

use crate::config::ChangesetConfig;
use crate::output::{OutputKind, OutputTarget, PlannedWrite, render_path_list};
use crate::paths::{normalize_folder, normalize_paths, strip_folder_prefix};
use crate::{Error, Result};

/// One branch comparison to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetRequest {
    /// Branch holding the changes (new side of the diff)
    pub source_branch: String,
    /// Branch compared against (old side of the diff)
    pub target_branch: String,
    /// Folder the diff is restricted to, in normalized form
    pub folder: String,
    pub output: OutputTarget,
    /// If true, plan without modifying the filesystem
    pub dry_run: bool,
}

impl ChangesetRequest {
    /// Build a request, normalizing the folder argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty branch or folder.
    pub fn new(
        source_branch: impl Into<String>,
        target_branch: impl Into<String>,
        folder: &str,
        output: OutputTarget,
    ) -> Result<Self> {
        let source_branch = source_branch.into();
        let target_branch = target_branch.into();
        let folder = normalize_folder(folder);

        for (name, value) in [
            ("source branch", &source_branch),
            ("target branch", &target_branch),
            ("folder", &folder),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidRequest {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        Ok(Self {
            source_branch,
            target_branch,
            folder,
            output,
            dry_run: false,
        })
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangesetReport {
    pub source_branch: String,
    pub target_branch: String,
    pub folder: String,
    /// Trimmed, deduplicated, sorted added/modified paths
    pub added_modified: Vec<String>,
    /// Trimmed, deduplicated, sorted deleted paths
    pub deleted: Vec<String>,
    /// Files written (or that would be written in dry-run mode), in order
    pub writes: Vec<PlannedWrite>,
    /// Whether `writes` reached the filesystem
    pub applied: bool,
}

/// Engine producing changesets from a diff provider.
pub struct ChangesetEngine<P> {
    provider: P,
    config: ChangesetConfig,
}

impl<P: DiffProvider> ChangesetEngine<P> {
    /// Create an engine, validating the configuration.
    pub fn new(provider: P, config: ChangesetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    /// Diff, normalize, and plan without touching the filesystem.
    ///
    /// Reads existing manifest files in YAML mode.
    pub fn plan(&self, request: &ChangesetRequest) -> Result<ChangesetReport> {
        let changes = self.provider.name_status(
            &request.target_branch,
            &request.source_branch,
            &request.folder,
        )?;
        let raw = ChangeSet::from_changes(changes);
        tracing::debug!(
            added_modified = raw.added_modified.len(),
            deleted = raw.deleted.len(),
            folder = %request.folder,
            "Collected changes"
        );

        let depth = self.config.segment_depth;
        let added_modified = normalize_paths(&raw.added_modified, depth);
        let deleted = normalize_paths(&raw.deleted, depth);

        let writes = match &request.output {
            OutputTarget::TextFiles { dir } => {
                self.plan_text(dir, &request.folder, &added_modified, &deleted)
            }
            OutputTarget::Manifest { yml_file } => {
                self.plan_manifest(yml_file, &request.folder, &added_modified, &deleted)?
            }
        };
        for write in &writes {
            tracing::debug!(path = %write.path, kind = ?write.kind, entries = write.entries.len(), "Planned write");
        }

        Ok(ChangesetReport {
            source_branch: request.source_branch.clone(),
            target_branch: request.target_branch.clone(),
            folder: request.folder.clone(),
            added_modified,
            deleted,
            writes,
            applied: false,
        })
    }

    /// Plan and, unless `request.dry_run`, write every planned file.
    ///
    /// Planning finishes before the first write, so a diff or read failure
    /// leaves the filesystem untouched.
    pub fn run(&self, request: &ChangesetRequest) -> Result<ChangesetReport> {
        let mut report = self.plan(request)?;
        if request.dry_run {
            tracing::debug!(writes = report.writes.len(), "Dry run, skipping writes");
            return Ok(report);
        }

        for write in &report.writes {
            io::write_text(&write.path, &write.content)?;
            tracing::info!(path = %write.path, kind = ?write.kind, "Wrote changeset file");
        }
        report.applied = true;
        Ok(report)
    }

    fn plan_text(
        &self,
        dir: &NormalizedPath,
        folder: &str,
        added_modified: &[String],
        deleted: &[String],
    ) -> Vec<PlannedWrite> {
        let mut writes = vec![PlannedWrite {
            path: dir.join(&format!("{folder}.txt")),
            kind: OutputKind::PathList,
            content: render_path_list(added_modified),
            entries: added_modified.to_vec(),
        }];

        if !deleted.is_empty() {
            writes.push(PlannedWrite {
                path: dir.join(&format!("{}{folder}.txt", self.config.destructive_prefix)),
                kind: OutputKind::DestructivePathList,
                content: render_path_list(deleted),
                entries: deleted.to_vec(),
            });
        }
        writes
    }

    fn plan_manifest(
        &self,
        yml_file: &NormalizedPath,
        folder: &str,
        added_modified: &[String],
        deleted: &[String],
    ) -> Result<Vec<PlannedWrite>> {
        let mut writes = vec![self.splice_into(
            yml_file.clone(),
            OutputKind::Manifest,
            &self.config.manifest_key,
            folder,
            added_modified,
        )?];

        if !deleted.is_empty() {
            writes.push(self.splice_into(
                yml_file.with_file_name_prefix(&self.config.destructive_prefix),
                OutputKind::DestructiveManifest,
                &self.config.destructive_key,
                folder,
                deleted,
            )?);
        }
        Ok(writes)
    }

    fn splice_into(
        &self,
        path: NormalizedPath,
        kind: OutputKind,
        key: &str,
        folder: &str,
        paths: &[String],
    ) -> Result<PlannedWrite> {
        let entries: Vec<String> = paths
            .iter()
            .map(|path| strip_folder_prefix(path, folder).to_string())
            .collect();
        let original = io::read_text_or_empty(&path)?;
        let content = splice_block(&original, key, &entries);
        Ok(PlannedWrite {
            path,
            kind,
            entries,
            content,
        })
    }
}
