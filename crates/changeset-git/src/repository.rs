//! `libgit2`-backed diff provider

use std::path::Path;

use changeset_fs::NormalizedPath;
use git2::{Delta, DiffDelta, DiffOptions, ErrorCode, Repository, Tree};

use crate::change::{ChangeStatus, FileChange};
use crate::provider::DiffProvider;
use crate::{Error, Result};

/// Diff provider that reads trees directly through `git2`.
///
/// Folders are interpreted relative to the directory the provider was
/// opened from, the same way `git diff -- <folder>` treats its pathspec.
pub struct Git2Provider {
    repo: Repository,
    /// Start directory relative to the working tree root, `/`-separated
    prefix: String,
}

impl Git2Provider {
    /// Open the repository containing `start`, searching parent directories.
    pub fn discover(start: &NormalizedPath) -> Result<Self> {
        let repo = Repository::discover(start.to_native())?;
        let prefix = match repo.workdir() {
            Some(workdir) => workdir_prefix(start, workdir)?,
            None => String::new(),
        };
        tracing::debug!(
            workdir = ?repo.workdir(),
            prefix = %prefix,
            "Opened repository"
        );
        Ok(Self { repo, prefix })
    }

    /// Resolve a revision (branch, remote branch, tag, commit id) to its tree.
    fn resolve_tree(&self, spec: &str) -> Result<Tree<'_>> {
        let object = self.repo.revparse_single(spec).map_err(|e| match e.code() {
            ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Ambiguous => {
                Error::RefNotFound {
                    name: spec.to_string(),
                }
            }
            _ => Error::Git(e),
        })?;
        tracing::debug!(spec, oid = %object.id(), "Resolved revision");
        Ok(object.peel_to_tree()?)
    }
}

impl DiffProvider for Git2Provider {
    fn name_status(&self, old_ref: &str, new_ref: &str, folder: &str) -> Result<Vec<FileChange>> {
        let old_tree = self.resolve_tree(old_ref)?;
        let new_tree = self.resolve_tree(new_ref)?;

        let pathspec = prefixed_pathspec(&self.prefix, folder);
        let mut opts = DiffOptions::new();
        opts.pathspec(&pathspec);

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))?;

        let changes: Vec<FileChange> = diff.deltas().filter_map(change_from_delta).collect();
        tracing::debug!(
            old_ref,
            new_ref,
            pathspec = %pathspec,
            count = changes.len(),
            "Collected tree changes"
        );
        Ok(changes)
    }
}

/// Location of `start` inside the working tree; empty at the root.
fn workdir_prefix(start: &NormalizedPath, workdir: &Path) -> Result<String> {
    let start = NormalizedPath::canonicalize(start)?.to_native();
    let root = NormalizedPath::canonicalize(workdir)?.to_native();
    Ok(start
        .strip_prefix(&root)
        .map(|relative| NormalizedPath::new(relative).as_str().trim_matches('/').to_string())
        .unwrap_or_default())
}

/// Repository-relative pathspec for a folder given relative to `prefix`.
fn prefixed_pathspec(prefix: &str, folder: &str) -> String {
    if prefix.is_empty() {
        return folder.to_string();
    }
    match folder.trim_start_matches("./").trim_end_matches('/') {
        "" | "." => prefix.to_string(),
        folder => format!("{prefix}/{folder}"),
    }
}

/// Map a delta to a change record; deltas that carry no change are dropped.
fn change_from_delta(delta: DiffDelta<'_>) -> Option<FileChange> {
    let status = match delta.status() {
        Delta::Added => ChangeStatus::Added,
        Delta::Modified => ChangeStatus::Modified,
        Delta::Deleted => ChangeStatus::Deleted,
        Delta::Renamed => ChangeStatus::Renamed,
        Delta::Copied => ChangeStatus::Copied,
        Delta::Typechange => ChangeStatus::TypeChanged,
        Delta::Conflicted => ChangeStatus::Other('U'),
        Delta::Unreadable => ChangeStatus::Other('X'),
        Delta::Unmodified | Delta::Ignored | Delta::Untracked => return None,
    };

    let file = if status.is_deletion() {
        delta.old_file()
    } else {
        delta.new_file()
    };
    let path = NormalizedPath::new(file.path()?);
    Some(FileChange::new(status, path.as_str()))
}
