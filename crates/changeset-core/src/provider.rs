//! Diff provider selection

use changeset_fs::NormalizedPath;
use changeset_git::{CommandProvider, DiffProvider, Git2Provider};

use crate::Result;
use crate::config::DiffBackend;

/// Open the provider for `backend` against the repository at `repo`.
///
/// The git2 backend discovers the repository upward from `repo`; the CLI
/// backend runs `git` with `repo` as its working directory.
pub fn open_provider(backend: DiffBackend, repo: &NormalizedPath) -> Result<Box<dyn DiffProvider>> {
    tracing::debug!(%backend, repo = %repo, "Opening diff provider");
    Ok(match backend {
        DiffBackend::Git2 => Box::new(Git2Provider::discover(repo)?),
        DiffBackend::Cli => Box::new(CommandProvider::new(repo.clone())),
    })
}
