//! Diff provider trait

use crate::Result;
use crate::change::FileChange;

/// Source of name/status changes between two revisions.
///
/// Implementations must report paths relative to the repository root with
/// `/` separators, restricted to `folder`.
pub trait DiffProvider {
    /// List the changes that turn `old_ref` into `new_ref` under `folder`.
    fn name_status(&self, old_ref: &str, new_ref: &str, folder: &str) -> Result<Vec<FileChange>>;
}

impl<P: DiffProvider + ?Sized> DiffProvider for Box<P> {
    fn name_status(&self, old_ref: &str, new_ref: &str, folder: &str) -> Result<Vec<FileChange>> {
        (**self).name_status(old_ref, new_ref, folder)
    }
}
