//! [`TestRepo`] builder for branch-diff scenarios.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::git::{real_git_repo_with_commit, run_git};

/// A temporary git repository with helpers to shape two branches.
///
/// # Example
///
/// ```rust,no_run
/// use changeset_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write("industries/foo/bar.txt", "v1");
/// repo.commit("base");
/// repo.checkout_new_branch("feature");
/// repo.remove("industries/foo/bar.txt");
/// repo.commit("drop bar");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create a repository with one commit on `main`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        real_git_repo_with_commit(temp_dir.path());
        Self { temp_dir }
    }

    /// Return the root path of the repository.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` (relative to root), creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestRepo::write: {}: {e}", full_path.display()));
    }

    /// Delete a tracked file from the working tree.
    pub fn remove(&self, path: &str) {
        let full_path = self.root().join(path);
        fs::remove_file(&full_path)
            .unwrap_or_else(|e| panic!("TestRepo::remove: {}: {e}", full_path.display()));
    }

    /// Read a file (relative to root).
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Stage everything and commit.
    pub fn commit(&self, message: &str) {
        run_git(self.root(), &["add", "-A"]);
        run_git(self.root(), &["commit", "--allow-empty", "-m", message]);
    }

    /// Create `name` from the current HEAD and switch to it.
    pub fn checkout_new_branch(&self, name: &str) {
        run_git(self.root(), &["checkout", "-b", name]);
    }

    /// Switch to an existing branch.
    pub fn checkout(&self, name: &str) {
        run_git(self.root(), &["checkout", name]);
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
