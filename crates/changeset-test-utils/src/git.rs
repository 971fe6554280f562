//! Git repository fixtures driven through the `git` CLI.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `path` and return its stdout.
///
/// # Panics
/// Panics if git cannot be spawned or exits non-zero.
pub fn run_git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("run_git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "run_git: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Initialises a real git repository with an initial commit on `main`.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the current branch to `main`
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    run_git(path, &["init"]);
    run_git(path, &["config", "user.email", "test@test.com"]);
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);
    run_git(path, &["branch", "-M", "main"]);
}
