//! CLI end-to-end tests that invoke the compiled `changeset` binary.

use assert_cmd::Command;
use changeset_test_utils::repo::TestRepo;
use predicates::prelude::*;

/// Get a Command for the changeset binary with no inherited CHANGESET_* variables
fn changeset_cmd() -> Command {
    let mut cmd = Command::cargo_bin("changeset").expect("Failed to find changeset binary");
    for var in [
        "CHANGESET_SOURCE_BRANCH",
        "CHANGESET_TARGET_BRANCH",
        "CHANGESET_FOLDER",
        "CHANGESET_YML_FILE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// `feature` modifies one folder and deletes another under `industries/`.
fn feature_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.write("industries/foo/bar/a.txt", "1");
    repo.write("industries/old/gone/b.txt", "2");
    repo.commit("baseline");

    repo.checkout_new_branch("feature");
    repo.write("industries/foo/bar/a.txt", "1 changed");
    repo.remove("industries/old/gone/b.txt");
    repo.commit("feature work");
    repo.checkout("main");
    repo
}

const BRANCH_ARGS: [&str; 6] = [
    "--source-branch",
    "feature",
    "--target-branch",
    "main",
    "--folder",
    "industries",
];

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn test_help_exits_zero() {
    changeset_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source-branch"))
        .stdout(predicate::str::contains("--yml-file"));
}

#[test]
fn test_missing_required_flag_fails() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .args(["--source-branch", "feature", "--target-branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--folder"));
}

#[test]
fn test_flags_from_environment() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .env("CHANGESET_SOURCE_BRANCH", "feature")
        .env("CHANGESET_TARGET_BRANCH", "main")
        .env("CHANGESET_FOLDER", "industries")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unique trimmed added/modified paths saved to industries.txt",
        ));
}

// ============================================================================
// Text mode
// ============================================================================

#[test]
fn test_text_mode_writes_lists_in_working_directory() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unique trimmed added/modified paths saved to industries.txt",
        ))
        .stdout(predicate::str::contains(
            "Unique trimmed deleted paths saved to destructive-changes-industries.txt",
        ));

    assert_eq!(repo.read("industries.txt"), "industries/foo/bar\n");
    assert_eq!(
        repo.read("destructive-changes-industries.txt"),
        "industries/old/gone\n"
    );
}

#[test]
fn test_output_dir_and_repo_flag() {
    let repo = feature_repo();
    let out = tempfile::tempdir().unwrap();

    changeset_cmd()
        .current_dir(out.path())
        .args(BRANCH_ARGS)
        .arg("--repo")
        .arg(repo.root())
        .args(["--output-dir", "lists", "--backend", "cli"])
        .assert()
        .success();

    let list = std::fs::read_to_string(out.path().join("lists/industries.txt")).unwrap();
    assert_eq!(list, "industries/foo/bar\n");
}

// ============================================================================
// YAML mode
// ============================================================================

#[test]
fn test_yaml_mode_updates_descriptor_and_sibling() {
    let repo = feature_repo();
    repo.write(
        "deploy/pipeline.yml",
        "name: release\nmanifestOnly: false\nmanifest:\n  - stale/x/y\n",
    );

    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .args(["--yml-file", "deploy/pipeline.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated deploy/pipeline.yml with manifest entries",
        ))
        .stdout(predicate::str::contains(
            "Updated deploy/destructive-changes-pipeline.yml with destructive changes entries",
        ));

    let manifest: serde_yaml::Value =
        serde_yaml::from_str(&repo.read("deploy/pipeline.yml")).unwrap();
    assert_eq!(manifest["manifestOnly"], serde_yaml::Value::Bool(true));
    assert_eq!(manifest["manifest"][0], serde_yaml::Value::from("foo/bar"));

    assert_eq!(
        repo.read("deploy/destructive-changes-pipeline.yml"),
        "destructiveChanges:\n  - old/gone\n"
    );
}

#[test]
fn test_yml_file_pointing_at_directory_fails() {
    let repo = feature_repo();
    std::fs::create_dir_all(repo.root().join("deploy")).unwrap();

    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .args(["--yml-file", "deploy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

// ============================================================================
// Dry run, JSON and failures
// ============================================================================

#[test]
fn test_dry_run_writes_nothing() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would write Unique trimmed added/modified paths saved to industries.txt",
        ));

    repo.assert_file_not_exists("industries.txt");
    repo.assert_file_not_exists("destructive-changes-industries.txt");
}

#[test]
fn test_json_report() {
    let repo = feature_repo();
    let output = changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .args(["--json", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["added_modified"][0], "industries/foo/bar");
    assert_eq!(report["deleted"][0], "industries/old/gone");
    assert_eq!(report["applied"], false);
    assert_eq!(report["writes"][0]["kind"], "path_list");
}

#[test]
fn test_unknown_branch_fails_without_writing() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .args(["--source-branch", "nope", "--target-branch", "main"])
        .args(["--folder", "industries"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("nope"));

    repo.assert_file_not_exists("industries.txt");
}

#[test]
fn test_cli_backend_failure_reports_git_stderr() {
    let repo = feature_repo();
    changeset_cmd()
        .current_dir(repo.root())
        .args(["--source-branch", "nope", "--target-branch", "main"])
        .args(["--folder", "industries", "--backend", "cli"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_config_file_fails() {
    let repo = feature_repo();
    repo.write(".changeset.toml", "segment_depth = 0\n");

    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("segment_depth"));
}

#[test]
fn test_repo_config_changes_depth() {
    let repo = feature_repo();
    repo.write(".changeset.toml", "segment_depth = 2\n");

    changeset_cmd()
        .current_dir(repo.root())
        .args(BRANCH_ARGS)
        .assert()
        .success();

    assert_eq!(repo.read("industries.txt"), "industries/foo\n");
}
