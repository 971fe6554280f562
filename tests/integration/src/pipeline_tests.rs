//! Release-pipeline scenarios
//!
//! Each test drives the full stack (git diff, path normalization, block
//! splicing, atomic writes) against a real repository, the way a CI job
//! would invoke it between a feature branch and its release branch.

use changeset_core::{
    ChangesetConfig, ChangesetEngine, ChangesetReport, ChangesetRequest, DiffBackend,
    OutputTarget, open_provider,
};
use changeset_fs::NormalizedPath;
use changeset_git::{ChangeSet, CommandProvider, DiffProvider, Git2Provider};
use changeset_test_utils::git::run_git;
use changeset_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use rstest::rstest;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn run(
    repo: &TestRepo,
    backend: DiffBackend,
    source: &str,
    target: &str,
    folder: &str,
    output: OutputTarget,
) -> ChangesetReport {
    let root = NormalizedPath::new(repo.root());
    let config = ChangesetConfig {
        backend,
        ..Default::default()
    };
    let engine = ChangesetEngine::new(open_provider(backend, &root).unwrap(), config).unwrap();
    let request = ChangesetRequest::new(source, target, folder, output).unwrap();
    engine.run(&request).unwrap()
}

fn manifest_at(repo: &TestRepo, relative: &str) -> OutputTarget {
    OutputTarget::Manifest {
        yml_file: NormalizedPath::new(repo.root()).join(relative),
    }
}

/// A release branch and a feature branch touching several component folders.
fn release_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.write("industries/cpq/rules/pricing.json", "{}");
    repo.write("industries/cpq/rules/discounts.json", "{}");
    repo.write("industries/omni/flows/intake.json", "{}");
    repo.write("industries/omni/flows/legacy.json", "{}");
    repo.write("industries-extra/a/b/c.json", "{}");
    repo.commit("release baseline");
    repo.checkout_new_branch("release");

    repo.checkout_new_branch("feature");
    repo.write("industries/cpq/rules/pricing.json", "{\"v\":2}");
    repo.write("industries/cpq/rules/discounts.json", "{\"v\":2}");
    repo.write("industries/omni/cards/summary.json", "{}");
    repo.remove("industries/omni/flows/legacy.json");
    repo.write("industries-extra/a/b/c.json", "{\"v\":2}");
    repo.commit("feature work");
    repo.checkout("release");
    repo
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
#[case(DiffBackend::Git2)]
#[case(DiffBackend::Cli)]
fn test_backends_agree(#[case] backend: DiffBackend) {
    let repo = release_repo();
    let out = tempfile::tempdir().unwrap();

    let report = run(
        &repo,
        backend,
        "feature",
        "release",
        "industries",
        OutputTarget::TextFiles {
            dir: NormalizedPath::new(out.path()),
        },
    );

    assert_eq!(
        report.added_modified,
        vec!["industries/cpq/rules", "industries/omni/cards"]
    );
    assert_eq!(report.deleted, vec!["industries/omni/flows"]);
}

#[test]
fn test_sibling_folder_with_shared_prefix_is_excluded() {
    let repo = release_repo();
    let out = tempfile::tempdir().unwrap();

    let report = run(
        &repo,
        DiffBackend::Git2,
        "feature",
        "release",
        "industries",
        OutputTarget::TextFiles {
            dir: NormalizedPath::new(out.path()),
        },
    );

    assert!(
        report
            .added_modified
            .iter()
            .all(|p| p.starts_with("industries/"))
    );
}

#[test]
fn test_repeated_runs_keep_a_single_block() {
    let repo = release_repo();
    repo.write(
        "pipelines/release.yml",
        "name: release\nmanifestOnly: false\ntestLevel: RunLocalTests\n",
    );

    run(&repo, DiffBackend::Git2, "feature", "release", "industries", manifest_at(&repo, "pipelines/release.yml"));
    let first = repo.read("pipelines/release.yml");
    run(&repo, DiffBackend::Git2, "feature", "release", "industries", manifest_at(&repo, "pipelines/release.yml"));
    let second = repo.read("pipelines/release.yml");

    assert_eq!(first, second);
    assert_eq!(
        second,
        "name: release\nmanifestOnly: true\ntestLevel: RunLocalTests\nmanifest:\n  - cpq/rules\n  - omni/cards\n"
    );
    assert_eq!(
        repo.read("pipelines/destructive-changes-release.yml"),
        "destructiveChanges:\n  - omni/flows\n"
    );
}

#[test]
fn test_existing_destructive_file_keeps_other_content() {
    let repo = release_repo();
    repo.write(
        "pipelines/destructive-changes-release.yml",
        "manifestOnly: false\ndestructiveChanges:\n  - stale/entry\npostDeploy: cleanup\n",
    );

    run(&repo, DiffBackend::Cli, "feature", "release", "industries", manifest_at(&repo, "pipelines/release.yml"));

    let destructive: serde_yaml::Value =
        serde_yaml::from_str(&repo.read("pipelines/destructive-changes-release.yml")).unwrap();
    assert_eq!(destructive["manifestOnly"], serde_yaml::Value::Bool(true));
    assert_eq!(destructive["postDeploy"], serde_yaml::Value::from("cleanup"));
    assert_eq!(
        destructive["destructiveChanges"],
        serde_yaml::from_str::<serde_yaml::Value>("[omni/flows]").unwrap()
    );
}

#[test]
fn test_nested_folder_strips_full_prefix() {
    let repo = release_repo();

    let report = run(
        &repo,
        DiffBackend::Git2,
        "feature",
        "release",
        "industries/cpq/",
        manifest_at(&repo, "out/cpq.yml"),
    );

    assert_eq!(report.folder, "industries/cpq");
    assert_eq!(report.added_modified, vec!["industries/cpq/rules"]);
    assert_eq!(repo.read("out/cpq.yml"), "manifest:\n  - rules\n");
    repo.assert_file_not_exists("out/destructive-changes-cpq.yml");
}

#[test]
fn test_tags_and_commit_ids_resolve() {
    let repo = release_repo();
    run_git(repo.root(), &["tag", "v1.0", "release"]);
    let feature_sha = run_git(repo.root(), &["rev-parse", "feature"]);
    let out = tempfile::tempdir().unwrap();

    let report = run(
        &repo,
        DiffBackend::Git2,
        feature_sha.trim(),
        "v1.0",
        "industries",
        OutputTarget::TextFiles {
            dir: NormalizedPath::new(out.path()),
        },
    );

    assert_eq!(report.deleted, vec!["industries/omni/flows"]);
}

#[test]
fn test_rename_reports_old_and_new_locations() {
    let repo = TestRepo::new();
    repo.write("industries/a/old/file.json", "same content");
    repo.commit("baseline");
    repo.checkout_new_branch("feature");
    run_git(repo.root(), &["mv", "industries/a/old", "industries/a/new"]);
    repo.commit("rename folder");

    let root = NormalizedPath::new(repo.root());
    let providers: Vec<Box<dyn DiffProvider>> = vec![
        Box::new(Git2Provider::discover(&root).unwrap()),
        Box::new(CommandProvider::new(root.clone())),
    ];

    for provider in providers {
        let set = ChangeSet::from_changes(provider.name_status("main", "feature", "industries").unwrap());
        assert_eq!(set.added_modified, vec!["industries/a/new/file.json"]);
        assert_eq!(set.deleted, vec!["industries/a/old/file.json"]);
    }
}

#[test]
fn test_no_changes_writes_empty_list() {
    let repo = release_repo();
    let out = tempfile::tempdir().unwrap();

    let report = run(
        &repo,
        DiffBackend::Git2,
        "release",
        "release",
        "industries",
        OutputTarget::TextFiles {
            dir: NormalizedPath::new(out.path()),
        },
    );

    assert_eq!(report.writes.len(), 1);
    assert_eq!(
        std::fs::read_to_string(out.path().join("industries.txt")).unwrap(),
        ""
    );
}
