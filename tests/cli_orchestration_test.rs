use changelog_updater::cli::{run_changelog_workflow, ChangelogWorkflowArgs};
use changelog_updater::config::Config;
use changelog_updater::git::MockRepository;
use changelog_updater::warning::ChangelogWarning;
use std::fs;
use tempfile::TempDir;

fn history_repo() -> MockRepository {
    let mut repo = MockRepository::new();
    for tag in ["1.9.0", "2.0.0", "release-candidate"] {
        repo.add_tag(tag);
    }
    repo.add_commit("tag: 2.0.0, origin/main, main", "Rework api", "2024-02-01");
    repo.add_commit("", "Merge pull request #12 from team/api", "2024-01-20");
    repo.add_commit("", "Remove legacy endpoint", "2024-01-15");
    repo.add_commit("tag: 1.9.0", "Add export", "2024-01-01");
    repo
}

fn workflow_args(dir: &TempDir, force: bool) -> ChangelogWorkflowArgs {
    ChangelogWorkflowArgs {
        output_path: dir.path().join("CHANGELOG.md"),
        force,
        dry_run: false,
    }
}

const EXISTING: &str = "# Changelog\n\nProject history.\n\n\
                        ## 1.9.0 - [2024-01-01]\n\n### Added\n\n* Add export\n\n";

#[test]
fn test_new_section_spliced_above_existing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    fs::write(&path, EXISTING).unwrap();

    let result =
        run_changelog_workflow(&history_repo(), &workflow_args(&dir, false), &Config::default())
            .unwrap();

    let expected = "# Changelog\n\nProject history.\n\n\
                    ## 2.0.0 - [2024-02-01]\n\n\
                    ### Changed\n\n* Rework api\n\n\
                    ### Removed\n\n* Remove legacy endpoint\n\n\
                    ## 1.9.0 - [2024-01-01]\n\n### Added\n\n* Add export\n\n";
    assert!(result.written);
    assert_eq!(result.content, expected);
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    let config = Config::default();

    run_changelog_workflow(&history_repo(), &workflow_args(&dir, false), &config).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let result =
        run_changelog_workflow(&history_repo(), &workflow_args(&dir, false), &config).unwrap();

    assert!(!result.written);
    assert!(result.sections.is_empty());
    assert_eq!(result.content, first);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, ChangelogWarning::AlreadyUpToDate { .. })));
}

#[test]
fn test_force_overwrites_with_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    fs::write(&path, EXISTING).unwrap();
    let config = Config::default();

    let result = run_changelog_workflow(&history_repo(), &workflow_args(&dir, true), &config)
        .unwrap();

    assert!(result.written);
    assert!(result.content.starts_with(&config.document.header));
    assert!(!result.content.contains("Project history."));
    assert_eq!(result.content.matches("## 1.9.0").count(), 1);
    assert_eq!(result.content.matches("## 2.0.0").count(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), result.content);
}

#[test]
fn test_header_not_repeated_for_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    let config = Config::default();

    let mut older = MockRepository::new();
    older.add_tag("1.9.0");
    older.add_commit("tag: 1.9.0", "Add export", "2024-01-01");
    run_changelog_workflow(&older, &workflow_args(&dir, false), &config).unwrap();

    run_changelog_workflow(&history_repo(), &workflow_args(&dir, false), &config).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(content.matches("# Changelog").count(), 1);
    assert!(content.find("## 2.0.0").unwrap() < content.find("## 1.9.0").unwrap());
}

#[test]
fn test_custom_divisor_is_passed_through() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.history.divisor = "|~|".to_string();
    config.history.limit = 10;

    let mut repo = MockRepository::new();
    repo.add_tag("1.0.0");
    repo.add_record("tag: 1.0.0|~|Add api|~|2024-01-01");

    let result = run_changelog_workflow(&repo, &workflow_args(&dir, false), &config).unwrap();

    assert_eq!(
        repo.log_requests(),
        vec![("1.0.0".to_string(), "|~|".to_string(), 10)]
    );
    assert!(result.content.contains("## 1.0.0 - [2024-01-01]\n\n### Added\n\n* Add api\n\n"));
}
