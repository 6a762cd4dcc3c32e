use changelog_updater::boundary::{assemble, StartMarker};
use changelog_updater::classifier::{classify, Classifier};
use changelog_updater::domain::{CommitCategory, LogEntry, VersionTag};
use changelog_updater::merge::{merge_into_document, tags_in_document};
use changelog_updater::render::{render_group, CommitGroup};

fn parse_all(lines: &[&str]) -> Vec<LogEntry> {
    lines
        .iter()
        .filter_map(|line| LogEntry::parse(line, "###"))
        .collect()
}

fn build(lines: &[&str], existing: &str, force: bool) -> String {
    let entries = parse_all(lines);
    let present = tags_in_document(existing);
    let assembly = assemble(
        &entries,
        &Classifier::default(),
        &present,
        force,
        StartMarker::default(),
    );
    merge_into_document(existing, &assembly.body)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_merge_beats_add() {
    for message in [
        "Merge branch 'add-login'",
        "add merge strategy",
        "MERGE new feature",
    ] {
        assert_eq!(classify(message), CommitCategory::Merges, "{}", message);
    }
}

#[test]
fn test_unmatched_messages_are_changed() {
    for message in ["Bump version", "Refactor parser", "Tweak CI", "Documentação"] {
        assert_eq!(classify(message), CommitCategory::Changed, "{}", message);
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_only_present_categories() {
    let mut group = CommitGroup::new();
    group.push(CommitCategory::Added, "Add login");
    group.push(CommitCategory::Fixed, "Fix crash");

    let output = render_group(&group);
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(headers, vec!["### Added", "### Fixed"]);
}

#[test]
fn test_render_empty_group_only_placeholder() {
    let output = render_group(&CommitGroup::new());
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(headers, vec!["### Notes"]);
    assert!(output.contains("* **No modifications were made**"));
}

// ============================================================================
// Whole history walks
// ============================================================================

#[test]
fn test_two_release_scenario() {
    let output = build(
        &[
            "tag: 1.2.0###Add login###2024-01-01",
            "###Fix crash###2024-01-01",
            "tag: 1.1.0###Fix logout###2023-12-01",
        ],
        "",
        false,
    );

    assert_eq!(
        tags_in_document(&output),
        vec![VersionTag::new("1.2.0"), VersionTag::new("1.1.0")]
    );

    let split = output.find("## 1.1.0").unwrap();
    let newer = &output[..split];
    let older = &output[split..];
    assert!(newer.contains("### Added\n\n* Add login"));
    assert!(newer.contains("### Fixed\n\n* Fix crash"));
    assert!(older.contains("### Fixed\n\n* Fix logout"));
    assert!(!older.contains("Add login"));
}

#[test]
fn test_rerun_is_idempotent() {
    let history = [
        "tag: 1.2.0###Add login###2024-01-01",
        "###Fix crash###2024-01-01",
        "tag: 1.1.0###Fix logout###2023-12-01",
    ];

    let first = build(&history, "", false);
    let second = build(&history, &first, false);
    assert_eq!(first, second);
}

#[test]
fn test_new_release_lands_on_top() {
    let first = build(&["tag: 1.1.0###Fix logout###2023-12-01"], "", false);
    let second = build(
        &[
            "tag: 1.2.0###Add login###2024-01-01",
            "tag: 1.1.0###Fix logout###2023-12-01",
        ],
        &first,
        false,
    );

    assert_eq!(
        tags_in_document(&second),
        vec![VersionTag::new("1.2.0"), VersionTag::new("1.1.0")]
    );
    assert!(second.ends_with(&first));
}

#[test]
fn test_sections_ordered_by_descending_tag() {
    let output = build(
        &[
            "tag: 2.1.0###Add export###2024-04-01",
            "tag: 2.0.0-rc###Fix import###2024-03-01",
            "tag: 2.0.0###Change api###2024-02-01",
            "tag: 1.9.9###Remove flag###2024-01-01",
        ],
        "",
        false,
    );

    let tags = tags_in_document(&output);
    let mut sorted = tags.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(tags, sorted);
    assert_eq!(tags.len(), 4);
}

#[test]
fn test_start_marker_closes_history() {
    let output = build(
        &[
            "tag: 0.1.0###Add core###2023-02-01",
            "tag: 0.0.1-beta###Initial commit###2023-01-01",
            "tag: 0.0.1-alpha###Scaffold###2022-12-01",
        ],
        "",
        false,
    );

    assert_eq!(output.matches("Start of J.Assy versioning system").count(), 1);
    assert!(output.ends_with("### Notes\n\n* **Start of J.Assy versioning system**\n\n"));
    assert!(!output.contains("0.0.1-alpha"));
    assert!(!output.contains("Initial commit"));
}

#[test]
fn test_custom_start_marker() {
    let entries = parse_all(&[
        "tag: 1.0.0###Add api###2024-01-01",
        "tag: 0.9.0###Add draft###2023-01-01",
    ]);
    let assembly = assemble(
        &entries,
        &Classifier::default(),
        &[],
        false,
        StartMarker::new("0.9.0", "Public history starts here"),
    );

    assert!(assembly.reached_start_marker);
    assert!(assembly
        .body
        .ends_with("## 0.9.0 - [2023-01-01]\n\n### Notes\n\n* **Public history starts here**\n\n"));
}

#[test]
fn test_merge_above_first_older_section() {
    let existing = "# Changelog\n\n## 1.9.0 - [2024-01-01]\n\n### Added\n\n* Add export\n\n";
    let new_block = "## 2.0.0 - [2024-02-01]\n\n### Changed\n\n* Rework api\n\n";

    let merged = merge_into_document(existing, new_block);
    assert_eq!(
        merged,
        format!(
            "# Changelog\n\n{}## 1.9.0 - [2024-01-01]\n\n### Added\n\n* Add export\n\n",
            new_block
        )
    );
}
