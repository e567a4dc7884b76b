use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed_docs(root: &Path) {
    let pm = root.join("docs").join("pm");
    let files: [(&str, &str); 4] = [
        (
            "05_development/task_assignment_matrix.md",
            "### Sprint 1: \"Old\"\n**Period**: 2024.01.15 - 2024.01.29\n\n**📅 Last Updated**: 2024-01-15\n",
        ),
        (
            "02_requirements/product_backlog.md",
            "# Backlog\n\n## 🎯 Current Sprint (Sprint 1)\nold\n\n## Icebox\n\n**📅 Last Updated**: 2024-01-15\n",
        ),
        (
            "03_specifications/current_system_state.md",
            "**Authored**: 2024-01-15\n**Sprint**: Sprint 1\n**Overall Completion**: 40% ✅\n**📅 Last Updated**: 2024-01-15\n**📋 Next Review**: 2024-01-22\n",
        ),
        (
            "10_templates/daily_standup_template.md",
            "# Daily Standup - YYYY-MM-DD\n**When**: YYYY-MM-DD HH:MM\n**Sprint**: Sprint XX\n",
        ),
    ];
    for (rel, content) in files {
        let path = pm.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn sprintsync() -> Command {
    Command::cargo_bin("sprintsync").expect("binary builds")
}

#[test]
fn run_syncs_all_documents_and_exits_zero() {
    let root = TempDir::new().unwrap();
    seed_docs(root.path());

    sprintsync()
        .arg("run")
        .arg("--project-root")
        .arg(root.path())
        .arg("--completion")
        .arg("85")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current sprint: Sprint"))
        .stdout(predicate::str::contains("All project documents synced"));

    let state = fs::read_to_string(
        root.path()
            .join("docs/pm/03_specifications/current_system_state.md"),
    )
    .unwrap();
    assert!(state.contains("**Overall Completion**: 85% ✅"));

    let reports = root.path().join("docs/pm/07_reports/sprint_reports");
    assert_eq!(fs::read_dir(&reports).unwrap().count(), 1);

    let standups = root.path().join("docs/pm/06_meetings/daily_standups");
    assert_eq!(fs::read_dir(&standups).unwrap().count(), 1);
}

#[test]
fn run_on_empty_tree_warns_but_succeeds() {
    let root = TempDir::new().unwrap();

    sprintsync()
        .arg("run")
        .arg("--project-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    // Only the generated report exists; no tracked document was created.
    assert!(!root
        .path()
        .join("docs/pm/05_development/task_assignment_matrix.md")
        .exists());
    assert!(root.path().join("docs/pm/07_reports/sprint_reports").exists());
}

#[test]
fn daily_is_created_once_then_skipped() {
    let root = TempDir::new().unwrap();
    seed_docs(root.path());

    sprintsync()
        .arg("daily")
        .arg("--project-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    sprintsync()
        .arg("daily")
        .arg("--project-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let standups = root.path().join("docs/pm/06_meetings/daily_standups");
    assert_eq!(fs::read_dir(&standups).unwrap().count(), 1);

    // daily must not run the rest of the pipeline
    assert!(!root.path().join("docs/pm/07_reports").exists());
}

#[test]
fn failed_run_still_prints_completed_step_lines() {
    let root = TempDir::new().unwrap();
    seed_docs(root.path());
    // A file squatting on the reports directory makes the final step
    // fail after the tracked documents were already rewritten.
    let reports = root.path().join("docs/pm/07_reports");
    fs::create_dir_all(&reports).unwrap();
    fs::write(reports.join("sprint_reports"), "in the way").unwrap();

    sprintsync()
        .arg("run")
        .arg("--project-root")
        .arg(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("task matrix updated"))
        .stdout(predicate::str::contains("daily standup created"))
        .stderr(predicate::str::contains("sprint report"));

    // The steps that ran kept their effects, and the output said so.
    let matrix = fs::read_to_string(
        root.path()
            .join("docs/pm/05_development/task_assignment_matrix.md"),
    )
    .unwrap();
    assert!(!matrix.contains("**📅 Last Updated**: 2024-01-15"));
}

#[test]
fn bad_report_config_fails_with_context() {
    let root = TempDir::new().unwrap();
    seed_docs(root.path());
    let config = root.path().join("narrative.yaml");
    fs::write(&config, "stories: {broken").unwrap();

    sprintsync()
        .arg("run")
        .arg("--project-root")
        .arg(root.path())
        .arg("--report-config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("narrative.yaml"));
}

#[test]
fn report_config_overrides_theme() {
    let root = TempDir::new().unwrap();
    seed_docs(root.path());
    let config = root.path().join("narrative.yaml");
    fs::write(&config, "theme: \"CLI Override\"\n").unwrap();

    sprintsync()
        .arg("run")
        .arg("--project-root")
        .arg(root.path())
        .arg("--report-config")
        .arg(&config)
        .assert()
        .success();

    let reports_dir = root.path().join("docs/pm/07_reports/sprint_reports");
    let report = fs::read_dir(&reports_dir).unwrap().next().unwrap().unwrap();
    let content = fs::read_to_string(report.path()).unwrap();
    assert!(content.contains("**Theme**: \"CLI Override\""));
}

#[test]
fn completion_out_of_range_is_rejected_by_clap() {
    sprintsync()
        .arg("run")
        .arg("--completion")
        .arg("150")
        .assert()
        .failure();
}
