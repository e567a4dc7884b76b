//! Rule sets for the tracked documents.
//!
//! Fixed configuration, defined at process start and never mutated.
//! Markers are the literal bold-label-plus-value surface the documents
//! use (e.g. `**📅 Last Updated**: 2024-01-15`); the patcher matches
//! exactly this syntax, nothing structural.
//!
//! Every builder emits text its own locator matches again, which is
//! what makes back-to-back runs converge.

use once_cell::sync::Lazy;
use regex::Regex;

use sprintsync_core::RunContext;

use crate::patcher::{Locator, PatchRule};

// ---------------------------------------------------------------------------
// Marker patterns
// ---------------------------------------------------------------------------

static SPRINT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### Sprint -?\d+:.*\n").expect("valid pattern"));

static PERIOD_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Period\*\*: \d{4}\.\d{2}\.\d{2} - \d{4}\.\d{2}\.\d{2}")
        .expect("valid pattern")
});

static LAST_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*📅 Last Updated\*\*: \d{4}-\d{2}-\d{2}").expect("valid pattern"));

static AUTHORED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Authored\*\*: \d{4}-\d{2}-\d{2}").expect("valid pattern"));

static SPRINT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Sprint\*\*: Sprint -?\d+").expect("valid pattern"));

static COMPLETION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Overall Completion\*\*: \d+% ✅").expect("valid pattern"));

static NEXT_REVIEW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*📋 Next Review\*\*: \d{4}-\d{2}-\d{2}").expect("valid pattern"));

/// Heading prefix of the backlog's current-sprint section. The full
/// heading line carries the sprint label, so only the prefix is fixed.
pub const BACKLOG_SECTION_HEADING: &str = "## 🎯 Current Sprint";

// ---------------------------------------------------------------------------
// Shared rules
// ---------------------------------------------------------------------------

fn last_updated_rule() -> PatchRule {
    PatchRule {
        name: "last-updated",
        locator: Locator::Pattern(LAST_UPDATED.clone()),
        build: Box::new(|ctx| format!("**📅 Last Updated**: {}", ctx.today_iso())),
    }
}

// ---------------------------------------------------------------------------
// Task assignment matrix
// ---------------------------------------------------------------------------

/// Rules for `05_development/task_assignment_matrix.md`.
pub fn task_matrix_rules() -> Vec<PatchRule> {
    vec![
        PatchRule {
            name: "sprint-header",
            locator: Locator::Pattern(SPRINT_HEADER.clone()),
            build: Box::new(|ctx| {
                format!("### {}: \"{}\"\n", ctx.sprint.label, ctx.narrative.theme)
            }),
        },
        PatchRule {
            name: "period-range",
            locator: Locator::Pattern(PERIOD_RANGE.clone()),
            build: Box::new(|ctx| format!("**Period**: {}", ctx.period_range())),
        },
        last_updated_rule(),
    ]
}

// ---------------------------------------------------------------------------
// Product backlog
// ---------------------------------------------------------------------------

/// The rebuilt current-sprint section, trailing separator included.
fn backlog_section(ctx: &RunContext) -> String {
    let n = &ctx.narrative;
    let mut s = String::new();
    s.push_str(&format!("{BACKLOG_SECTION_HEADING} ({})\n\n", ctx.sprint.label));
    s.push_str("### Sprint Goal\n");
    s.push_str(&format!("**\"{}\"** - {}\n\n", n.theme, n.goal));
    s.push_str(&format!("### Selected Stories ({} SP)\n", n.capacity_points));
    for (i, story) in n.stories.iter().enumerate() {
        s.push_str(&format!(
            "{}. **[{}]** {} `{} SP` ({})\n",
            i + 1,
            story.id,
            story.title,
            story.points,
            story.progress_note
        ));
    }
    s.push_str(&format!(
        "\n**Total**: {} SP (matches team capacity)\n\n",
        n.capacity_points
    ));
    s
}

/// Rules for `02_requirements/product_backlog.md`.
pub fn backlog_rules() -> Vec<PatchRule> {
    vec![
        PatchRule {
            name: "current-sprint-section",
            locator: Locator::Section {
                heading: BACKLOG_SECTION_HEADING,
            },
            build: Box::new(backlog_section),
        },
        last_updated_rule(),
    ]
}

// ---------------------------------------------------------------------------
// System state dashboard
// ---------------------------------------------------------------------------

/// Rules for `03_specifications/current_system_state.md`.
///
/// The completion rule is only installed when the run actually carries
/// a percentage; an absent `--completion` leaves the marker alone.
pub fn system_state_rules(include_completion: bool) -> Vec<PatchRule> {
    let mut rules = vec![
        PatchRule {
            name: "authored",
            locator: Locator::Pattern(AUTHORED.clone()),
            build: Box::new(|ctx| format!("**Authored**: {}", ctx.today_iso())),
        },
        PatchRule {
            name: "sprint-marker",
            locator: Locator::Pattern(SPRINT_MARKER.clone()),
            build: Box::new(|ctx| format!("**Sprint**: {}", ctx.sprint.label)),
        },
    ];
    if include_completion {
        rules.push(PatchRule {
            name: "overall-completion",
            locator: Locator::Pattern(COMPLETION.clone()),
            // Installed only when a percentage was supplied.
            build: Box::new(|ctx| {
                format!(
                    "**Overall Completion**: {}% ✅",
                    ctx.completion_percent.unwrap_or(0)
                )
            }),
        });
    }
    rules.push(last_updated_rule());
    rules.push(PatchRule {
        name: "next-review",
        locator: Locator::Pattern(NEXT_REVIEW.clone()),
        build: Box::new(|ctx| format!("**📋 Next Review**: {}", ctx.next_review_iso())),
    });
    rules
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patcher::apply_rules;
    use chrono::NaiveDate;
    use sprintsync_core::ReportNarrative;

    fn ctx_with(completion: Option<u8>) -> RunContext {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        RunContext::new(today, completion, ReportNarrative::default())
    }

    /// Every rule's replacement must be matched by its own locator,
    /// otherwise repeated runs drift.
    #[test]
    fn every_rule_matches_its_own_replacement() {
        let ctx = ctx_with(Some(85));
        let all = task_matrix_rules()
            .into_iter()
            .chain(backlog_rules())
            .chain(system_state_rules(true));
        for rule in all {
            let replacement = (rule.build)(&ctx);
            assert!(
                rule.locator.find(&replacement).is_some(),
                "rule '{}' does not match its own output:\n{replacement}",
                rule.name
            );
        }
    }

    #[test]
    fn task_matrix_rules_rewrite_header_period_and_stamp() {
        let doc = "\
# Task Assignment Matrix

### Sprint 12: \"Old Theme\"
**Period**: 2025.06.02 - 2025.06.16

| Task | Owner |
|------|-------|
| API  | June  |

**📅 Last Updated**: 2025-06-02
";
        let (out, applied) = apply_rules(doc, &task_matrix_rules(), &ctx_with(None));
        assert_eq!(applied, 3);
        assert!(out.contains("### Sprint 1: \"Performance & Quality Enhancement\"\n"));
        assert!(out.contains("**Period**: 2024.01.15 - 2024.01.29"));
        assert!(out.contains("**📅 Last Updated**: 2024-01-15"));
        assert!(out.contains("| API  | June  |"), "table content must survive");
    }

    #[test]
    fn backlog_section_is_rebuilt_from_narrative() {
        let doc = "\
# Product Backlog

## 🎯 Current Sprint (Sprint 9)
stale body

## 📋 Icebox
- later

**📅 Last Updated**: 2023-11-01
";
        let (out, applied) = apply_rules(doc, &backlog_rules(), &ctx_with(None));
        assert_eq!(applied, 2);
        assert!(out.contains("## 🎯 Current Sprint (Sprint 1)"));
        assert!(!out.contains("stale body"));
        assert!(out.contains("**[US-006]** Announcement calendar view `8 SP`"));
        assert!(out.contains("## 📋 Icebox\n- later"), "following section must survive");
    }

    #[test]
    fn system_state_skips_completion_unless_supplied() {
        let doc = "\
**Authored**: 2023-01-01
**Sprint**: Sprint 9
**Overall Completion**: 40% ✅
**📅 Last Updated**: 2023-01-01
**📋 Next Review**: 2023-01-08
";
        let (without, _) = apply_rules(doc, &system_state_rules(false), &ctx_with(None));
        assert!(without.contains("**Overall Completion**: 40% ✅"));

        let (with, _) = apply_rules(doc, &system_state_rules(true), &ctx_with(Some(85)));
        assert!(with.contains("**Overall Completion**: 85% ✅"));
        assert!(with.contains("**📋 Next Review**: 2024-01-22"));
    }

    #[test]
    fn rule_sets_are_idempotent_on_fixture_docs() {
        let ctx = ctx_with(Some(70));
        let fixtures: Vec<(&str, Vec<PatchRule>)> = vec![
            (
                "### Sprint 2: \"x\"\n**Period**: 2024.02.01 - 2024.02.15\n**📅 Last Updated**: 2024-02-01\n",
                task_matrix_rules(),
            ),
            (
                "## 🎯 Current Sprint (Sprint 2)\nold\n\n## Other\n**📅 Last Updated**: 2024-02-01\n",
                backlog_rules(),
            ),
            (
                "**Authored**: 2024-02-01\n**Sprint**: Sprint 2\n**Overall Completion**: 10% ✅\n**📅 Last Updated**: 2024-02-01\n**📋 Next Review**: 2024-02-08\n",
                system_state_rules(true),
            ),
        ];
        for (doc, rules) in fixtures {
            let (once, n1) = apply_rules(doc, &rules, &ctx);
            let (twice, n2) = apply_rules(&once, &rules, &ctx);
            assert_eq!(once, twice, "second application drifted");
            assert_eq!(n1, n2, "rule match count changed on second application");
        }
    }
}
