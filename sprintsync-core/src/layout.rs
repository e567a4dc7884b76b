//! Fixed document layout under `<project_root>/docs/pm`.
//!
//! # Directory skeleton
//!
//! ```text
//! docs/pm/
//!   02_requirements/product_backlog.md
//!   03_specifications/current_system_state.md
//!   05_development/task_assignment_matrix.md
//!   06_meetings/daily_standups/daily_standup_<YYYYMMDD>.md
//!   07_reports/sprint_reports/sprint_report_<sprint_n>.md
//!   10_templates/daily_standup_template.md
//! ```
//!
//! All functions are pure path computation; nothing here touches the
//! filesystem.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::types::SprintPeriod;

/// Path resolver for the tracked-document skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    docs_root: PathBuf,
}

impl DocsLayout {
    /// Root the layout at `<project_root>/docs/pm`.
    pub fn new(project_root: &Path) -> Self {
        DocsLayout {
            docs_root: project_root.join("docs").join("pm"),
        }
    }

    /// `docs/pm` itself.
    pub fn docs_root(&self) -> &Path {
        &self.docs_root
    }

    pub fn task_matrix(&self) -> PathBuf {
        self.docs_root
            .join("05_development")
            .join("task_assignment_matrix.md")
    }

    pub fn backlog(&self) -> PathBuf {
        self.docs_root
            .join("02_requirements")
            .join("product_backlog.md")
    }

    pub fn system_state(&self) -> PathBuf {
        self.docs_root
            .join("03_specifications")
            .join("current_system_state.md")
    }

    pub fn standup_template(&self) -> PathBuf {
        self.docs_root
            .join("10_templates")
            .join("daily_standup_template.md")
    }

    /// One standup artifact per calendar day.
    pub fn daily_standup(&self, date: NaiveDate) -> PathBuf {
        self.docs_root
            .join("06_meetings")
            .join("daily_standups")
            .join(format!("daily_standup_{}.md", date.format("%Y%m%d")))
    }

    /// One report per sprint label; reruns in the same sprint resolve
    /// to the same path.
    pub fn sprint_report(&self, sprint: &SprintPeriod) -> PathBuf {
        self.docs_root
            .join("07_reports")
            .join("sprint_reports")
            .join(format!("sprint_report_{}.md", sprint.file_stem()))
    }
}
