//! Per-run context — the single source of "current" values.
//!
//! Built once per synchronization run from an injected date (never from
//! the wall clock inside core logic) and shared read-only by every
//! patch, materialize, and generate operation in that run.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::sprint_for;
use crate::narrative::ReportNarrative;
use crate::types::SprintPeriod;

/// Immutable snapshot of the values a synchronization run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    pub today: NaiveDate,
    pub sprint: SprintPeriod,
    /// Overall completion percentage for the system-state dashboard;
    /// only embedded when supplied.
    pub completion_percent: Option<u8>,
    pub narrative: ReportNarrative,
}

impl RunContext {
    /// Build a context for `today`, deriving the sprint window from it.
    pub fn new(
        today: NaiveDate,
        completion_percent: Option<u8>,
        narrative: ReportNarrative,
    ) -> Self {
        RunContext {
            today,
            sprint: sprint_for(today),
            completion_percent,
            narrative,
        }
    }

    /// `2024-01-15` — stamp format for Last Updated / Next Review lines.
    pub fn today_iso(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    /// `2024.01.15 - 2024.01.29` — dotted range used by period markers.
    pub fn period_range(&self) -> String {
        format!(
            "{} - {}",
            self.sprint.start.format("%Y.%m.%d"),
            self.sprint.end.format("%Y.%m.%d")
        )
    }

    /// Sprint end in the dotted format, for completion-estimate lines.
    pub fn sprint_end_dotted(&self) -> String {
        self.sprint.end.format("%Y.%m.%d").to_string()
    }

    /// Review stamp one week out.
    pub fn next_review_iso(&self) -> String {
        (self.today + Duration::days(7)).format("%Y-%m-%d").to_string()
    }

    /// `20240115` — filename key for the daily standup.
    pub fn today_compact(&self) -> String {
        self.today.format("%Y%m%d").to_string()
    }

    /// Standup meeting timestamp; meetings are pinned at 09:00.
    pub fn standup_timestamp(&self) -> String {
        format!("{} 09:00", self.today_iso())
    }
}
