//! Domain types for the sprint calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One numbered sprint and its nominal date window.
///
/// `id` is a deterministic function of calendar time and the project
/// epoch (see [`crate::clock::sprint_for`]); `end - start` is always
/// the fixed sprint length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintPeriod {
    /// Sequential sprint number. Dates before the epoch produce
    /// `id <= 0`; callers that care must check.
    pub id: i64,
    /// Display label, always `"Sprint {id}"`.
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SprintPeriod {
    /// Filename stem for artifacts keyed by this sprint:
    /// `"Sprint 12"` → `"sprint_12"`.
    pub fn file_stem(&self) -> String {
        self.label.to_lowercase().replace(' ', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_is_lower_snake() {
        let sprint = SprintPeriod {
            id: 7,
            label: "Sprint 7".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 4, 22).unwrap(),
        };
        assert_eq!(sprint.file_stem(), "sprint_7");
    }
}
