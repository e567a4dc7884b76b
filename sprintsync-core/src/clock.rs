//! Sprint numbering against the fixed project epoch.
//!
//! Sprints are 14 days long and numbered sequentially from the project
//! start date. Numbering uses floor division, so a date before the epoch
//! yields `id <= 0` rather than an error; the function is total.

use chrono::{Duration, NaiveDate};

use crate::types::SprintPeriod;

/// Fixed sprint length in days.
pub const SPRINT_LENGTH_DAYS: i64 = 14;

/// Project start date — sprint 1 begins here.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid epoch date")
}

/// Compute the sprint containing `today`.
///
/// The returned window is a *rolling* one: `start` is `today` and `end`
/// is `today + 14d`, measured from the call date rather than from the
/// epoch-aligned sprint boundary. When a run does not land exactly on a
/// boundary, the reported `end` therefore drifts off the boundary the
/// sprint `id` implies. That mismatch is inherited behavior and is kept
/// as-is; do not "fix" it to epoch-aligned dates without deciding which
/// semantics downstream documents actually want.
pub fn sprint_for(today: NaiveDate) -> SprintPeriod {
    let days_since_epoch = (today - epoch()).num_days();
    let id = days_since_epoch.div_euclid(SPRINT_LENGTH_DAYS) + 1;
    SprintPeriod {
        id,
        label: format!("Sprint {id}"),
        start: today,
        end: today + Duration::days(SPRINT_LENGTH_DAYS),
    }
}
