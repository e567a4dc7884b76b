//! Report context — serializable rendering payload built from [`RunContext`].

use serde::{Deserialize, Serialize};

use sprintsync_core::{PlannedStory, RunContext};

use crate::error::RenderError;

/// Flat rendering payload for the sprint-report template.
///
/// Everything is pre-formatted into strings here so the template stays
/// free of date logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContext {
    pub sprint_label: String,
    /// `2024.01.15 - 2024.01.29`.
    pub period: String,
    /// Sprint end in the dotted format, quoted per story as the
    /// expected-completion date.
    pub sprint_end: String,
    pub theme: String,
    pub goal: String,
    pub capacity_points: u32,
    pub stories: Vec<PlannedStory>,
    pub dev_metrics: Vec<String>,
    pub quality_metrics: Vec<String>,
    pub resolved_issues: Vec<String>,
    pub open_issues: Vec<String>,
    pub next_sprint_heading: String,
    pub next_sprint_stories: Vec<String>,
    pub retro_keep: Vec<String>,
    pub retro_improve: Vec<String>,
    pub retro_try: Vec<String>,
    /// ISO authored-on stamp.
    pub authored: String,
}

impl ReportContext {
    /// Build a [`ReportContext`] from the per-run [`RunContext`].
    pub fn from_run(ctx: &RunContext) -> Self {
        let n = &ctx.narrative;
        ReportContext {
            sprint_label: ctx.sprint.label.clone(),
            period: ctx.period_range(),
            sprint_end: ctx.sprint_end_dotted(),
            theme: n.theme.clone(),
            goal: n.goal.clone(),
            capacity_points: n.capacity_points,
            stories: n.stories.clone(),
            dev_metrics: n.dev_metrics.clone(),
            quality_metrics: n.quality_metrics.clone(),
            resolved_issues: n.resolved_issues.clone(),
            open_issues: n.open_issues.clone(),
            next_sprint_heading: n.next_sprint_heading.clone(),
            next_sprint_stories: n.next_sprint_stories.clone(),
            retro_keep: n.retro_keep.clone(),
            retro_improve: n.retro_improve.clone(),
            retro_try: n.retro_try.clone(),
            authored: ctx.today_iso(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
