//! Linear synchronization pipeline.
//!
//! One run is a fixed sequence of five steps executed in order:
//! patch the task matrix, patch the backlog, patch the system state,
//! materialize the daily standup, generate the sprint report.
//!
//! Failure is fail-fast, not transactional: a failing step aborts the
//! remainder, and steps that already ran keep their side effects. The
//! returned error names the failing step. Missing documents are *not*
//! failures; they surface as [`StepStatus::SkippedMissing`] and the
//! run continues.

use std::fmt;
use std::path::PathBuf;

use sprintsync_core::{DocsLayout, RunContext, SprintPeriod};
use sprintsync_renderer::ReportRenderer;

use crate::error::EngineError;
use crate::materialize::{materialize, standup_substitutions, MaterializeOutcome};
use crate::patcher::{patch, PatchOutcome, PatchRule};
use crate::rules;
use crate::writer::atomic_write;

// ---------------------------------------------------------------------------
// Step / report types
// ---------------------------------------------------------------------------

/// The five pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TaskMatrix,
    Backlog,
    SystemState,
    DailyStandup,
    SprintReport,
}

impl Step {
    /// All steps in execution order.
    pub fn all() -> &'static [Step] {
        &[
            Step::TaskMatrix,
            Step::Backlog,
            Step::SystemState,
            Step::DailyStandup,
            Step::SprintReport,
        ]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::TaskMatrix => "task matrix",
            Step::Backlog => "backlog",
            Step::SystemState => "system state",
            Step::DailyStandup => "daily standup",
            Step::SprintReport => "sprint report",
        };
        f.write_str(name)
    }
}

/// What a completed (non-failed) step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Tracked document rewritten in place.
    Patched { rules_applied: usize },
    /// Tracked document or template absent; step skipped with a warning.
    SkippedMissing,
    /// Artifact created from its template.
    Created,
    /// Artifact for this key already exists; left untouched.
    AlreadyExists,
    /// Artifact rebuilt wholesale and written.
    Generated,
}

/// Outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    /// The document the step targeted (the template path when the
    /// template itself was missing).
    pub path: PathBuf,
    pub status: StepStatus,
}

/// Summary of a full synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub sprint: SprintPeriod,
    pub steps: Vec<StepReport>,
}

fn step_err(step: Step, source: EngineError) -> EngineError {
    EngineError::Step {
        step,
        source: Box::new(source),
    }
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

fn patch_step(
    step: Step,
    path: PathBuf,
    rules: &[PatchRule],
    ctx: &RunContext,
) -> Result<StepReport, EngineError> {
    let outcome = patch(&path, rules, ctx).map_err(|e| step_err(step, e))?;
    let status = match outcome {
        PatchOutcome::Patched { rules_applied } => StepStatus::Patched { rules_applied },
        PatchOutcome::Missing => StepStatus::SkippedMissing,
    };
    Ok(StepReport { step, path, status })
}

fn standup_step(layout: &DocsLayout, ctx: &RunContext) -> Result<StepReport, EngineError> {
    let step = Step::DailyStandup;
    let template = layout.standup_template();
    let target = layout.daily_standup(ctx.today);
    let outcome = materialize(&template, &target, &standup_substitutions(ctx))
        .map_err(|e| step_err(step, e))?;
    let (path, status) = match outcome {
        MaterializeOutcome::Created { path } => (path, StepStatus::Created),
        MaterializeOutcome::AlreadyExists { path } => (path, StepStatus::AlreadyExists),
        MaterializeOutcome::MissingTemplate { template } => {
            (template, StepStatus::SkippedMissing)
        }
    };
    Ok(StepReport { step, path, status })
}

fn report_step(layout: &DocsLayout, ctx: &RunContext) -> Result<StepReport, EngineError> {
    let step = Step::SprintReport;
    let path = layout.sprint_report(&ctx.sprint);
    let content = ReportRenderer::new()
        .and_then(|r| r.render(ctx))
        .map_err(|e| step_err(step, e.into()))?;
    // Unconditional write: a rerun in the same sprint overwrites its
    // own prior report, hand edits included.
    atomic_write(&path, &content).map_err(|e| step_err(step, e))?;
    Ok(StepReport {
        step,
        path,
        status: StepStatus::Generated,
    })
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run the full five-step pipeline.
pub fn run_all(layout: &DocsLayout, ctx: &RunContext) -> Result<RunReport, EngineError> {
    run_all_with(layout, ctx, |_| {})
}

/// Run the full five-step pipeline, invoking `on_step` as each step
/// completes.
///
/// A failing step aborts the run after the callback has seen every step
/// that already completed, so callers can surface the partial progress
/// (there is no rollback; those steps kept their side effects).
pub fn run_all_with(
    layout: &DocsLayout,
    ctx: &RunContext,
    mut on_step: impl FnMut(&StepReport),
) -> Result<RunReport, EngineError> {
    let mut steps = Vec::with_capacity(Step::all().len());
    let mut record = |report: StepReport| {
        on_step(&report);
        steps.push(report);
    };
    record(patch_step(
        Step::TaskMatrix,
        layout.task_matrix(),
        &rules::task_matrix_rules(),
        ctx,
    )?);
    record(patch_step(
        Step::Backlog,
        layout.backlog(),
        &rules::backlog_rules(),
        ctx,
    )?);
    record(patch_step(
        Step::SystemState,
        layout.system_state(),
        &rules::system_state_rules(ctx.completion_percent.is_some()),
        ctx,
    )?);
    record(standup_step(layout, ctx)?);
    record(report_step(layout, ctx)?);
    drop(record);
    Ok(RunReport {
        sprint: ctx.sprint.clone(),
        steps,
    })
}

/// Create only the daily standup (step 4 of the full run).
pub fn run_daily_only(layout: &DocsLayout, ctx: &RunContext) -> Result<StepReport, EngineError> {
    standup_step(layout, ctx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
