pub mod daily;
pub mod run;

use colored::Colorize;
use sprintsync_engine::{StepReport, StepStatus};

/// One status line per completed step.
pub(crate) fn print_step(report: &StepReport) {
    let path = report.path.display();
    match &report.status {
        StepStatus::Patched { rules_applied } => println!(
            "{} {} updated: {path} ({rules_applied} markers)",
            "✓".green(),
            report.step
        ),
        StepStatus::SkippedMissing => println!(
            "{} {} skipped: {path} not found",
            "⚠".yellow(),
            report.step
        ),
        StepStatus::Created => println!("{} {} created: {path}", "✓".green(), report.step),
        StepStatus::AlreadyExists => {
            println!("{} {} already exists: {path}", "·".dimmed(), report.step)
        }
        StepStatus::Generated => println!("{} {} generated: {path}", "✓".green(), report.step),
    }
}
