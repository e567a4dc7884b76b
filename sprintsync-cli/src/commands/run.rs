//! `sprintsync run` — full synchronization pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use colored::Colorize;

use sprintsync_core::{DocsLayout, ReportNarrative, RunContext};
use sprintsync_engine::pipeline;

/// Arguments for `sprintsync run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Project root containing `docs/pm` (defaults to the current directory).
    #[arg(long, short = 'p', default_value = ".")]
    pub project_root: PathBuf,

    /// Overall completion percentage to embed in the system-state
    /// dashboard; the marker is left alone when omitted.
    #[arg(long, short = 'c', value_parser = clap::value_parser!(u8).range(0..=100))]
    pub completion: Option<u8>,

    /// YAML file overriding the stock report narrative (theme, planned
    /// stories, metrics, retrospective).
    #[arg(long, value_name = "PATH")]
    pub report_config: Option<PathBuf>,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let narrative = match &self.report_config {
            Some(path) => ReportNarrative::load(path)
                .with_context(|| format!("cannot load report config '{}'", path.display()))?,
            None => ReportNarrative::default(),
        };

        // The only wall-clock read; everything downstream takes the
        // context.
        let today = Local::now().date_naive();
        let ctx = RunContext::new(today, self.completion, narrative);
        let layout = DocsLayout::new(&self.project_root);

        println!("🚀 Starting document sync for {}", ctx.today_iso());
        println!("📊 Current sprint: {}", ctx.sprint.label);
        println!("{}", "-".repeat(50));

        // Status lines stream as steps complete: on a failed run the
        // user still sees which documents were already rewritten.
        pipeline::run_all_with(&layout, &ctx, super::print_step)
            .context("synchronization run failed")?;

        println!("{}", "-".repeat(50));
        println!("{}", "✓ All project documents synced".green());
        println!("📁 Documents location: {}", layout.docs_root().display());
        Ok(())
    }
}
