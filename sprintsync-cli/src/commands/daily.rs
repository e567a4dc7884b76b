//! `sprintsync daily` — create today's standup only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use sprintsync_core::{DocsLayout, ReportNarrative, RunContext};
use sprintsync_engine::pipeline;

/// Arguments for `sprintsync daily`.
#[derive(Args, Debug)]
pub struct DailyArgs {
    /// Project root containing `docs/pm` (defaults to the current directory).
    #[arg(long, short = 'p', default_value = ".")]
    pub project_root: PathBuf,
}

impl DailyArgs {
    pub fn run(self) -> Result<()> {
        let today = Local::now().date_naive();
        let ctx = RunContext::new(today, None, ReportNarrative::default());
        let layout = DocsLayout::new(&self.project_root);

        let step =
            pipeline::run_daily_only(&layout, &ctx).context("daily standup creation failed")?;
        super::print_step(&step);
        Ok(())
    }
}
