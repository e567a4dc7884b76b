//! # sprintsync-engine
//!
//! Document synchronization engine: in-place patching of tracked
//! markdown documents, create-once template materialization, and the
//! linear run pipeline that sequences both against the fixed layout.
//!
//! Call [`pipeline::run_all`] for a full synchronization run or
//! [`pipeline::run_daily_only`] to create just the daily standup.

pub mod error;
pub mod materialize;
pub mod patcher;
pub mod pipeline;
pub mod rules;
pub mod writer;

pub use error::EngineError;
pub use materialize::{materialize, MaterializeOutcome};
pub use patcher::{apply_rules, patch, Locator, PatchOutcome, PatchRule};
pub use pipeline::{run_all, run_all_with, run_daily_only, RunReport, Step, StepReport, StepStatus};
