//! Sprintsync core library — sprint clock, run context, document layout.
//!
//! Public API surface:
//! - [`types`] — [`SprintPeriod`]
//! - [`clock`] — epoch + sprint numbering
//! - [`context`] — per-run [`RunContext`]
//! - [`layout`] — fixed docs/pm path skeleton
//! - [`narrative`] — overridable report narrative config
//! - [`error`] — [`CoreError`]

pub mod clock;
pub mod context;
pub mod error;
pub mod layout;
pub mod narrative;
pub mod types;

pub use clock::{epoch, sprint_for, SPRINT_LENGTH_DAYS};
pub use context::RunContext;
pub use error::CoreError;
pub use layout::DocsLayout;
pub use narrative::{PlannedStory, ReportNarrative};
pub use types::SprintPeriod;
